use rayon::{ThreadPool, ThreadPoolBuilder};
use tracing::warn;

/// Scan worker count for a machine with `cpus` logical cores:
/// `max(2, ceil(min(4, cpus * 0.75) + cpus * 1.25))`.
pub fn thread_count_for(cpus: usize) -> usize {
    let cpus = cpus as f64;
    let threads = ((cpus * 0.75).min(4.0) + cpus * 1.25).ceil() as usize;
    threads.max(2)
}

pub fn default_thread_count() -> usize {
    let cpus = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    thread_count_for(cpus)
}

/// Builds the scan pool, or `None` when the OS refuses the threads.
/// Callers then scan on their own thread.
pub fn build_pool(threads: usize) -> Option<ThreadPool> {
    match ThreadPoolBuilder::new()
        .num_threads(threads)
        .thread_name(|i| format!("beanscope-scan-{}", i))
        .build()
    {
        Ok(pool) => Some(pool),
        Err(e) => {
            warn!("Failed to build scan pool with {} threads: {}", threads, e);
            None
        }
    }
}
