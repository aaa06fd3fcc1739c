//! Process-wide memo over physical classpath scans.
//!
//! Results are keyed by their inputs and never invalidated. Concurrent
//! identical requests may both reach the scanner; whichever result is
//! stored first is the one every caller gets back.

use super::fs::FsClasspathScanner;
use super::pool;
use crate::config::DiscoveryConfig;
use beanscope_api::ClassName;
use beanscope_plugin::ClasspathScanner;
use dashmap::DashMap;
use once_cell::sync::{Lazy, OnceCell};
use rayon::ThreadPool;
use serde::Serialize;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::debug;
use url::Url;

const PATH_SEPARATOR: &str = if cfg!(windows) { ";" } else { ":" };

static GLOBAL_SCAN_CACHE: Lazy<Arc<ScanCache>> = Lazy::new(|| {
    let config = DiscoveryConfig::from_env();
    let threads = config
        .scan_threads
        .unwrap_or_else(pool::default_thread_count);
    Arc::new(ScanCache::with_threads(
        Arc::new(FsClasspathScanner::from_config(&config)),
        threads,
    ))
});

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScanStats {
    /// Calls that reached the underlying scanner.
    pub physical_scans: usize,
    /// Calls answered from memory.
    pub cache_hits: usize,
    pub cached_entries: usize,
}

pub struct ScanCache {
    scanner: Arc<dyn ClasspathScanner>,
    pool: Option<Arc<ThreadPool>>,
    classpath_roots: OnceCell<Vec<Url>>,
    bean_archives: OnceCell<Arc<Vec<Url>>>,
    classpath_scans: DashMap<String, Arc<Vec<ClassName>>>,
    package_scans: DashMap<String, Arc<Vec<ClassName>>>,
    physical_scans: AtomicUsize,
    cache_hits: AtomicUsize,
}

impl ScanCache {
    /// A cache whose scans run on the calling thread.
    pub fn new(scanner: Arc<dyn ClasspathScanner>) -> Self {
        Self {
            scanner,
            pool: None,
            classpath_roots: OnceCell::new(),
            bean_archives: OnceCell::new(),
            classpath_scans: DashMap::new(),
            package_scans: DashMap::new(),
            physical_scans: AtomicUsize::new(0),
            cache_hits: AtomicUsize::new(0),
        }
    }

    /// A cache with a dedicated scan pool of `threads` workers.
    pub fn with_threads(scanner: Arc<dyn ClasspathScanner>, threads: usize) -> Self {
        let mut cache = Self::new(scanner);
        cache.pool = pool::build_pool(threads).map(Arc::new);
        cache
    }

    /// The shared cache over the filesystem classpath described by the environment.
    pub fn global() -> Arc<ScanCache> {
        GLOBAL_SCAN_CACHE.clone()
    }

    pub fn classpath_roots(&self) -> &[Url] {
        self.classpath_roots
            .get_or_init(|| self.scanner.classpath_roots())
    }

    /// Classpath roots that are bean archives, computed once.
    pub fn bean_archive_roots(&self) -> Arc<Vec<Url>> {
        if let Some(found) = self.bean_archives.get() {
            self.cache_hits.fetch_add(1, Ordering::Relaxed);
            return found.clone();
        }
        self.bean_archives
            .get_or_init(|| {
                let roots = self.classpath_roots().to_vec();
                let found = self.physical(|scanner| scanner.find_bean_archives(&roots));
                debug!(
                    "{} of {} classpath roots are bean archives",
                    found.len(),
                    roots.len()
                );
                Arc::new(found)
            })
            .clone()
    }

    /// Every class under `roots`, keyed by the roots in the order given.
    pub fn class_names_for_classpath(&self, roots: &[Url]) -> Arc<Vec<ClassName>> {
        let key = roots
            .iter()
            .map(Url::as_str)
            .collect::<Vec<_>>()
            .join(PATH_SEPARATOR);
        self.memoized(&self.classpath_scans, key, |scanner| {
            scanner.class_names(roots)
        })
    }

    /// Classes directly inside `package` within `root`.
    pub fn class_names_for_package(&self, package: &str, root: &Url) -> Arc<Vec<ClassName>> {
        let key = format!("{}@{}", package, root);
        self.memoized(&self.package_scans, key, |scanner| {
            scanner.class_names_in_package(package, root)
        })
    }

    pub fn stats(&self) -> ScanStats {
        ScanStats {
            physical_scans: self.physical_scans.load(Ordering::Relaxed),
            cache_hits: self.cache_hits.load(Ordering::Relaxed),
            cached_entries: self.classpath_scans.len()
                + self.package_scans.len()
                + usize::from(self.bean_archives.get().is_some()),
        }
    }

    fn memoized(
        &self,
        store: &DashMap<String, Arc<Vec<ClassName>>>,
        key: String,
        scan: impl FnOnce(&dyn ClasspathScanner) -> Vec<ClassName> + Send,
    ) -> Arc<Vec<ClassName>> {
        if let Some(hit) = store.get(&key) {
            self.cache_hits.fetch_add(1, Ordering::Relaxed);
            return hit.value().clone();
        }
        // Scan without holding a shard lock; the first stored result wins.
        let computed = Arc::new(self.physical(scan));
        store.entry(key).or_insert(computed).value().clone()
    }

    fn physical<T: Send>(
        &self,
        scan: impl FnOnce(&dyn ClasspathScanner) -> T + Send,
    ) -> T {
        self.physical_scans.fetch_add(1, Ordering::Relaxed);
        let scanner = self.scanner.as_ref();
        match &self.pool {
            Some(pool) => pool.install(|| scan(scanner)),
            None => scan(scanner),
        }
    }
}
