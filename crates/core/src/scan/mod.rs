//! Classpath scanning: physical scanners plus the process-wide memo over them.

pub mod cache;
pub mod fs;
pub mod pool;

pub use cache::{ScanCache, ScanStats};
pub use fs::FsClasspathScanner;
