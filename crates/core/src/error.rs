use thiserror::Error;

pub use beanscope_api::DiscoveryError;

/// Failure while reading a single classpath root.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Not a local classpath root: {0}")]
    NotLocal(String),
}

pub type Result<T> = std::result::Result<T, DiscoveryError>;
