use crate::models::ClassName;

/// Boxed error used at trait boundaries implemented by collaborators.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, thiserror::Error)]
pub enum DiscoveryError {
    #[error("failed to instantiate container extension {class}: {source}")]
    ExtensionInstantiation {
        class: ClassName,
        #[source]
        source: BoxError,
    },
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Container error: {0}")]
    Container(String),
}

pub type Result<T> = std::result::Result<T, DiscoveryError>;
