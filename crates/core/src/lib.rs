pub mod config;
pub mod container;
pub mod discovery;
pub mod error;
pub mod features;
pub mod logging;
pub mod registry;
pub mod scan;

pub use config::DiscoveryConfig;
pub use container::{InMemoryContainer, NamedExtension};
pub use discovery::{
    DeploymentAssembler, DiscoveryDriver, DiscoveryGraph, DiscoveryOutcome, DiscoveryReport,
    DiscoveryState, DiscoveryStats,
};
pub use error::{Result, ScanError};
pub use features::{StandardDiscovery, TestToolDiscovery};
pub use logging::init_logging;
pub use registry::InMemoryTypeRegistry;
pub use scan::{FsClasspathScanner, ScanCache, ScanStats};
