pub mod container;
pub mod descriptor;
pub mod error;
pub mod models;
pub mod resolve;

// Re-export commonly used types
pub use container::{ContainerExtension, ContainerSpi};
pub use descriptor::{DeploymentDescriptor, ExtensionRegistration};
pub use error::{BoxError, DiscoveryError, Result};
pub use models::*;
pub use resolve::TypeResolver;
