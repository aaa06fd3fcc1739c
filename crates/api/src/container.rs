use crate::descriptor::DeploymentDescriptor;
use crate::error::BoxError;
use crate::models::ClassInfo;
use std::fmt::Debug;
use std::sync::Arc;

/// A ready-made extension object handed to the container at startup.
pub trait ContainerExtension: Send + Sync + Debug {
    fn name(&self) -> &str;
}

/// The DI container collaborator, as seen from discovery.
pub trait ContainerSpi: Send + Sync {
    /// Whether the container treats this type as one of its extensions.
    fn is_extension_type(&self, class: &ClassInfo) -> bool;

    /// Construct an extension type through its no-argument constructor.
    fn instantiate_extension(
        &self,
        class: &ClassInfo,
    ) -> Result<Arc<dyn ContainerExtension>, BoxError>;

    /// Boot the container from a finished descriptor.
    fn start(&self, descriptor: DeploymentDescriptor) -> Result<(), BoxError>;
}
