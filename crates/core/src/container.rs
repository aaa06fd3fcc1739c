//! In-process stand-in for the DI container.
//!
//! Extension types are instantiated through registered factories and the
//! started deployment is kept for inspection.

use beanscope_api::markers;
use beanscope_api::{
    BoxError, ClassInfo, ClassName, ContainerExtension, ContainerSpi, DeploymentDescriptor,
};
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{debug, info};

pub type ExtensionFactory =
    Arc<dyn Fn() -> Result<Arc<dyn ContainerExtension>, BoxError> + Send + Sync>;

/// Extension known only by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedExtension {
    name: String,
}

impl NamedExtension {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl ContainerExtension for NamedExtension {
    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Default)]
pub struct InMemoryContainer {
    factories: RwLock<HashMap<ClassName, ExtensionFactory>>,
    started: RwLock<Option<DeploymentDescriptor>>,
}

impl InMemoryContainer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_factory(&self, class: impl Into<ClassName>, factory: ExtensionFactory) {
        let mut factories = self
            .factories
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        factories.insert(class.into(), factory);
    }

    /// Register a factory producing a [`NamedExtension`] named after the class.
    pub fn register_named(&self, class: impl Into<ClassName>) {
        let class = class.into();
        let name = class.to_string();
        self.register_factory(
            class,
            Arc::new(move || {
                let extension: Arc<dyn ContainerExtension> =
                    Arc::new(NamedExtension::new(name.clone()));
                Ok(extension)
            }),
        );
    }

    pub fn is_started(&self) -> bool {
        self.started
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// The deployment the container was started with.
    pub fn deployment(&self) -> Option<DeploymentDescriptor> {
        self.started
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl ContainerSpi for InMemoryContainer {
    fn is_extension_type(&self, class: &ClassInfo) -> bool {
        class.implements(&markers::EXTENSION)
    }

    fn instantiate_extension(
        &self,
        class: &ClassInfo,
    ) -> Result<Arc<dyn ContainerExtension>, BoxError> {
        let factory = {
            let factories = self
                .factories
                .read()
                .unwrap_or_else(PoisonError::into_inner);
            factories.get(&class.name).cloned()
        };
        match factory {
            Some(factory) => {
                debug!("Instantiating container extension {}", class.name);
                factory()
            }
            None => Err(format!(
                "no accessible no-argument constructor for {}",
                class.name
            )
            .into()),
        }
    }

    fn start(&self, descriptor: DeploymentDescriptor) -> Result<(), BoxError> {
        let mut started = self.started.write().unwrap_or_else(PoisonError::into_inner);
        if started.is_some() {
            return Err("container already started".into());
        }
        info!(
            "Starting container with {} classes and {} extensions",
            descriptor.discovered_classes().len(),
            descriptor.extensions().len()
        );
        *started = Some(descriptor);
        Ok(())
    }
}
