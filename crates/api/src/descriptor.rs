use crate::container::ContainerExtension;
use crate::models::ClassName;
use indexmap::IndexSet;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::sync::Arc;

/// An extension instance plus the location token the container uses for diagnostics.
#[derive(Debug, Clone)]
pub struct ExtensionRegistration {
    pub extension: Arc<dyn ContainerExtension>,
    pub location: String,
}

impl ExtensionRegistration {
    pub fn new(extension: Arc<dyn ContainerExtension>, location: impl Into<String>) -> Self {
        Self {
            extension,
            location: location.into(),
        }
    }
}

impl Serialize for ExtensionRegistration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ExtensionRegistration", 2)?;
        state.serialize_field("name", self.extension.name())?;
        state.serialize_field("location", &self.location)?;
        state.end()
    }
}

/// Frozen deployment handed to the container. Nothing can be added or
/// removed once it has been built.
#[derive(Debug, Clone, Serialize)]
pub struct DeploymentDescriptor {
    discovered_classes: IndexSet<ClassName>,
    enabled_alternatives: Vec<ClassName>,
    enabled_interceptors: Vec<ClassName>,
    enabled_decorators: Vec<ClassName>,
    enabled_alternative_stereotypes: Vec<ClassName>,
    extensions: Vec<ExtensionRegistration>,
}

impl DeploymentDescriptor {
    pub fn new(
        discovered_classes: IndexSet<ClassName>,
        enabled_alternatives: Vec<ClassName>,
        enabled_interceptors: Vec<ClassName>,
        enabled_decorators: Vec<ClassName>,
        enabled_alternative_stereotypes: Vec<ClassName>,
        extensions: Vec<ExtensionRegistration>,
    ) -> Self {
        Self {
            discovered_classes,
            enabled_alternatives,
            enabled_interceptors,
            enabled_decorators,
            enabled_alternative_stereotypes,
            extensions,
        }
    }

    /// Discovered classes in first-discovery order.
    pub fn discovered_classes(&self) -> &IndexSet<ClassName> {
        &self.discovered_classes
    }

    pub fn is_discovered(&self, name: &str) -> bool {
        self.discovered_classes.contains(name)
    }

    pub fn enabled_alternatives(&self) -> &[ClassName] {
        &self.enabled_alternatives
    }

    pub fn enabled_interceptors(&self) -> &[ClassName] {
        &self.enabled_interceptors
    }

    pub fn enabled_decorators(&self) -> &[ClassName] {
        &self.enabled_decorators
    }

    pub fn enabled_alternative_stereotypes(&self) -> &[ClassName] {
        &self.enabled_alternative_stereotypes
    }

    pub fn extensions(&self) -> &[ExtensionRegistration] {
        &self.extensions
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
