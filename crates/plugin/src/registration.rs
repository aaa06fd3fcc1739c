use crate::extension::DiscoveryExtension;
use std::sync::Arc;

/// Ordered set of discovery plugins. Registration order is dispatch order.
#[derive(Clone, Default)]
pub struct DiscoveryExtensions {
    extensions: Vec<Arc<dyn DiscoveryExtension>>,
}

impl DiscoveryExtensions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an extension
    pub fn register(&mut self, extension: Arc<dyn DiscoveryExtension>) {
        self.extensions.push(extension);
    }

    pub fn with(mut self, extension: Arc<dyn DiscoveryExtension>) -> Self {
        self.register(extension);
        self
    }

    /// Add multiple extensions
    pub fn with_all(
        mut self,
        extensions: impl IntoIterator<Item = Arc<dyn DiscoveryExtension>>,
    ) -> Self {
        self.extensions.extend(extensions);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn DiscoveryExtension>> {
        self.extensions.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.extensions.iter().map(|e| e.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.extensions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }
}
