use super::context::DiscoveryOutcome;
use super::driver::DiscoveryStats;
use super::graph::DiscoveryGraph;
use beanscope_api::{ClassName, ContainerExtension, DeploymentDescriptor, ExtensionRegistration};
use indexmap::IndexSet;
use std::sync::Arc;

/// A frozen deployment plus how it came to be.
#[derive(Debug, Clone)]
pub struct DiscoveryReport {
    pub descriptor: DeploymentDescriptor,
    pub graph: DiscoveryGraph,
    pub stats: DiscoveryStats,
}

/// Freezes a discovery outcome into a [`DeploymentDescriptor`].
///
/// Always-on stereotypes and extensions are appended after everything the
/// traversal registered.
#[derive(Debug, Clone, Default)]
pub struct DeploymentAssembler {
    alternative_stereotypes: Vec<ClassName>,
    extensions: Vec<ExtensionRegistration>,
}

impl DeploymentAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_alternative_stereotype(mut self, stereotype: impl Into<ClassName>) -> Self {
        self.alternative_stereotypes.push(stereotype.into());
        self
    }

    pub fn with_extension(
        mut self,
        extension: Arc<dyn ContainerExtension>,
        location: impl Into<String>,
    ) -> Self {
        self.extensions
            .push(ExtensionRegistration::new(extension, location));
        self
    }

    pub fn assemble(&self, outcome: DiscoveryOutcome) -> DiscoveryReport {
        let DiscoveryOutcome {
            discovered,
            ignored,
            alternatives,
            interceptors,
            decorators,
            mut alternative_stereotypes,
            mut extensions,
            graph,
            stats,
        } = outcome;

        let discovered: IndexSet<ClassName> = discovered
            .into_iter()
            .filter(|class| !ignored.contains(class))
            .collect();
        alternative_stereotypes.extend(self.alternative_stereotypes.iter().cloned());
        extensions.extend(self.extensions.iter().cloned());

        DiscoveryReport {
            descriptor: DeploymentDescriptor::new(
                discovered,
                alternatives,
                interceptors,
                decorators,
                alternative_stereotypes,
                extensions,
            ),
            graph,
            stats,
        }
    }
}
