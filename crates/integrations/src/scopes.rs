//! Container extensions for the test, view and producer-config scopes.

use beanscope_api::{ContainerExtension, Result, TestConfiguration};
use beanscope_plugin::{DiscoveryContext, DiscoveryExtension, LibraryProbe};
use std::sync::Arc;
use tracing::debug;

/// Binds the test-scoped context to the running test.
#[derive(Debug, Clone)]
pub struct TestScopeExtension {
    configuration: TestConfiguration,
}

impl TestScopeExtension {
    pub fn new(configuration: TestConfiguration) -> Self {
        Self { configuration }
    }

    pub fn configuration(&self) -> &TestConfiguration {
        &self.configuration
    }
}

impl ContainerExtension for TestScopeExtension {
    fn name(&self) -> &str {
        "io.github.beanscope.testscope.TestScopeExtension"
    }
}

/// Registers [`TestScopeExtension`] for every test.
#[derive(Debug, Default)]
pub struct TestScopeDiscovery;

impl TestScopeDiscovery {
    pub fn new() -> Self {
        Self
    }
}

impl DiscoveryExtension for TestScopeDiscovery {
    fn name(&self) -> &str {
        "test-scope"
    }

    fn bootstrap_extensions(&self, ctx: &mut dyn DiscoveryContext) -> Result<()> {
        let extension = TestScopeExtension::new(ctx.test_configuration().clone());
        ctx.extension(
            Arc::new(extension),
            "io.github.beanscope.testscope.TestScopeDiscovery",
        );
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct ViewScopeExtension;

impl ContainerExtension for ViewScopeExtension {
    fn name(&self) -> &str {
        "io.github.beanscope.jsf.ViewScopeExtension"
    }
}

/// Registers [`ViewScopeExtension`] when the faces view scope is on the classpath.
#[derive(Debug)]
pub struct ViewScopeDiscovery {
    probe: LibraryProbe,
}

impl Default for ViewScopeDiscovery {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewScopeDiscovery {
    pub fn new() -> Self {
        Self {
            probe: LibraryProbe::new("jakarta.faces.view.ViewScoped"),
        }
    }
}

impl DiscoveryExtension for ViewScopeDiscovery {
    fn name(&self) -> &str {
        "view-scope"
    }

    fn bootstrap_extensions(&self, ctx: &mut dyn DiscoveryContext) -> Result<()> {
        if self.probe.is_present(ctx.resolver()) {
            debug!("Registering view scope extension");
            ctx.extension(
                Arc::new(ViewScopeExtension),
                "io.github.beanscope.jsf.ViewScopeDiscovery",
            );
        }
        Ok(())
    }
}

/// Applies producer configuration markers of the running test.
#[derive(Debug, Clone)]
pub struct ProducerConfigExtension {
    configuration: TestConfiguration,
}

impl ProducerConfigExtension {
    pub fn new(configuration: TestConfiguration) -> Self {
        Self { configuration }
    }

    pub fn configuration(&self) -> &TestConfiguration {
        &self.configuration
    }
}

impl ContainerExtension for ProducerConfigExtension {
    fn name(&self) -> &str {
        "io.github.beanscope.producerconfig.ProducerConfigExtension"
    }
}

#[derive(Debug)]
pub struct ProducerConfigDiscovery {
    probe: LibraryProbe,
}

impl Default for ProducerConfigDiscovery {
    fn default() -> Self {
        Self::new()
    }
}

impl ProducerConfigDiscovery {
    pub fn new() -> Self {
        Self {
            probe: LibraryProbe::new("jakarta.enterprise.inject.spi.ProducerFactory"),
        }
    }
}

impl DiscoveryExtension for ProducerConfigDiscovery {
    fn name(&self) -> &str {
        "producer-config"
    }

    fn bootstrap_extensions(&self, ctx: &mut dyn DiscoveryContext) -> Result<()> {
        if !self.probe.is_present(ctx.resolver()) {
            return Ok(());
        }
        debug!("Registering producer config extension");
        let extension = ProducerConfigExtension::new(ctx.test_configuration().clone());
        ctx.extension(
            Arc::new(extension),
            "io.github.beanscope.producerconfig.ProducerConfigDiscovery",
        );
        Ok(())
    }
}
