use beanscope_api::markers;
use beanscope_api::{ContainerSpi, DiscoveryError, Result, TestConfiguration, TypeResolver};
use beanscope_core::features::{StandardDiscovery, TestToolDiscovery};
use beanscope_core::{
    DeploymentAssembler, DiscoveryConfig, DiscoveryDriver, DiscoveryReport, ScanCache,
};
use beanscope_integrations::{
    DeltaspikeProxyDiscovery, MockFrameworkDiscovery, ProducerConfigDiscovery,
    TestScopeDiscovery, ViewScopeDiscovery,
};
use beanscope_plugin::DiscoveryExtensions;
use once_cell::sync::Lazy;
use std::sync::Arc;
use tracing::{debug, info};

static DEFAULT_CONFIG: Lazy<DiscoveryConfig> = Lazy::new(DiscoveryConfig::from_env);

/// Built once so library probes are answered once per process.
static SHARED_EXTENSIONS: Lazy<DiscoveryExtensions> =
    Lazy::new(|| default_extensions(&DEFAULT_CONFIG));

/// The full plugin set, in dispatch order.
///
/// Core discovery comes first so that integrations see every candidate the
/// core features enqueue.
pub fn default_extensions(config: &DiscoveryConfig) -> DiscoveryExtensions {
    DiscoveryExtensions::new()
        .with(Arc::new(StandardDiscovery::new()))
        .with(Arc::new(TestToolDiscovery::new(
            config.framework_package.clone(),
        )))
        .with(Arc::new(MockFrameworkDiscovery::mockito()))
        .with(Arc::new(MockFrameworkDiscovery::easymock()))
        .with(Arc::new(TestScopeDiscovery::new()))
        .with(Arc::new(ViewScopeDiscovery::new()))
        .with(Arc::new(ProducerConfigDiscovery::new()))
        .with(Arc::new(DeltaspikeProxyDiscovery::new()))
}

/// The process-wide plugin set. Clones share the same extension instances.
pub fn shared_extensions() -> DiscoveryExtensions {
    SHARED_EXTENSIONS.clone()
}

/// Assembler with the always-on producer alternative stereotype.
pub fn default_assembler(config: &DiscoveryConfig) -> DeploymentAssembler {
    DeploymentAssembler::new().with_alternative_stereotype(markers::relocated(
        &markers::PRODUCES_ALTERNATIVE,
        &config.framework_package,
    ))
}

/// Per-test entry point: discover the deployment, then start the container.
pub struct TestBootstrap {
    resolver: Arc<dyn TypeResolver>,
    container: Arc<dyn ContainerSpi>,
    scans: Arc<ScanCache>,
    extensions: DiscoveryExtensions,
    assembler: DeploymentAssembler,
}

impl TestBootstrap {
    /// Bootstrap over the process-wide scan cache and plugin set.
    pub fn new(resolver: Arc<dyn TypeResolver>, container: Arc<dyn ContainerSpi>) -> Self {
        Self {
            resolver,
            container,
            scans: ScanCache::global(),
            extensions: shared_extensions(),
            assembler: default_assembler(&DEFAULT_CONFIG),
        }
    }

    pub fn with_scan_cache(mut self, scans: Arc<ScanCache>) -> Self {
        self.scans = scans;
        self
    }

    pub fn with_extensions(mut self, extensions: DiscoveryExtensions) -> Self {
        self.extensions = extensions;
        self
    }

    pub fn with_assembler(mut self, assembler: DeploymentAssembler) -> Self {
        self.assembler = assembler;
        self
    }

    pub fn extensions(&self) -> &DiscoveryExtensions {
        &self.extensions
    }

    pub fn discover(&self, configuration: &TestConfiguration) -> Result<DiscoveryReport> {
        debug!(
            "Discovering deployment for {} with extensions {:?}",
            configuration.test_class(),
            self.extensions.names()
        );
        let outcome = DiscoveryDriver::new(
            self.resolver.as_ref(),
            self.container.as_ref(),
            &self.scans,
            &self.extensions,
        )
        .run(configuration)?;
        Ok(self.assembler.assemble(outcome))
    }

    /// Discover and hand the frozen descriptor to the container.
    ///
    /// Nothing reaches the container when discovery fails.
    pub fn start(&self, configuration: &TestConfiguration) -> Result<DiscoveryReport> {
        let report = self.discover(configuration)?;
        info!(
            "Starting container for {} ({} classes)",
            configuration.test_class(),
            report.descriptor.discovered_classes().len()
        );
        self.container
            .start(report.descriptor.clone())
            .map_err(|e| DiscoveryError::Container(e.to_string()))?;
        Ok(report)
    }
}

/// Initializes the logging system for a specific component.
/// This delegates to the core logging module.
pub fn init_logging(component: &str, to_stderr: bool) -> Option<impl Drop> {
    Some(beanscope_core::logging::init_logging(component, to_stderr))
}
