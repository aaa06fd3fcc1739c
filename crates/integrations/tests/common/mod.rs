use beanscope_api::markers;
use beanscope_api::{
    ClassInfo, ClassInfoBuilder, FieldInfo, Result, TestConfiguration, TypeRef,
};
use beanscope_core::features::{StandardDiscovery, TestToolDiscovery};
use beanscope_core::{
    DeploymentAssembler, DiscoveryDriver, DiscoveryReport, InMemoryContainer,
    InMemoryTypeRegistry, ScanCache,
};
use beanscope_integrations::{
    DeltaspikeProxyDiscovery, MockFrameworkDiscovery, ProducerConfigDiscovery,
    TestScopeDiscovery, ViewScopeDiscovery,
};
use beanscope_plugin::DiscoveryExtensions;
use std::sync::Arc;
use url::Url;

#[allow(dead_code)]
pub fn app_root() -> Url {
    Url::parse("file:///cp/app/").unwrap()
}

#[allow(dead_code)]
pub fn lib_root() -> Url {
    Url::parse("file:///cp/lib/").unwrap()
}

#[allow(dead_code)]
pub fn bean(name: &str) -> ClassInfoBuilder {
    ClassInfo::builder(name.to_string()).located_at(app_root())
}

/// A third-party type outside every bean archive.
#[allow(dead_code)]
pub fn library_type(name: &str) -> ClassInfo {
    ClassInfo::builder(name.to_string())
        .located_at(lib_root())
        .build()
}

#[allow(dead_code)]
pub fn inject(name: &str, ty: &str) -> FieldInfo {
    FieldInfo::new(name, TypeRef::class(ty.to_string())).with_marker(markers::INJECT)
}

pub struct Universe {
    pub registry: Arc<InMemoryTypeRegistry>,
    pub container: InMemoryContainer,
    pub scans: ScanCache,
}

#[allow(dead_code)]
impl Universe {
    pub fn new() -> Self {
        let registry = Arc::new(InMemoryTypeRegistry::new());
        registry.add_root(app_root(), true);
        registry.add_root(lib_root(), false);
        Self {
            scans: ScanCache::new(registry.clone()),
            registry,
            container: InMemoryContainer::new(),
        }
    }

    pub fn with(self, classes: impl IntoIterator<Item = ClassInfo>) -> Self {
        self.registry.register_all(classes);
        self
    }

    pub fn discover(&self, configuration: &TestConfiguration) -> Result<DiscoveryReport> {
        let extensions = DiscoveryExtensions::new()
            .with(Arc::new(StandardDiscovery::new()))
            .with(Arc::new(TestToolDiscovery::default()))
            .with(Arc::new(MockFrameworkDiscovery::mockito()))
            .with(Arc::new(MockFrameworkDiscovery::easymock()))
            .with(Arc::new(TestScopeDiscovery::new()))
            .with(Arc::new(ViewScopeDiscovery::new()))
            .with(Arc::new(ProducerConfigDiscovery::new()))
            .with(Arc::new(DeltaspikeProxyDiscovery::new()));
        let outcome = DiscoveryDriver::new(
            self.registry.as_ref(),
            &self.container,
            &self.scans,
            &extensions,
        )
        .run(configuration)?;
        Ok(DeploymentAssembler::new().assemble(outcome))
    }
}

#[allow(dead_code)]
pub fn discovered(report: &DiscoveryReport) -> Vec<&str> {
    report
        .descriptor
        .discovered_classes()
        .iter()
        .map(|c| c.as_str())
        .collect()
}

#[allow(dead_code)]
pub fn extension_names(report: &DiscoveryReport) -> Vec<&str> {
    report
        .descriptor
        .extensions()
        .iter()
        .map(|r| r.extension.name())
        .collect()
}
