use beanscope_api::markers;
use beanscope_api::{
    ClassInfo, ClassInfoBuilder, ClassName, FieldInfo, MarkerUse, Result, TestConfiguration,
    TypeRef,
};
use beanscope_core::features::{StandardDiscovery, TestToolDiscovery};
use beanscope_core::{
    DeploymentAssembler, DiscoveryDriver, DiscoveryReport, InMemoryContainer,
    InMemoryTypeRegistry, ScanCache,
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
/// A class living in the application bean archive.
pub fn bean(name: &str) -> ClassInfoBuilder {
    ClassInfo::builder(name.to_string()).located_at(app_root())
}

#[allow(dead_code)]
pub fn inject(name: &str, ty: &str) -> FieldInfo {
    FieldInfo::new(name, TypeRef::class(ty.to_string())).with_marker(markers::INJECT)
}

#[allow(dead_code)]
pub fn marker_with(name: ClassName, values: &[&str]) -> MarkerUse {
    values
        .iter()
        .fold(MarkerUse::new(name), |m, v| m.with_value(v.to_string()))
}

/// A fully in-memory test universe: one bean archive (`app`) and one plain
/// library root (`lib`).
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

    pub fn default_extensions() -> DiscoveryExtensions {
        DiscoveryExtensions::new()
            .with(Arc::new(StandardDiscovery::new()))
            .with(Arc::new(TestToolDiscovery::default()))
    }

    pub fn discover(&self, configuration: &TestConfiguration) -> Result<DiscoveryReport> {
        self.discover_with(&Self::default_extensions(), configuration)
    }

    pub fn discover_with(
        &self,
        extensions: &DiscoveryExtensions,
        configuration: &TestConfiguration,
    ) -> Result<DiscoveryReport> {
        let outcome = DiscoveryDriver::new(
            self.registry.as_ref(),
            &self.container,
            &self.scans,
            extensions,
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
