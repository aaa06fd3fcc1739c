//! Mock framework support.
//!
//! A field marked for mock substitution is satisfied by the mock framework,
//! so its declared type must not be deployed as a bean.

use beanscope_api::{ClassInfo, ClassName, ContainerExtension, FieldInfo, Result};
use beanscope_plugin::{ClassRef, DiscoveryContext, DiscoveryExtension, LibraryProbe};
use std::sync::Arc;
use tracing::{debug, trace};

pub const MOCKITO_MOCK: ClassName = ClassName::from_static("org.mockito.Mock");
pub const EASYMOCK_MOCK: ClassName = ClassName::from_static("org.easymock.Mock");

/// Container extension producing mocks for fields marked with the framework's marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockExtension {
    framework: &'static str,
    name: &'static str,
}

impl MockExtension {
    pub fn framework(&self) -> &'static str {
        self.framework
    }
}

impl ContainerExtension for MockExtension {
    fn name(&self) -> &str {
        self.name
    }
}

#[derive(Debug)]
pub struct MockFrameworkDiscovery {
    framework: &'static str,
    extension: &'static str,
    location: &'static str,
    probe: LibraryProbe,
    mock_marker: ClassName,
}

impl MockFrameworkDiscovery {
    pub fn mockito() -> Self {
        Self {
            framework: "mockito",
            extension: "io.github.beanscope.mockito.MockitoExtension",
            location: "io.github.beanscope.mockito.MockitoDiscovery",
            probe: LibraryProbe::new("org.mockito.Mock"),
            mock_marker: MOCKITO_MOCK,
        }
    }

    pub fn easymock() -> Self {
        Self {
            framework: "easymock",
            extension: "io.github.beanscope.easymock.EasyMockExtension",
            location: "io.github.beanscope.easymock.EasyMockDiscovery",
            probe: LibraryProbe::new("org.easymock.EasyMockRunner"),
            mock_marker: EASYMOCK_MOCK,
        }
    }

    pub fn mock_marker(&self) -> &ClassName {
        &self.mock_marker
    }

    fn ignore_mocked(&self, ctx: &mut dyn DiscoveryContext, field: &FieldInfo) {
        if !field.has_marker(&self.mock_marker) {
            return;
        }
        if let Some(raw) = field.raw_type() {
            trace!("Ignoring mocked type {} of field {}", raw, field.name);
            ctx.ignore_bean(ClassRef::Class(raw));
        }
    }
}

impl DiscoveryExtension for MockFrameworkDiscovery {
    fn name(&self) -> &str {
        self.framework
    }

    fn bootstrap_extensions(&self, ctx: &mut dyn DiscoveryContext) -> Result<()> {
        if !self.probe.is_present(ctx.resolver()) {
            return Ok(());
        }
        debug!("Registering {} mock extension", self.framework);
        ctx.extension(
            Arc::new(MockExtension {
                framework: self.framework,
                name: self.extension,
            }),
            self.location,
        );

        let test_class = ctx.test_configuration().test_class().clone();
        if let Some(class) = ctx.resolver().resolve_class(&test_class) {
            for field in &class.fields {
                self.ignore_mocked(ctx, field);
            }
        }
        Ok(())
    }

    fn process_field(
        &self,
        ctx: &mut dyn DiscoveryContext,
        _class: &ClassInfo,
        field: &FieldInfo,
    ) -> Result<()> {
        if self.probe.is_present(ctx.resolver()) {
            self.ignore_mocked(ctx, field);
        }
        Ok(())
    }
}
