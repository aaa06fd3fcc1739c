//! The framework's own test markers: extra classes, classpaths and
//! packages, ignored classes and activated alternatives. Also feeds every
//! foreign marker type and the generic superclass back into discovery.

use beanscope_api::markers::{self, FRAMEWORK_PACKAGE};
use beanscope_api::{ClassInfo, ClassName, FieldInfo, MarkerUse, MethodInfo, Result};
use beanscope_plugin::{ClassRef, DiscoveryContext, DiscoveryExtension};
use tracing::trace;

/// Handles the framework markers declared under `framework_package`.
#[derive(Debug)]
pub struct TestToolDiscovery {
    framework_package: String,
    additional_classpaths: ClassName,
    additional_packages: ClassName,
    additional_classes: ClassName,
    ignored_classes: ClassName,
    activated_alternatives: ClassName,
}

impl Default for TestToolDiscovery {
    fn default() -> Self {
        Self::new(FRAMEWORK_PACKAGE)
    }
}

impl TestToolDiscovery {
    pub fn new(framework_package: impl Into<String>) -> Self {
        let framework_package = framework_package.into();
        let marker = |name: &ClassName| markers::relocated(name, &framework_package);
        Self {
            additional_classpaths: marker(&markers::ADDITIONAL_CLASSPATHS),
            additional_packages: marker(&markers::ADDITIONAL_PACKAGES),
            additional_classes: marker(&markers::ADDITIONAL_CLASSES),
            ignored_classes: marker(&markers::IGNORED_CLASSES),
            activated_alternatives: marker(&markers::ACTIVATED_ALTERNATIVES),
            framework_package,
        }
    }

    fn additional_classpaths(&self, ctx: &mut dyn DiscoveryContext, marker: &MarkerUse) {
        for name in ctx.scan_bean_archives(&marker.value) {
            ctx.process_bean(ClassRef::Class(&name));
        }
    }

    fn additional_packages(&self, ctx: &mut dyn DiscoveryContext, marker: &MarkerUse) {
        for name in ctx.scan_packages(&marker.value) {
            ctx.process_bean(ClassRef::Class(&name));
        }
    }

    fn additional_classes(&self, ctx: &mut dyn DiscoveryContext, marker: &MarkerUse) {
        for class in &marker.value {
            ctx.process_bean(ClassRef::Class(class));
        }
        for late in &marker.late {
            ctx.process_bean(ClassRef::Name(late));
        }
    }

    fn ignored_classes(&self, ctx: &mut dyn DiscoveryContext, marker: &MarkerUse) {
        for class in &marker.value {
            ctx.ignore_bean(ClassRef::Class(class));
        }
        for late in &marker.late {
            ctx.ignore_bean(ClassRef::Name(late));
        }
    }

    fn activated_alternatives(&self, ctx: &mut dyn DiscoveryContext, marker: &MarkerUse) {
        for class in &marker.value {
            ctx.process_bean(ClassRef::Class(class));
            let stereotype = ctx
                .resolver()
                .resolve_class(class)
                .is_some_and(|info| info.is_alternative_stereotype());
            if !stereotype {
                ctx.enable_alternative(ClassRef::Class(class));
            }
        }
    }

    fn is_framework_marker(&self, name: &ClassName) -> bool {
        name.package() == self.framework_package
    }
}

impl DiscoveryExtension for TestToolDiscovery {
    fn name(&self) -> &str {
        "test-tool"
    }

    fn process(&self, ctx: &mut dyn DiscoveryContext, class: &ClassInfo) -> Result<()> {
        if let Some(marker) = class.marker(&self.additional_classpaths) {
            self.additional_classpaths(ctx, marker);
        }
        if let Some(marker) = class.marker(&self.additional_packages) {
            self.additional_packages(ctx, marker);
        }
        if let Some(marker) = class.marker(&self.additional_classes) {
            self.additional_classes(ctx, marker);
        }
        if let Some(marker) = class.marker(&self.ignored_classes) {
            self.ignored_classes(ctx, marker);
        }
        if let Some(marker) = class.marker(&self.activated_alternatives) {
            self.activated_alternatives(ctx, marker);
        }

        for marker in &class.markers {
            if self.is_framework_marker(&marker.name) {
                continue;
            }
            ctx.process_bean(ClassRef::Class(&marker.name));
        }

        if let Some(superclass) = &class.superclass {
            if superclass.raw() != Some(&markers::OBJECT) {
                trace!("Following superclass of {}", class.name);
                ctx.process_bean(ClassRef::Type(superclass));
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
        if field.has_marker(&self.ignored_classes) {
            ctx.ignore_bean(ClassRef::Type(&field.declared));
        }
        Ok(())
    }

    fn process_method(
        &self,
        ctx: &mut dyn DiscoveryContext,
        _class: &ClassInfo,
        method: &MethodInfo,
    ) -> Result<()> {
        if method.has_marker(&self.ignored_classes) {
            if let Some(returns) = &method.returns {
                ctx.ignore_bean(ClassRef::Type(returns));
            }
        }
        Ok(())
    }
}
