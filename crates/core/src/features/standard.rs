//! Container-level discovery: extensions, interceptors, decorators,
//! alternative stereotypes and injection points.

use beanscope_api::markers;
use beanscope_api::{ClassInfo, DiscoveryError, FieldInfo, MarkerUse, MethodInfo, Result};
use beanscope_plugin::{ClassRef, DiscoveryContext, DiscoveryExtension};
use tracing::debug;

#[derive(Debug, Default)]
pub struct StandardDiscovery;

impl StandardDiscovery {
    pub fn new() -> Self {
        Self
    }

    fn register_container_extension(
        &self,
        ctx: &mut dyn DiscoveryContext,
        class: &ClassInfo,
    ) -> Result<()> {
        if class.is_abstract || !ctx.container().is_extension_type(class) {
            return Ok(());
        }
        let extension = ctx.container().instantiate_extension(class).map_err(|source| {
            DiscoveryError::ExtensionInstantiation {
                class: class.name.clone(),
                source,
            }
        })?;
        debug!("Registered container extension {}", class.name);
        ctx.extension(extension, class.name.as_str());
        Ok(())
    }
}

fn is_injection_point(uses: &[MarkerUse]) -> bool {
    uses.iter()
        .any(|m| m.name == markers::INJECT || m.name == markers::PRODUCES)
}

impl DiscoveryExtension for StandardDiscovery {
    fn name(&self) -> &str {
        "standard"
    }

    fn process(&self, ctx: &mut dyn DiscoveryContext, class: &ClassInfo) -> Result<()> {
        self.register_container_extension(ctx, class)?;
        if class.has_marker(&markers::INTERCEPTOR) {
            ctx.enable_interceptor(ClassRef::from(class));
        }
        if class.has_marker(&markers::DECORATOR) {
            ctx.enable_decorator(ClassRef::from(class));
        }
        if class.is_alternative_stereotype() {
            ctx.enable_alternative_stereotype(ClassRef::from(class));
        }
        Ok(())
    }

    fn process_field(
        &self,
        ctx: &mut dyn DiscoveryContext,
        _class: &ClassInfo,
        field: &FieldInfo,
    ) -> Result<()> {
        let lookup = field
            .raw_type()
            .is_some_and(|raw| *raw == markers::PROVIDER || *raw == markers::INSTANCE);
        if is_injection_point(&field.markers) || lookup {
            ctx.process_bean(ClassRef::Type(&field.declared));
        }
        Ok(())
    }

    fn process_method(
        &self,
        ctx: &mut dyn DiscoveryContext,
        _class: &ClassInfo,
        method: &MethodInfo,
    ) -> Result<()> {
        if !is_injection_point(&method.markers) {
            return Ok(());
        }
        for param in &method.params {
            ctx.process_bean(ClassRef::Type(param));
        }
        if let Some(returns) = &method.returns {
            ctx.process_bean(ClassRef::Type(returns));
        }
        Ok(())
    }
}
