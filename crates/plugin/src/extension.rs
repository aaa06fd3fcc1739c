use crate::context::DiscoveryContext;
use beanscope_api::{ClassInfo, FieldInfo, MethodInfo, Result};

/// A discovery plugin.
///
/// Every hook defaults to a no-op so implementations only override what
/// they contribute. Hooks run in registration order.
pub trait DiscoveryExtension: Send + Sync {
    /// Plugin name (for logging/debugging)
    fn name(&self) -> &str;

    /// Called once per test before traversal starts.
    fn bootstrap_extensions(&self, _ctx: &mut dyn DiscoveryContext) -> Result<()> {
        Ok(())
    }

    /// Called once for every inspected candidate, before its members are walked.
    fn process(&self, _ctx: &mut dyn DiscoveryContext, _class: &ClassInfo) -> Result<()> {
        Ok(())
    }

    /// Called for every declared field of an inspected candidate.
    fn process_field(
        &self,
        _ctx: &mut dyn DiscoveryContext,
        _class: &ClassInfo,
        _field: &FieldInfo,
    ) -> Result<()> {
        Ok(())
    }

    /// Called for every declared method of an inspected candidate.
    fn process_method(
        &self,
        _ctx: &mut dyn DiscoveryContext,
        _class: &ClassInfo,
        _method: &MethodInfo,
    ) -> Result<()> {
        Ok(())
    }
}
