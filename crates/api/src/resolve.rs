use crate::models::{ClassInfo, ClassName};
use std::sync::Arc;

/// Class lookup by name, the reflective surface discovery runs against.
///
/// Lookups are fallible by nature: a name that does not resolve yields
/// `None` and callers decide whether that matters.
pub trait TypeResolver: Send + Sync {
    fn resolve(&self, name: &str) -> Option<Arc<ClassInfo>>;

    fn resolve_class(&self, name: &ClassName) -> Option<Arc<ClassInfo>> {
        self.resolve(name.as_str())
    }

    /// Whether a class with this name can be loaded at all.
    fn is_present(&self, name: &str) -> bool {
        self.resolve(name).is_some()
    }
}
