//! Physical classpath scanning capability.
//!
//! Implementations only enumerate; memoization and worker-pool placement
//! belong to the caller.

use beanscope_api::ClassName;
use url::Url;

pub trait ClasspathScanner: Send + Sync {
    /// Scanner name (for logging/debugging)
    fn name(&self) -> &str;

    /// Every classpath root visible to the process.
    fn classpath_roots(&self) -> Vec<Url>;

    /// The subset of `roots` that are bean archives, in input order.
    fn find_bean_archives(&self, roots: &[Url]) -> Vec<Url>;

    /// All class names found under `roots`, root by root.
    fn class_names(&self, roots: &[Url]) -> Vec<ClassName>;

    /// Class names directly inside `package` (not sub-packages) under `root`.
    fn class_names_in_package(&self, package: &str, root: &Url) -> Vec<ClassName>;
}
