//! Well-known marker and type names recognised during discovery.

use super::name::ClassName;

/// Root of every class hierarchy; never fed back into discovery.
pub const OBJECT: ClassName = ClassName::from_static("java.lang.Object");

// Injection and producer members
pub const INJECT: ClassName = ClassName::from_static("jakarta.inject.Inject");
pub const PRODUCES: ClassName = ClassName::from_static("jakarta.enterprise.inject.Produces");
pub const PROVIDER: ClassName = ClassName::from_static("jakarta.inject.Provider");
pub const INSTANCE: ClassName = ClassName::from_static("jakarta.enterprise.inject.Instance");

// Cross-cutting activation categories
pub const INTERCEPTOR: ClassName = ClassName::from_static("jakarta.interceptor.Interceptor");
pub const DECORATOR: ClassName = ClassName::from_static("jakarta.decorator.Decorator");
pub const STEREOTYPE: ClassName = ClassName::from_static("jakarta.enterprise.inject.Stereotype");
pub const ALTERNATIVE: ClassName = ClassName::from_static("jakarta.enterprise.inject.Alternative");

/// Interface implemented by container extension types.
pub const EXTENSION: ClassName =
    ClassName::from_static("jakarta.enterprise.inject.spi.Extension");

/// Package holding the framework's own test markers. Markers from this
/// package drive discovery but are never fed back as candidates.
pub const FRAMEWORK_PACKAGE: &str = "io.github.beanscope";

pub const ADDITIONAL_CLASSES: ClassName =
    ClassName::from_static("io.github.beanscope.AdditionalClasses");
pub const ADDITIONAL_CLASSPATHS: ClassName =
    ClassName::from_static("io.github.beanscope.AdditionalClasspaths");
pub const ADDITIONAL_PACKAGES: ClassName =
    ClassName::from_static("io.github.beanscope.AdditionalPackages");
pub const IGNORED_CLASSES: ClassName =
    ClassName::from_static("io.github.beanscope.IgnoredClasses");
pub const ACTIVATED_ALTERNATIVES: ClassName =
    ClassName::from_static("io.github.beanscope.ActivatedAlternatives");
pub const PRODUCES_ALTERNATIVE: ClassName =
    ClassName::from_static("io.github.beanscope.ProducesAlternative");

/// The same framework marker declared under another package.
pub fn relocated(marker: &ClassName, package: &str) -> ClassName {
    if package == FRAMEWORK_PACKAGE {
        return marker.clone();
    }
    ClassName::new(format!("{}.{}", package, marker.simple_name()))
}
