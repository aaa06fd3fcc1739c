use beanscope_api::{
    ClassInfo, ClassName, ContainerExtension, ContainerSpi, TestConfiguration, TypeRef,
    TypeResolver,
};
use std::sync::Arc;

/// Either a type reference or a literal class name.
///
/// Types are taken as they are; names are resolved lazily and silently
/// dropped when they do not resolve.
#[derive(Debug, Clone, Copy)]
pub enum ClassRef<'a> {
    Type(&'a TypeRef),
    Class(&'a ClassName),
    Name(&'a str),
}

impl<'a> From<&'a TypeRef> for ClassRef<'a> {
    fn from(ty: &'a TypeRef) -> Self {
        ClassRef::Type(ty)
    }
}

impl<'a> From<&'a ClassName> for ClassRef<'a> {
    fn from(name: &'a ClassName) -> Self {
        ClassRef::Class(name)
    }
}

impl<'a> From<&'a ClassInfo> for ClassRef<'a> {
    fn from(class: &'a ClassInfo) -> Self {
        ClassRef::Class(&class.name)
    }
}

impl<'a> From<&'a str> for ClassRef<'a> {
    fn from(name: &'a str) -> Self {
        ClassRef::Name(name)
    }
}

impl<'a> From<&'a String> for ClassRef<'a> {
    fn from(name: &'a String) -> Self {
        ClassRef::Name(name.as_str())
    }
}

/// Mutable discovery state as seen by a [`DiscoveryExtension`](crate::DiscoveryExtension).
///
/// One context exists per test invocation and is only ever borrowed by the
/// extension currently being called.
pub trait DiscoveryContext {
    fn test_configuration(&self) -> &TestConfiguration;

    fn resolver(&self) -> &dyn TypeResolver;

    fn container(&self) -> &dyn ContainerSpi;

    /// Enqueue every raw identity of `class` that is neither pending nor processed.
    fn process_bean(&mut self, class: ClassRef<'_>);

    /// Exclude every raw identity of `class` from the deployment.
    fn ignore_bean(&mut self, class: ClassRef<'_>);

    /// Enqueue every class in the package of `class`, within its classpath root.
    fn process_package(&mut self, class: ClassRef<'_>);

    /// Enqueue every class of the bean archive `class` was loaded from.
    fn process_classpath(&mut self, class: ClassRef<'_>);

    fn enable_alternative(&mut self, class: ClassRef<'_>);

    fn enable_interceptor(&mut self, class: ClassRef<'_>);

    fn enable_decorator(&mut self, class: ClassRef<'_>);

    fn enable_alternative_stereotype(&mut self, class: ClassRef<'_>);

    /// Hand a ready-made extension to the container.
    fn extension(&mut self, extension: Arc<dyn ContainerExtension>, location: &str);

    /// Class names of the classpath roots the given classes were loaded from.
    ///
    /// Scanned roots count as bean archives for the rest of the invocation.
    fn scan_bean_archives(&mut self, base_classes: &[ClassName]) -> Vec<ClassName>;

    /// Class names sharing a package (non-recursively) and root with each given class.
    ///
    /// Returned classes are inspectable even when their root is not a bean archive.
    fn scan_packages(&mut self, base_classes: &[ClassName]) -> Vec<ClassName>;
}
