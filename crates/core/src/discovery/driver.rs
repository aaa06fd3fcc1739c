use super::context::{DiscoveryOutcome, DiscoveryState};
use crate::error::Result;
use crate::scan::ScanCache;
use beanscope_api::{ClassInfo, ClassName, ContainerSpi, TestConfiguration, TypeResolver};
use beanscope_plugin::{ClassRef, DiscoveryContext, DiscoveryExtensions};
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, trace};

/// Counters for one traversal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DiscoveryStats {
    /// Candidates taken off the worklist.
    pub processed: usize,
    /// Candidates handed to the extensions.
    pub inspected: usize,
    /// Candidates marked processed without classification.
    pub skipped: usize,
    pub elapsed_ms: u64,
}

/// Runs the worklist traversal for one test.
pub struct DiscoveryDriver<'a> {
    resolver: &'a dyn TypeResolver,
    container: &'a dyn ContainerSpi,
    scans: &'a ScanCache,
    extensions: &'a DiscoveryExtensions,
}

impl<'a> DiscoveryDriver<'a> {
    pub fn new(
        resolver: &'a dyn TypeResolver,
        container: &'a dyn ContainerSpi,
        scans: &'a ScanCache,
        extensions: &'a DiscoveryExtensions,
    ) -> Self {
        Self {
            resolver,
            container,
            scans,
            extensions,
        }
    }

    /// Traverse from the test class until the worklist drains.
    ///
    /// The first extension error aborts the run.
    pub fn run(&self, configuration: &TestConfiguration) -> Result<DiscoveryOutcome> {
        let started = Instant::now();
        let mut state =
            DiscoveryState::new(configuration, self.resolver, self.container, self.scans);
        let mut stats = DiscoveryStats::default();

        let test_class = configuration.test_class();
        state.record_discovered(test_class);
        state.process_bean(ClassRef::Class(test_class));

        for extension in self.extensions.iter() {
            trace!("Bootstrapping discovery extension {}", extension.name());
            extension.bootstrap_extensions(&mut state)?;
        }

        for class in configuration.additional_classes() {
            state.process_bean(ClassRef::Class(class));
        }

        while let Some(candidate) = state.next_to_process() {
            stats.processed += 1;
            match self.classification_target(&state, &candidate) {
                Some(class) => {
                    trace!("Inspecting {}", candidate);
                    self.inspect(&mut state, &class)?;
                    stats.inspected += 1;
                }
                None => stats.skipped += 1,
            }
            state.processed(&candidate);
        }

        stats.elapsed_ms = started.elapsed().as_millis() as u64;
        let mut outcome = state.into_outcome();
        outcome.stats = stats;

        debug!(
            "Discovery for {} finished: {} processed, {} inspected, {} discovered in {}ms",
            test_class,
            stats.processed,
            stats.inspected,
            outcome.discovered.len(),
            stats.elapsed_ms
        );
        for class in &outcome.discovered {
            debug!("  discovered {}", class);
        }
        Ok(outcome)
    }

    /// The resolved class if `candidate` is to be classified.
    fn classification_target(
        &self,
        state: &DiscoveryState<'_>,
        candidate: &ClassName,
    ) -> Option<Arc<ClassInfo>> {
        if state.is_ignored(candidate.as_str()) {
            trace!("Skipping ignored {}", candidate);
            return None;
        }
        let Some(class) = self.resolver.resolve_class(candidate) else {
            trace!("Skipping unresolvable {}", candidate);
            return None;
        };
        if class.is_primitive() {
            return None;
        }
        if !state.is_in_bean_archive(&class) && !self.container.is_extension_type(&class) {
            trace!("Skipping {} outside bean archives", candidate);
            return None;
        }
        Some(class)
    }

    fn inspect(&self, state: &mut DiscoveryState<'_>, class: &ClassInfo) -> Result<()> {
        state.set_current(Some(class.name.clone()));
        if !class.is_marker_definition() {
            state.record_discovered(&class.name);
        }

        for extension in self.extensions.iter() {
            extension.process(state, class)?;
        }
        for field in &class.fields {
            for extension in self.extensions.iter() {
                extension.process_field(state, class, field)?;
            }
        }
        for method in &class.methods {
            for extension in self.extensions.iter() {
                extension.process_method(state, class, method)?;
            }
        }

        state.set_current(None);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::InMemoryContainer;
    use crate::registry::InMemoryTypeRegistry;
    use beanscope_api::{ClassKind, FieldInfo, TypeRef};
    use beanscope_plugin::DiscoveryExtension;
    use url::Url;

    /// Enqueues the raw type of every field, nothing else.
    struct FieldTypes;

    impl DiscoveryExtension for FieldTypes {
        fn name(&self) -> &str {
            "field-types"
        }

        fn process_field(
            &self,
            ctx: &mut dyn DiscoveryContext,
            _class: &ClassInfo,
            field: &FieldInfo,
        ) -> Result<()> {
            ctx.process_bean(ClassRef::Type(&field.declared));
            Ok(())
        }
    }

    fn app() -> Url {
        Url::parse("file:///cp/app/").unwrap()
    }

    fn run(registry: InMemoryTypeRegistry, test: &str) -> DiscoveryOutcome {
        let registry = Arc::new(registry);
        let container = InMemoryContainer::new();
        let scans = ScanCache::new(registry.clone());
        let extensions = DiscoveryExtensions::new().with(Arc::new(FieldTypes));
        DiscoveryDriver::new(registry.as_ref(), &container, &scans, &extensions)
            .run(&TestConfiguration::new(test))
            .unwrap()
    }

    #[test]
    fn test_cycle_terminates() {
        let registry = InMemoryTypeRegistry::new();
        registry.add_root(app(), true);
        registry.register_all([
            ClassInfo::builder("com.example.ATest")
                .located_at(app())
                .field(FieldInfo::new("b", TypeRef::class("com.example.B")))
                .build(),
            ClassInfo::builder("com.example.B")
                .located_at(app())
                .field(FieldInfo::new("c", TypeRef::class("com.example.C")))
                .build(),
            ClassInfo::builder("com.example.C")
                .located_at(app())
                .field(FieldInfo::new("b", TypeRef::class("com.example.B")))
                .build(),
        ]);

        let outcome = run(registry, "com.example.ATest");
        let names: Vec<&str> = outcome.discovered.iter().map(|c| c.as_str()).collect();
        assert_eq!(names, vec!["com.example.ATest", "com.example.B", "com.example.C"]);
        assert_eq!(outcome.stats.processed, 3);
    }

    #[test]
    fn test_non_archive_and_marker_definitions_are_not_recorded() {
        let lib = Url::parse("file:///cp/lib/").unwrap();
        let registry = InMemoryTypeRegistry::new();
        registry.add_root(app(), true);
        registry.register_all([
            ClassInfo::builder("com.example.ATest")
                .located_at(app())
                .field(FieldInfo::new("u", TypeRef::class("org.lib.Util")))
                .field(FieldInfo::new("m", TypeRef::class("com.example.Qualifier")))
                .field(FieldInfo::new("n", TypeRef::class("int")))
                .build(),
            ClassInfo::builder("org.lib.Util").located_at(lib).build(),
            ClassInfo::builder("com.example.Qualifier")
                .kind(ClassKind::Annotation)
                .located_at(app())
                .build(),
        ]);

        let outcome = run(registry, "com.example.ATest");
        let names: Vec<&str> = outcome.discovered.iter().map(|c| c.as_str()).collect();
        assert_eq!(names, vec!["com.example.ATest"]);
        assert_eq!(outcome.stats.inspected, 2);
        assert_eq!(outcome.stats.skipped, 2);
    }

    #[test]
    fn test_test_class_is_inspected_outside_bean_archives() {
        let registry = InMemoryTypeRegistry::new();
        registry.add_root(app(), true);
        let tests = Url::parse("file:///cp/test-classes/").unwrap();
        registry.register_all([
            ClassInfo::builder("com.example.ATest")
                .located_at(tests)
                .field(FieldInfo::new("b", TypeRef::class("com.example.B")))
                .build(),
            ClassInfo::builder("com.example.B").located_at(app()).build(),
        ]);

        let outcome = run(registry, "com.example.ATest");
        assert!(outcome.discovered.contains("com.example.B"));
        assert_eq!(
            outcome.graph.origin_of("com.example.B").map(|c| c.as_str()),
            Some("com.example.ATest")
        );
    }
}
