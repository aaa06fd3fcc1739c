use super::driver::DiscoveryStats;
use super::graph::DiscoveryGraph;
use crate::scan::ScanCache;
use beanscope_api::{
    ClassInfo, ClassName, ContainerExtension, ContainerSpi, ExtensionRegistration,
    TestConfiguration, TypeResolver,
};
use beanscope_plugin::{ClassRef, DiscoveryContext};
use indexmap::IndexSet;
use std::collections::{HashSet, VecDeque};
use std::sync::Arc;
use tracing::trace;
use url::Url;

/// Everything a finished traversal produced, before it is frozen into a descriptor.
#[derive(Debug, Default)]
pub struct DiscoveryOutcome {
    pub discovered: IndexSet<ClassName>,
    pub ignored: HashSet<ClassName>,
    pub alternatives: Vec<ClassName>,
    pub interceptors: Vec<ClassName>,
    pub decorators: Vec<ClassName>,
    pub alternative_stereotypes: Vec<ClassName>,
    pub extensions: Vec<ExtensionRegistration>,
    pub graph: DiscoveryGraph,
    pub stats: DiscoveryStats,
}

/// Per-invocation discovery state.
///
/// Owns the worklist and every registration made by extensions. It is
/// handed out as `&mut dyn DiscoveryContext` to one extension call at a time.
pub struct DiscoveryState<'a> {
    configuration: &'a TestConfiguration,
    resolver: &'a dyn TypeResolver,
    container: &'a dyn ContainerSpi,
    scans: &'a ScanCache,

    /// FIFO worklist; `queued` mirrors its contents for membership checks.
    pending: VecDeque<ClassName>,
    queued: HashSet<ClassName>,
    processed: HashSet<ClassName>,
    ignored: HashSet<ClassName>,
    discovered: IndexSet<ClassName>,

    /// Roots whose classes are classified.
    archive_roots: HashSet<Url>,
    /// Classes classified regardless of their root.
    included: HashSet<ClassName>,

    alternatives: Vec<ClassName>,
    interceptors: Vec<ClassName>,
    decorators: Vec<ClassName>,
    alternative_stereotypes: Vec<ClassName>,
    extensions: Vec<ExtensionRegistration>,

    graph: DiscoveryGraph,
    current: Option<ClassName>,
}

impl<'a> DiscoveryState<'a> {
    pub fn new(
        configuration: &'a TestConfiguration,
        resolver: &'a dyn TypeResolver,
        container: &'a dyn ContainerSpi,
        scans: &'a ScanCache,
    ) -> Self {
        let archive_roots = scans.bean_archive_roots().iter().cloned().collect();
        let mut included = HashSet::new();
        included.insert(configuration.test_class().clone());

        Self {
            configuration,
            resolver,
            container,
            scans,
            pending: VecDeque::new(),
            queued: HashSet::new(),
            processed: HashSet::new(),
            ignored: HashSet::new(),
            discovered: IndexSet::new(),
            archive_roots,
            included,
            alternatives: Vec::new(),
            interceptors: Vec::new(),
            decorators: Vec::new(),
            alternative_stereotypes: Vec::new(),
            extensions: Vec::new(),
            graph: DiscoveryGraph::new(),
            current: None,
        }
    }

    /// Oldest pending candidate, left in place until [`processed`](Self::processed).
    pub fn next_to_process(&self) -> Option<ClassName> {
        self.pending.front().cloned()
    }

    pub fn processed(&mut self, class: &ClassName) {
        if self.queued.remove(class) {
            if self.pending.front() == Some(class) {
                self.pending.pop_front();
            } else {
                self.pending.retain(|pending| pending != class);
            }
        }
        self.processed.insert(class.clone());
    }

    pub fn is_processed(&self, class: &str) -> bool {
        self.processed.contains(class)
    }

    pub fn is_pending(&self, class: &str) -> bool {
        self.queued.contains(class)
    }

    pub fn is_ignored(&self, class: &str) -> bool {
        self.ignored.contains(class)
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Whether a resolved class lives somewhere discovery classifies.
    pub fn is_in_bean_archive(&self, class: &ClassInfo) -> bool {
        self.included.contains(&class.name)
            || class
                .location
                .as_ref()
                .is_some_and(|root| self.archive_roots.contains(root))
    }

    /// Add a name to the discovered output. Order of first recording is kept.
    pub fn record_discovered(&mut self, class: &ClassName) {
        self.discovered.insert(class.clone());
    }

    /// Candidate whose hooks are running, used as the origin of new edges.
    pub fn set_current(&mut self, class: Option<ClassName>) {
        self.current = class;
    }

    pub fn into_outcome(self) -> DiscoveryOutcome {
        DiscoveryOutcome {
            discovered: self.discovered,
            ignored: self.ignored,
            alternatives: self.alternatives,
            interceptors: self.interceptors,
            decorators: self.decorators,
            alternative_stereotypes: self.alternative_stereotypes,
            extensions: self.extensions,
            graph: self.graph,
            stats: DiscoveryStats::default(),
        }
    }

    /// Raw identities behind a reference. Names that do not resolve yield nothing.
    fn identities(&self, class: ClassRef<'_>) -> Vec<ClassName> {
        match class {
            ClassRef::Type(ty) => ty.raw_identities(),
            ClassRef::Class(name) => vec![name.clone()],
            ClassRef::Name(name) => match self.resolver.resolve(name) {
                Some(info) => vec![info.name.clone()],
                None => {
                    trace!("Dropping unresolvable class name {}", name);
                    Vec::new()
                }
            },
        }
    }

    fn enqueue(&mut self, class: ClassName) {
        if self.processed.contains(&class) || self.queued.contains(&class) {
            return;
        }
        self.graph.record(self.current.as_ref(), &class);
        trace!("Enqueued {}", class);
        self.queued.insert(class.clone());
        self.pending.push_back(class);
    }

    fn location_of(&self, class: &ClassName) -> Option<Url> {
        let location = self
            .resolver
            .resolve_class(class)
            .and_then(|info| info.location.clone());
        if location.is_none() {
            trace!("No classpath root for {}", class);
        }
        location
    }
}

impl DiscoveryContext for DiscoveryState<'_> {
    fn test_configuration(&self) -> &TestConfiguration {
        self.configuration
    }

    fn resolver(&self) -> &dyn TypeResolver {
        self.resolver
    }

    fn container(&self) -> &dyn ContainerSpi {
        self.container
    }

    fn process_bean(&mut self, class: ClassRef<'_>) {
        for id in self.identities(class) {
            self.enqueue(id);
        }
    }

    fn ignore_bean(&mut self, class: ClassRef<'_>) {
        for id in self.identities(class) {
            trace!("Ignoring {}", id);
            self.ignored.insert(id);
        }
    }

    fn process_package(&mut self, class: ClassRef<'_>) {
        let bases = self.identities(class);
        for name in self.scan_packages(&bases) {
            self.enqueue(name);
        }
    }

    fn process_classpath(&mut self, class: ClassRef<'_>) {
        let bases = self.identities(class);
        for name in self.scan_bean_archives(&bases) {
            self.enqueue(name);
        }
    }

    fn enable_alternative(&mut self, class: ClassRef<'_>) {
        let ids = self.identities(class);
        self.alternatives.extend(ids);
    }

    fn enable_interceptor(&mut self, class: ClassRef<'_>) {
        let ids = self.identities(class);
        self.interceptors.extend(ids);
    }

    fn enable_decorator(&mut self, class: ClassRef<'_>) {
        let ids = self.identities(class);
        self.decorators.extend(ids);
    }

    fn enable_alternative_stereotype(&mut self, class: ClassRef<'_>) {
        let ids = self.identities(class);
        self.alternative_stereotypes.extend(ids);
    }

    fn extension(&mut self, extension: Arc<dyn ContainerExtension>, location: &str) {
        self.extensions
            .push(ExtensionRegistration::new(extension, location));
    }

    fn scan_bean_archives(&mut self, base_classes: &[ClassName]) -> Vec<ClassName> {
        let mut roots: Vec<Url> = Vec::new();
        for base in base_classes {
            if let Some(root) = self.location_of(base) {
                if !roots.contains(&root) {
                    roots.push(root);
                }
            }
        }
        if roots.is_empty() {
            return Vec::new();
        }
        self.archive_roots.extend(roots.iter().cloned());
        self.scans.class_names_for_classpath(&roots).to_vec()
    }

    fn scan_packages(&mut self, base_classes: &[ClassName]) -> Vec<ClassName> {
        let mut found = Vec::new();
        for base in base_classes {
            let Some(root) = self.location_of(base) else {
                continue;
            };
            let names = self.scans.class_names_for_package(base.package(), &root);
            self.included.extend(names.iter().cloned());
            found.extend(names.iter().cloned());
        }
        found
    }
}
