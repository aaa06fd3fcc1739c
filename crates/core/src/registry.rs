//! In-memory class metadata and classpath layout.
//!
//! Serves both as the [`TypeResolver`] discovery runs against and as a
//! [`ClasspathScanner`] over the roots it knows about, so a whole test
//! universe can be described without touching the filesystem.

use beanscope_api::{ClassInfo, ClassName, TypeResolver};
use beanscope_plugin::ClasspathScanner;
use indexmap::IndexMap;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use url::Url;

const PRIMITIVES: [&str; 9] = [
    "boolean", "byte", "char", "short", "int", "long", "float", "double", "void",
];

/// Thread-safe in-memory type registry
pub struct InMemoryTypeRegistry {
    classes: RwLock<HashMap<ClassName, Arc<ClassInfo>>>,
    /// Root URL -> whether it is a bean archive, in registration order.
    roots: RwLock<IndexMap<Url, bool>>,
}

impl InMemoryTypeRegistry {
    pub fn new() -> Self {
        let classes = PRIMITIVES
            .iter()
            .map(|&p| {
                let info = ClassInfo::primitive(p);
                (info.name.clone(), Arc::new(info))
            })
            .collect();
        Self {
            classes: RwLock::new(classes),
            roots: RwLock::new(IndexMap::new()),
        }
    }

    /// Declare a classpath root. Re-adding a root updates its bean archive flag.
    pub fn add_root(&self, root: Url, bean_archive: bool) {
        let mut roots = self.roots.write().unwrap_or_else(PoisonError::into_inner);
        roots.insert(root, bean_archive);
    }

    /// Register (or replace) a class. Its location root is declared as a
    /// plain root if it is not known yet.
    pub fn register(&self, info: ClassInfo) -> Arc<ClassInfo> {
        if let Some(location) = &info.location {
            let mut roots = self.roots.write().unwrap_or_else(PoisonError::into_inner);
            roots.entry(location.clone()).or_insert(false);
        }
        let info = Arc::new(info);
        let mut classes = self.classes.write().unwrap_or_else(PoisonError::into_inner);
        classes.insert(info.name.clone(), info.clone());
        info
    }

    pub fn register_all(&self, infos: impl IntoIterator<Item = ClassInfo>) {
        for info in infos {
            self.register(info);
        }
    }

    pub fn len(&self) -> usize {
        self.classes
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn sorted_names(&self, filter: impl Fn(&ClassInfo) -> bool) -> Vec<ClassName> {
        let classes = self.classes.read().unwrap_or_else(PoisonError::into_inner);
        let mut names: Vec<ClassName> = classes
            .values()
            .filter(|info| filter(info))
            .map(|info| info.name.clone())
            .collect();
        names.sort();
        names
    }
}

impl Default for InMemoryTypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeResolver for InMemoryTypeRegistry {
    fn resolve(&self, name: &str) -> Option<Arc<ClassInfo>> {
        let classes = self.classes.read().unwrap_or_else(PoisonError::into_inner);
        classes.get(name).cloned()
    }
}

impl ClasspathScanner for InMemoryTypeRegistry {
    fn name(&self) -> &str {
        "in-memory"
    }

    fn classpath_roots(&self) -> Vec<Url> {
        let roots = self.roots.read().unwrap_or_else(PoisonError::into_inner);
        roots.keys().cloned().collect()
    }

    fn find_bean_archives(&self, roots: &[Url]) -> Vec<Url> {
        let known = self.roots.read().unwrap_or_else(PoisonError::into_inner);
        roots
            .iter()
            .filter(|root| known.get(*root).copied().unwrap_or(false))
            .cloned()
            .collect()
    }

    fn class_names(&self, roots: &[Url]) -> Vec<ClassName> {
        roots
            .iter()
            .flat_map(|root| self.sorted_names(|info| info.location.as_ref() == Some(root)))
            .collect()
    }

    fn class_names_in_package(&self, package: &str, root: &Url) -> Vec<ClassName> {
        self.sorted_names(|info| {
            info.location.as_ref() == Some(root) && info.name.package() == package
        })
    }
}
