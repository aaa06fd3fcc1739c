//! Filesystem classpath scanner: class directories through `walkdir`,
//! jar archives through `zip`.

use crate::config::DiscoveryConfig;
use crate::error::ScanError;
use beanscope_api::ClassName;
use beanscope_plugin::ClasspathScanner;
use rayon::prelude::*;
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::{trace, warn};
use url::Url;
use walkdir::WalkDir;
use zip::ZipArchive;

const CLASS_SUFFIX: &str = ".class";
const SKIPPED_STEMS: [&str; 2] = ["module-info", "package-info"];

pub struct FsClasspathScanner {
    roots: Vec<Url>,
    descriptors: Vec<String>,
}

impl FsClasspathScanner {
    pub fn new(roots: Vec<Url>) -> Self {
        Self {
            roots,
            descriptors: DiscoveryConfig::default().bean_archive_descriptors,
        }
    }

    pub fn from_config(config: &DiscoveryConfig) -> Self {
        Self {
            roots: config.classpath_roots(),
            descriptors: config.bean_archive_descriptors.clone(),
        }
    }

    pub fn with_descriptors(mut self, descriptors: Vec<String>) -> Self {
        self.descriptors = descriptors;
        self
    }

    fn local_path(root: &Url) -> Result<PathBuf, ScanError> {
        root.to_file_path()
            .map_err(|_| ScanError::NotLocal(root.to_string()))
    }

    fn is_bean_archive(&self, root: &Url) -> Result<bool, ScanError> {
        let path = Self::local_path(root)?;
        if path.is_dir() {
            return Ok(self.descriptors.iter().any(|d| path.join(d).is_file()));
        }
        let mut archive = ZipArchive::new(File::open(&path)?)?;
        Ok(self
            .descriptors
            .iter()
            .any(|d| archive.by_name(d).is_ok()))
    }

    fn list_classes(root: &Url, package: Option<&str>) -> Result<Vec<ClassName>, ScanError> {
        let path = Self::local_path(root)?;
        let mut names = if path.is_dir() {
            Self::list_directory(&path, package)?
        } else {
            Self::list_archive(&path, package)?
        };
        names.sort();
        trace!("Scanned {} classes from {}", names.len(), root);
        Ok(names)
    }

    fn list_directory(base: &Path, package: Option<&str>) -> Result<Vec<ClassName>, ScanError> {
        // Package scans only look one level deep inside the package directory.
        let (start, max_depth) = match package {
            Some(pkg) if !pkg.is_empty() => (base.join(pkg.replace('.', "/")), 1),
            Some(_) => (base.to_path_buf(), 1),
            None => (base.to_path_buf(), usize::MAX),
        };
        if !start.is_dir() {
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        for entry in WalkDir::new(&start).max_depth(max_depth) {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }
            let Ok(relative) = entry.path().strip_prefix(base) else {
                continue;
            };
            let relative = relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/");
            if let Some(name) = class_name_from_entry(&relative) {
                names.push(name);
            }
        }
        Ok(names)
    }

    fn list_archive(path: &Path, package: Option<&str>) -> Result<Vec<ClassName>, ScanError> {
        let mut archive = ZipArchive::new(File::open(path)?)?;
        let mut names = Vec::new();
        for i in 0..archive.len() {
            let entry = archive.by_index(i)?;
            if entry.is_dir() {
                continue;
            }
            let Some(name) = class_name_from_entry(entry.name()) else {
                continue;
            };
            if package.is_none_or(|pkg| name.package() == pkg) {
                names.push(name);
            }
        }
        Ok(names)
    }

    fn classes_or_empty(root: &Url, package: Option<&str>) -> Vec<ClassName> {
        Self::list_classes(root, package).unwrap_or_else(|e| {
            warn!("Skipping unreadable classpath root {}: {}", root, e);
            Vec::new()
        })
    }
}

/// Binary class name for a `/`-separated archive entry, if it is a class.
fn class_name_from_entry(entry: &str) -> Option<ClassName> {
    let stem = entry.strip_suffix(CLASS_SUFFIX)?;
    if stem.starts_with("META-INF/") {
        return None;
    }
    let simple = stem.rsplit('/').next().unwrap_or(stem);
    if SKIPPED_STEMS.contains(&simple) {
        return None;
    }
    Some(ClassName::new(stem.replace('/', ".")))
}

impl ClasspathScanner for FsClasspathScanner {
    fn name(&self) -> &str {
        "filesystem"
    }

    fn classpath_roots(&self) -> Vec<Url> {
        self.roots.clone()
    }

    fn find_bean_archives(&self, roots: &[Url]) -> Vec<Url> {
        roots
            .par_iter()
            .filter_map(|root| match self.is_bean_archive(root) {
                Ok(true) => Some(root.clone()),
                Ok(false) => None,
                Err(e) => {
                    warn!("Cannot inspect classpath root {}: {}", root, e);
                    None
                }
            })
            .collect()
    }

    fn class_names(&self, roots: &[Url]) -> Vec<ClassName> {
        let per_root: Vec<Vec<ClassName>> = roots
            .par_iter()
            .map(|root| Self::classes_or_empty(root, None))
            .collect();
        per_root.into_iter().flatten().collect()
    }

    fn class_names_in_package(&self, package: &str, root: &Url) -> Vec<ClassName> {
        Self::classes_or_empty(root, Some(package))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_name_from_entry() {
        assert_eq!(
            class_name_from_entry("com/example/Outer$Inner.class"),
            Some(ClassName::from("com.example.Outer$Inner"))
        );
        assert_eq!(class_name_from_entry("com/example/package-info.class"), None);
        assert_eq!(class_name_from_entry("module-info.class"), None);
        assert_eq!(
            class_name_from_entry("META-INF/versions/11/com/example/Foo.class"),
            None
        );
        assert_eq!(class_name_from_entry("META-INF/beans.xml"), None);
        assert_eq!(class_name_from_entry("Root.class"), Some(ClassName::from("Root")));
    }

    #[test]
    fn test_remote_root_is_not_scanned() {
        let scanner = FsClasspathScanner::new(Vec::new());
        let remote = Url::parse("https://repo.example.com/lib.jar").unwrap();
        assert!(scanner.class_names(&[remote.clone()]).is_empty());
        assert!(scanner.find_bean_archives(&[remote]).is_empty());
    }
}
