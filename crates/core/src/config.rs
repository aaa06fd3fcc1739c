use beanscope_api::DiscoveryError;
use beanscope_api::markers::FRAMEWORK_PACKAGE;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use url::Url;

/// Settings for discovery and classpath scanning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscoveryConfig {
    /// Classpath roots (directories or archives) visible to the scanner.
    pub classpath: Vec<PathBuf>,
    /// Worker threads for physical scans; `None` derives it from the core count.
    pub scan_threads: Option<usize>,
    /// Relative paths whose presence makes a root a bean archive.
    pub bean_archive_descriptors: Vec<String>,
    /// Package of the framework's own markers, which are never fed back as candidates.
    pub framework_package: String,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            classpath: Vec::new(),
            scan_threads: None,
            bean_archive_descriptors: vec!["META-INF/beans.xml".to_string()],
            framework_package: FRAMEWORK_PACKAGE.to_string(),
        }
    }
}

impl DiscoveryConfig {
    pub const CLASSPATH_ENV: &'static str = "BEANSCOPE_CLASSPATH";
    pub const SCAN_THREADS_ENV: &'static str = "BEANSCOPE_SCAN_THREADS";

    /// Defaults overridden by the process environment.
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    pub fn from_json_str(raw: &str) -> Result<Self, DiscoveryError> {
        serde_json::from_str(raw)
            .map_err(|e| DiscoveryError::Config(format!("invalid discovery config: {}", e)))
    }

    pub fn with_env_overrides(mut self) -> Self {
        if let Some(classpath) = std::env::var_os(Self::CLASSPATH_ENV) {
            self.classpath = std::env::split_paths(&classpath)
                .filter(|p| !p.as_os_str().is_empty())
                .collect();
        }
        if let Ok(raw) = std::env::var(Self::SCAN_THREADS_ENV) {
            match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => self.scan_threads = Some(n),
                _ => tracing::warn!("Ignoring invalid {}={:?}", Self::SCAN_THREADS_ENV, raw),
            }
        }
        self
    }

    /// Classpath entries as root URLs; directories keep a trailing slash.
    pub fn classpath_roots(&self) -> Vec<Url> {
        self.classpath
            .iter()
            .filter_map(|path| {
                let absolute = if path.is_absolute() {
                    path.clone()
                } else {
                    std::env::current_dir().ok()?.join(path)
                };
                let url = if absolute.is_dir() {
                    Url::from_directory_path(&absolute)
                } else {
                    Url::from_file_path(&absolute)
                };
                url.ok()
            })
            .collect()
    }
}
