//! Layout constants and user-facing configuration.
//!
//! Everything the resolver matches on (denylist, scanned subtrees, archive
//! naming markers) lives in [`Layout`] so tests can run against synthetic
//! trees with their own conventions. [`BuilderConfig`] wraps the layout with
//! the settings of the surrounding workflows and can be read from JSON.

use crate::error::{BuildError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_DENY_LIST: &[&str] = &[
    ".pde.",
    "/jre/",
    "/org.eclipse.equinox.p2.repository/",
    "ant",
    "artifacts.jar",
    "content.jar",
    "ease",
    "egit",
    "jdt.debug",
    "jgit",
    "pydev",
];

pub const DEFAULT_SUBTREES: &[&str] = &["dropins", "features", "jre", "plugins"];

pub const DEFAULT_PLATFORM_PREFIX: &str = "/opt/capella_6.0.0";

pub const DEFAULT_EXECUTION_ENVIRONMENT: &str = "JavaSE-17";

/// Naming and directory conventions of a target platform installation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Layout {
    pub deny_list: Vec<String>,
    pub subtrees: Vec<String>,
    pub source_marker: String,
    pub binary_marker: String,
    pub archive_extension: String,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            deny_list: DEFAULT_DENY_LIST.iter().map(|s| s.to_string()).collect(),
            subtrees: DEFAULT_SUBTREES.iter().map(|s| s.to_string()).collect(),
            source_marker: ".source_".to_string(),
            binary_marker: "_".to_string(),
            archive_extension: "jar".to_string(),
        }
    }
}

impl Layout {
    /// True when `name` carries the archive extension, e.g. `foo.jar`.
    pub fn is_archive_name(&self, name: &str) -> bool {
        name.len() > self.archive_extension.len()
            && name.ends_with(&self.archive_extension)
            && name[..name.len() - self.archive_extension.len()].ends_with('.')
    }

    /// True for archives following the source naming convention
    /// (`org.foo.source_1.0.jar`).
    pub fn is_source_name(&self, name: &str) -> bool {
        self.is_archive_name(name) && name.contains(&self.source_marker)
    }

    /// File name of the binary sibling of a source archive.
    pub fn binary_name_for(&self, source_name: &str) -> String {
        source_name.replace(&self.source_marker, &self.binary_marker)
    }
}

/// Settings shared by every workflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuilderConfig {
    pub layout: Layout,
    /// `lib` entries under this prefix come from the target platform and are
    /// never staged into `lib/`.
    pub platform_prefix: String,
    pub execution_environment: String,
    /// Separator of the path list written by the dependency lister.
    pub path_separator: char,
    /// `mvn` from `PATH` when unset.
    pub maven_executable: Option<String>,
    /// Located through `JAVA_HOME` when unset.
    pub jar_executable: Option<String>,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            layout: Layout::default(),
            platform_prefix: DEFAULT_PLATFORM_PREFIX.to_string(),
            execution_environment: DEFAULT_EXECUTION_ENVIRONMENT.to_string(),
            path_separator: ':',
            maven_executable: None,
            jar_executable: None,
        }
    }
}

impl BuilderConfig {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(BuildError::not_found("Configuration file", path));
        }
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Identifier of the JRE classpath container for the configured
    /// execution environment.
    pub fn runtime_container(&self) -> String {
        format!(
            "org.eclipse.jdt.launching.JRE_CONTAINER/\
             org.eclipse.jdt.internal.debug.ui.launcher.StandardVMType/{}",
            self.execution_environment
        )
    }
}
