//! Plugin project layout and discovery.

use crate::error::{BuildError, Result};
use crate::model::ClasspathDescriptor;
use std::path::{Path, PathBuf};

pub const PROJECT_MARKER: &str = ".project";
pub const CLASSPATH_FILE: &str = ".classpath";
pub const MANIFEST_PATH: &str = "META-INF/MANIFEST.MF";
pub const PLUGIN_XML_PATH: &str = "plugin.xml";
pub const LIB_DIR: &str = "lib";
pub const TARGET_DIR: &str = "target";
pub const DROPINS_DIR: &str = "dropins";

/// Directories added to the archive only when present and non-empty.
pub const OPTIONAL_ARCHIVE_DIRS: &[&str] = &[LIB_DIR, "OSGI-INF"];

/// Finds the nearest directory containing both the Eclipse `.project` marker
/// and the build descriptor (`pom.xml` for Maven). The search starts at
/// `path` itself when it is a directory, otherwise at its parent.
pub fn find_project_root(path: &Path, build_descriptor: &str) -> Result<PathBuf> {
    let path = path
        .canonicalize()
        .map_err(|_| BuildError::not_found("Project file", path))?;

    let start = if path.is_dir() {
        path.as_path()
    } else {
        path.parent().unwrap_or(&path)
    };

    start
        .ancestors()
        .find(|dir| dir.join(PROJECT_MARKER).is_file() && dir.join(build_descriptor).is_file())
        .map(Path::to_path_buf)
        .ok_or_else(|| BuildError::ProjectRootNotFound(path.clone()))
}

/// True if `dir` exists and has at least one entry.
pub fn is_non_empty_dir(dir: &Path) -> bool {
    std::fs::read_dir(dir)
        .map(|mut entries| entries.next().is_some())
        .unwrap_or(false)
}

/// An Eclipse plugin project rooted at an explicit directory.
#[derive(Debug, Clone)]
pub struct PluginProject {
    root: PathBuf,
}

impl PluginProject {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn classpath_file(&self) -> PathBuf {
        self.root.join(CLASSPATH_FILE)
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.root.join(MANIFEST_PATH)
    }

    pub fn plugin_xml_path(&self) -> PathBuf {
        self.root.join(PLUGIN_XML_PATH)
    }

    pub fn lib_dir(&self) -> PathBuf {
        self.root.join(LIB_DIR)
    }

    /// `target/<artifact>` where the packaged plugin is written.
    pub fn jar_path(&self, artifact_name: &str) -> PathBuf {
        self.root.join(TARGET_DIR).join(artifact_name)
    }

    pub fn load_classpath(&self) -> Result<ClasspathDescriptor> {
        ClasspathDescriptor::load(&self.classpath_file())
    }

    /// Output directory declared in `.classpath`, which must exist and hold
    /// build products.
    pub fn output_dir(&self, classpath: &ClasspathDescriptor) -> Result<PathBuf> {
        let output = classpath.output_dir().ok_or_else(|| {
            BuildError::MissingInput(format!(
                "Output directory not found. Missing `classpathentry` with kind `output` in `{}`.",
                self.classpath_file().display()
            ))
        })?;
        let output = self.root.join(output);
        if !output.is_dir() {
            return Err(BuildError::not_found("Output directory", output));
        }
        if !is_non_empty_dir(&output) {
            return Err(BuildError::EmptyOutput(output));
        }
        Ok(output)
    }

    /// Directories from [`OPTIONAL_ARCHIVE_DIRS`] that exist and are not
    /// empty, relative to the project root.
    pub fn optional_archive_dirs(&self) -> Vec<PathBuf> {
        OPTIONAL_ARCHIVE_DIRS
            .iter()
            .filter(|dir| is_non_empty_dir(&self.root.join(dir)))
            .map(PathBuf::from)
            .collect()
    }
}
