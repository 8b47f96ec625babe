//! Seams to the external build tool and archiver.
//!
//! Concrete implementations live in their own crates:
//! - `epb-maven::MavenBuildTool`: coordinates from `pom.xml`, dependency list via `mvn`
//! - `epb-java::JarArchiver`: packaging via the JDK `jar` tool

use crate::error::{BuildError, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tracing::debug;

/// The build tool that owns the project's third-party dependencies.
pub trait BuildTool {
    fn name(&self) -> &str;

    /// File marking a project root next to `.project`, e.g. `pom.xml`.
    fn descriptor_file(&self) -> &str;

    /// File name of the artifact the project builds, e.g.
    /// `org.example.plugin_1.0.0.jar`.
    fn artifact_name(&self, project_root: &Path) -> Result<String>;

    /// Raw path list of the flattened dependencies.
    fn list_dependencies(&self, project_root: &Path) -> Result<String>;
}

/// Inputs for packaging the plugin archive. Relative paths are resolved
/// against `working_dir`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveRequest {
    pub working_dir: PathBuf,
    pub archive: PathBuf,
    pub manifest: PathBuf,
    pub content_root: PathBuf,
    pub extra_file: PathBuf,
    pub extra_dirs: Vec<PathBuf>,
}

pub trait Archiver {
    fn name(&self) -> &str;

    fn archive(&self, request: &ArchiveRequest) -> Result<()>;
}

/// The external collaborators used by the workflows.
pub struct Toolchain {
    pub build_tool: Box<dyn BuildTool>,
    pub archiver: Box<dyn Archiver>,
}

/// Runs `command` to completion, capturing its output.
///
/// A non-zero exit becomes [`BuildError::ExternalTool`] carrying stdout and
/// stderr.
pub fn run_command(tool: &str, command: &mut Command) -> Result<Output> {
    debug!("Running command: {:?}", command);
    let output = command.output().map_err(|e| BuildError::ExternalTool {
        tool: tool.to_string(),
        status: "not started".to_string(),
        output: e.to_string(),
    })?;

    if !output.status.success() {
        return Err(BuildError::ExternalTool {
            tool: tool.to_string(),
            status: output.status.to_string(),
            output: captured_output(&output),
        });
    }

    Ok(output)
}

fn captured_output(output: &Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    [stdout.trim(), stderr.trim()]
        .iter()
        .filter(|s| !s.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join("\n")
}
