use super::PluginBuilder;
use crate::error::Result;
use crate::project::PluginProject;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

impl PluginBuilder {
    /// Removes what `package` produced: the plugin archive and the staged
    /// `lib/` directory. Returns the removed paths.
    pub fn clean(&self, project_dir: &Path) -> Result<Vec<PathBuf>> {
        let project = PluginProject::new(project_dir);
        let artifact_name = self.toolchain.build_tool.artifact_name(project.root())?;
        let mut removed = Vec::new();

        let archive = project.jar_path(&artifact_name);
        if archive.is_file() {
            fs::remove_file(&archive)?;
            removed.push(archive);
        }

        let lib_dir = project.lib_dir();
        if lib_dir.is_dir() {
            fs::remove_dir_all(&lib_dir)?;
            removed.push(lib_dir);
        }

        info!("Cleaned {} build artifacts", removed.len());
        Ok(removed)
    }
}
