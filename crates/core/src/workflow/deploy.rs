use super::PluginBuilder;
use crate::error::{BuildError, Result};
use crate::project::{DROPINS_DIR, PluginProject};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

impl PluginBuilder {
    /// Copies the packaged plugin into `<target_platform>/dropins`,
    /// replacing an earlier copy. Returns the deployed path.
    pub fn deploy(&self, project_dir: &Path, target_platform: &Path) -> Result<PathBuf> {
        let dropins = target_platform.join(DROPINS_DIR);
        if !dropins.is_dir() {
            return Err(BuildError::not_found("Target directory", dropins));
        }

        let project = PluginProject::new(project_dir);
        let classpath = project.load_classpath()?;
        project.output_dir(&classpath)?;
        let artifact_name = self.toolchain.build_tool.artifact_name(project.root())?;
        let archive = project.jar_path(&artifact_name);
        if !archive.is_file() {
            return Err(BuildError::not_found("Plugin archive", archive));
        }

        let dest = dropins.join(&artifact_name);
        if dest.exists() {
            fs::remove_file(&dest)?;
        }
        fs::copy(&archive, &dest)?;
        info!("Deployed {:?} to {:?}", archive, dest);

        Ok(dest)
    }
}
