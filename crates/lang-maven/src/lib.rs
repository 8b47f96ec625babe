pub mod lister;
pub mod pom;

pub use pom::Coordinates;

use epb_core::Result;
use epb_core::tool::BuildTool;
use std::path::Path;

/// Maven as the project's build tool.
pub struct MavenBuildTool {
    executable: String,
}

impl MavenBuildTool {
    pub fn new() -> Self {
        Self::with_executable(lister::DEFAULT_EXECUTABLE)
    }

    /// Use a specific `mvn` binary (or wrapper such as `./mvnw`).
    pub fn with_executable(executable: impl Into<String>) -> Self {
        Self {
            executable: executable.into(),
        }
    }

    pub fn coordinates(&self, project_root: &Path) -> Result<Coordinates> {
        Coordinates::read(&project_root.join(pom::POM_FILE))
    }
}

impl Default for MavenBuildTool {
    fn default() -> Self {
        Self::new()
    }
}

impl BuildTool for MavenBuildTool {
    fn name(&self) -> &str {
        "Maven"
    }

    fn descriptor_file(&self) -> &str {
        pom::POM_FILE
    }

    fn artifact_name(&self, project_root: &Path) -> Result<String> {
        Ok(self.coordinates(project_root)?.artifact_name())
    }

    fn list_dependencies(&self, project_root: &Path) -> Result<String> {
        lister::build_classpath(&self.executable, project_root)
    }
}
