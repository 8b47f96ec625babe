use epb_core::tool::run_command;
use epb_core::{BuildError, Result};
use std::path::Path;
use std::process::Command;
use tracing::debug;

pub const DEFAULT_EXECUTABLE: &str = "mvn";

/// Runs `mvn dependency:build-classpath` in `project_root` and returns the
/// path list Maven wrote.
pub fn build_classpath(executable: &str, project_root: &Path) -> Result<String> {
    let output_file = tempfile::NamedTempFile::new()?;

    let mut command = Command::new(executable);
    command
        .arg("-q")
        .arg("dependency:build-classpath")
        .arg(format!(
            "-Dmdep.outputFile={}",
            output_file.path().display()
        ))
        .current_dir(project_root);
    run_command(executable, &mut command)?;

    let listed = std::fs::read_to_string(output_file.path()).map_err(|e| {
        BuildError::MissingInput(format!(
            "{} did not write a dependency list to `{}`: {}",
            executable,
            output_file.path().display(),
            e
        ))
    })?;
    debug!("{} wrote {} bytes of classpath", executable, listed.len());

    Ok(listed)
}
