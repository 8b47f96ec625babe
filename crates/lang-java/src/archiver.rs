use crate::jdk;
use epb_core::Result;
use epb_core::tool::{ArchiveRequest, Archiver, run_command};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::info;

/// Packages plugin archives with the JDK `jar` tool.
pub struct JarArchiver {
    executable: PathBuf,
}

impl JarArchiver {
    /// Uses the `jar` found through `JAVA_HOME`, or the one on `PATH`.
    pub fn new() -> Self {
        Self::with_executable(jdk::find_jar_executable())
    }

    pub fn with_executable(executable: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
        }
    }

    pub fn executable(&self) -> &Path {
        &self.executable
    }

    /// `cfm <archive> <manifest> -C <content_root>/ . <extra_file> <dir>/...`
    pub fn arguments(request: &ArchiveRequest) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec![
            "cfm".into(),
            request.archive.clone().into_os_string(),
            request.manifest.clone().into_os_string(),
            "-C".into(),
            with_trailing_slash(&request.content_root),
            ".".into(),
            request.extra_file.clone().into_os_string(),
        ];
        args.extend(request.extra_dirs.iter().map(|dir| with_trailing_slash(dir)));
        args
    }
}

impl Default for JarArchiver {
    fn default() -> Self {
        Self::new()
    }
}

impl Archiver for JarArchiver {
    fn name(&self) -> &str {
        jdk::JAR_TOOL
    }

    fn archive(&self, request: &ArchiveRequest) -> Result<()> {
        let mut command = Command::new(&self.executable);
        command
            .args(Self::arguments(request))
            .current_dir(&request.working_dir);
        run_command(self.name(), &mut command)?;
        info!("Packaged {}", request.archive.display());
        Ok(())
    }
}

fn with_trailing_slash(path: &Path) -> OsString {
    let mut value = path.as_os_str().to_os_string();
    if !path.as_os_str().to_string_lossy().ends_with('/') {
        value.push("/");
    }
    value
}
