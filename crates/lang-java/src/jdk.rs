use std::path::{Path, PathBuf};

pub const JAR_TOOL: &str = "jar";

/// Locates the JDK `jar` tool.
///
/// `JAVA_HOME/bin/jar` when it exists, otherwise the bare name so the
/// `PATH` lookup of the OS applies.
pub fn find_jar_executable() -> PathBuf {
    // 1. Try JAVA_HOME environment variable
    if let Ok(home) = std::env::var("JAVA_HOME") {
        if let Some(jar) = check_jdk_home(Path::new(&home)) {
            return jar;
        }
    }

    // 2. Fall back to PATH
    PathBuf::from(JAR_TOOL)
}

fn check_jdk_home(home: &Path) -> Option<PathBuf> {
    let bin = home.join("bin");
    [JAR_TOOL, "jar.exe"]
        .iter()
        .map(|name| bin.join(name))
        .find(|candidate| candidate.is_file())
}
