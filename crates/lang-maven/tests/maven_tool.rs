#![cfg(unix)]

use epb_core::BuildError;
use epb_core::tool::BuildTool;
use epb_maven::MavenBuildTool;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const POM: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<project xmlns="http://maven.apache.org/POM/4.0.0">
  <modelVersion>4.0.0</modelVersion>
  <groupId>org.example</groupId>
  <artifactId>demo</artifactId>
  <version>0.1.0</version>
</project>
"#;

fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    let mut perms = std::fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&path, perms).unwrap();
    path
}

fn project() -> TempDir {
    let temp = tempfile::tempdir().unwrap();
    std::fs::write(temp.path().join("pom.xml"), POM).unwrap();
    temp
}

#[test]
fn test_artifact_name_from_pom() {
    let temp = project();
    let tool = MavenBuildTool::new();
    assert_eq!(tool.descriptor_file(), "pom.xml");
    assert_eq!(
        tool.artifact_name(temp.path()).unwrap(),
        "org.example.demo_0.1.0.jar"
    );
}

#[test]
fn test_list_dependencies_with_fake_maven() {
    let temp = project();
    let bin = tempfile::tempdir().unwrap();

    // Writes the listing to the file named by -Dmdep.outputFile and records
    // its arguments and working directory.
    let script = write_script(
        bin.path(),
        "fake-mvn",
        r#"pwd > "$PWD/cwd.txt"
echo "$@" > "$PWD/args.txt"
for arg in "$@"; do
  case "$arg" in
    -Dmdep.outputFile=*) out="${arg#-Dmdep.outputFile=}" ;;
  esac
done
printf '/repo/a.jar:/repo/b.jar' > "$out""#,
    );
    let tool = MavenBuildTool::with_executable(script.to_string_lossy());

    let listed = tool.list_dependencies(temp.path()).unwrap();
    assert_eq!(listed, "/repo/a.jar:/repo/b.jar");

    let args = std::fs::read_to_string(temp.path().join("args.txt")).unwrap();
    assert!(args.starts_with("-q dependency:build-classpath -Dmdep.outputFile="));

    let cwd = std::fs::read_to_string(temp.path().join("cwd.txt")).unwrap();
    assert_eq!(
        Path::new(cwd.trim()).canonicalize().unwrap(),
        temp.path().canonicalize().unwrap()
    );

    // A failing run surfaces what the tool printed.
    let failing = write_script(bin.path(), "broken-mvn", "echo 'BUILD FAILURE'; exit 1");
    let tool = MavenBuildTool::with_executable(failing.to_string_lossy());
    match tool.list_dependencies(temp.path()).unwrap_err() {
        BuildError::ExternalTool { output, .. } => assert!(output.contains("BUILD FAILURE")),
        other => panic!("unexpected error: {other}"),
    }
}
