use super::PluginBuilder;
use crate::error::{BuildError, Result};
use crate::manifest::patch_manifest_file;
use crate::project::{MANIFEST_PATH, PLUGIN_XML_PATH, PluginProject};
use crate::tool::ArchiveRequest;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageReport {
    pub archive: PathBuf,
    pub staged_libraries: Vec<String>,
}

impl PluginBuilder {
    /// Stages third-party libraries into `lib/`, rewrites the manifest's
    /// `Bundle-ClassPath` and packs the plugin archive under `target/`.
    pub fn package(&self, project_dir: &Path) -> Result<PackageReport> {
        let project = PluginProject::new(project_dir);
        let classpath = project.load_classpath()?;

        for (what, path) in [
            ("Manifest", project.manifest_path()),
            ("Plugin descriptor", project.plugin_xml_path()),
        ] {
            if !path.is_file() {
                return Err(BuildError::not_found(what, path));
            }
        }

        let output_dir = project.output_dir(&classpath)?;
        let artifact_name = self.toolchain.build_tool.artifact_name(project.root())?;
        let archive = project.jar_path(&artifact_name);

        let libraries = classpath.third_party_libs(&self.config.platform_prefix);
        let staged_libraries = stage_libraries(&project.lib_dir(), &libraries)?;
        patch_manifest_file(&project.manifest_path(), &staged_libraries)?;

        if archive.exists() {
            fs::remove_file(&archive)?;
        }
        if let Some(parent) = archive.parent() {
            fs::create_dir_all(parent)?;
        }

        let request = ArchiveRequest {
            working_dir: project.root().to_path_buf(),
            archive: archive.clone(),
            manifest: PathBuf::from(MANIFEST_PATH),
            content_root: output_dir,
            extra_file: PathBuf::from(PLUGIN_XML_PATH),
            extra_dirs: project.optional_archive_dirs(),
        };
        self.toolchain.archiver.archive(&request)?;

        if !archive.is_file() {
            return Err(BuildError::MissingInput(format!(
                "{} did not produce `{}`",
                self.toolchain.archiver.name(),
                archive.display()
            )));
        }
        info!("Created {:?}", archive);

        Ok(PackageReport {
            archive,
            staged_libraries,
        })
    }
}

/// Recreates `lib_dir` holding a copy of every library. Returns the sorted
/// file names as they appear in `lib/`.
fn stage_libraries(lib_dir: &Path, libraries: &[PathBuf]) -> Result<Vec<String>> {
    if lib_dir.is_dir() {
        fs::remove_dir_all(lib_dir)?;
    }
    fs::create_dir_all(lib_dir)?;

    let mut names = Vec::with_capacity(libraries.len());
    for library in libraries {
        let Some(name) = library.file_name() else {
            continue;
        };
        if !library.is_file() {
            return Err(BuildError::not_found("Library", library));
        }
        let dest = lib_dir.join(name);
        debug!("Staging {:?} -> {:?}", library, dest);
        fs::copy(library, &dest)?;
        names.push(name.to_string_lossy().into_owned());
    }

    names.sort();
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_libraries_replaces_previous_content() {
        let temp = tempfile::tempdir().unwrap();
        let repo = temp.path().join("repo");
        fs::create_dir_all(&repo).unwrap();
        fs::write(repo.join("b-1.jar"), b"b").unwrap();
        fs::write(repo.join("a-1.jar"), b"a").unwrap();

        let lib_dir = temp.path().join("lib");
        fs::create_dir_all(&lib_dir).unwrap();
        fs::write(lib_dir.join("stale.jar"), b"old").unwrap();

        let names =
            stage_libraries(&lib_dir, &[repo.join("b-1.jar"), repo.join("a-1.jar")]).unwrap();

        assert_eq!(names, vec!["a-1.jar".to_string(), "b-1.jar".to_string()]);
        assert!(!lib_dir.join("stale.jar").exists());
        assert_eq!(fs::read(lib_dir.join("a-1.jar")).unwrap(), b"a");
    }

    #[test]
    fn test_stage_libraries_missing_source() {
        let temp = tempfile::tempdir().unwrap();
        let err = stage_libraries(&temp.path().join("lib"), &[temp.path().join("gone.jar")])
            .unwrap_err();
        assert!(matches!(err, BuildError::NotFound { .. }));
    }
}
