use super::PluginBuilder;
use crate::assemble::{ClasspathAssembler, parse_dependency_list};
use crate::error::{BuildError, Result};
use crate::project::{PluginProject, find_project_root};
use crate::target::{ArtifactScanner, DiskProbe, Reconciler, TargetTree};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClasspathReport {
    pub project_root: PathBuf,
    pub classpath_file: PathBuf,
    pub external_entries: usize,
    pub platform_entries: usize,
}

impl PluginBuilder {
    /// Resolves the classpath of the project containing `project_file`
    /// against `target_platform` and overwrites its `.classpath`.
    pub fn build_classpath(
        &self,
        project_file: &Path,
        target_platform: &Path,
    ) -> Result<ClasspathReport> {
        if !target_platform.is_dir() {
            return Err(BuildError::not_found(
                "Target platform installation dir",
                target_platform,
            ));
        }

        let build_tool = self.toolchain.build_tool.as_ref();
        let root = find_project_root(project_file, build_tool.descriptor_file())?;
        let project = PluginProject::new(&root);
        info!("Building classpath for project in {:?}", root);

        let artifact_name = build_tool.artifact_name(&root)?;
        let listed = build_tool.list_dependencies(&root)?;
        let external = parse_dependency_list(&listed, self.config.path_separator);
        info!(
            "{} listed {} third-party dependencies",
            build_tool.name(),
            external.len()
        );

        let layout = &self.config.layout;
        let tree = TargetTree::snapshot(target_platform)?;
        let scan = ArtifactScanner::new(layout.clone())
            .with_self_artifact(artifact_name)
            .scan(&tree);
        let platform = Reconciler::new(layout.clone()).reconcile(&scan, &DiskProbe);

        let report = ClasspathReport {
            project_root: root,
            classpath_file: project.classpath_file(),
            external_entries: external.len(),
            platform_entries: platform.len(),
        };

        let descriptor =
            ClasspathAssembler::new(self.config.runtime_container()).assemble(external, platform);
        descriptor.write(&report.classpath_file)?;
        info!(
            "Wrote {} classpath entries to {:?}",
            descriptor.entries.len(),
            report.classpath_file
        );

        Ok(report)
    }
}
