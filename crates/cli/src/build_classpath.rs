use epb_core::PluginBuilder;
use std::path::Path;
use tracing::info;

pub fn run(
    builder: &PluginBuilder,
    project_file: &Path,
    target_platform: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    info!(
        "Building classpath of {} against {}...",
        project_file.display(),
        target_platform.display()
    );
    let report = builder.build_classpath(project_file, target_platform)?;

    println!(
        "Created `.classpath` file in `{}` ({} Maven, {} target platform entries).",
        report.project_root.display(),
        report.external_entries,
        report.platform_entries
    );
    Ok(())
}
