use epb_core::PluginBuilder;
use std::path::Path;

pub fn run(builder: &PluginBuilder, project_dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let report = builder.package(project_dir)?;

    if !report.staged_libraries.is_empty() {
        println!("Staged {} libraries into `lib/`.", report.staged_libraries.len());
    }
    println!("Created `{}`.", report.archive.display());
    Ok(())
}
