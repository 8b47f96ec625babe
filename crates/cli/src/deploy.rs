use epb_core::PluginBuilder;
use std::path::Path;

pub fn run(
    builder: &PluginBuilder,
    project_dir: &Path,
    target_platform: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let deployed = builder.deploy(project_dir, target_platform)?;
    println!("Deployed `{}`.", deployed.display());
    Ok(())
}
