use epb_core::PluginBuilder;
use std::path::Path;

pub fn run(builder: &PluginBuilder, project_dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    println!("Cleaning build artifacts...");
    let removed = builder.clean(project_dir)?;

    if removed.is_empty() {
        println!("Nothing to clean.");
    }
    for path in removed {
        println!("Removed `{}`.", path.display());
    }
    Ok(())
}
