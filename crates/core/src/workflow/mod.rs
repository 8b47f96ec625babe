//! The plugin workflows: `build-classpath`, `package`, `deploy`, `clean`.
//!
//! Every workflow takes the project directory explicitly; nothing here
//! changes the process working directory.

mod classpath;
mod clean;
mod deploy;
mod package;

pub use classpath::ClasspathReport;
pub use package::PackageReport;

use crate::config::BuilderConfig;
use crate::tool::Toolchain;

pub struct PluginBuilder {
    config: BuilderConfig,
    toolchain: Toolchain,
}

impl PluginBuilder {
    pub fn new(config: BuilderConfig, toolchain: Toolchain) -> Self {
        Self { config, toolchain }
    }

    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }
}
