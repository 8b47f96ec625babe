use epb_core::tool::Toolchain;
use epb_core::{BuilderConfig, PluginBuilder};
use epb_java::JarArchiver;
use epb_maven::MavenBuildTool;

/// Assembles the Maven + `jar` toolchain, honoring executables pinned in
/// `config`.
pub fn build_default_toolchain(config: &BuilderConfig) -> Toolchain {
    let build_tool = match &config.maven_executable {
        Some(executable) => MavenBuildTool::with_executable(executable.clone()),
        None => MavenBuildTool::new(),
    };
    let archiver = match &config.jar_executable {
        Some(executable) => JarArchiver::with_executable(executable),
        None => JarArchiver::new(),
    };
    tracing::debug!("Using jar tool at {:?}", archiver.executable());

    Toolchain {
        build_tool: Box::new(build_tool),
        archiver: Box::new(archiver),
    }
}

/// Bootstraps a builder wired with the default toolchain.
pub fn build_default_builder(config: BuilderConfig) -> PluginBuilder {
    let toolchain = build_default_toolchain(&config);
    PluginBuilder::new(config, toolchain)
}

/// File logging for `component`; `verbose` switches to `debug` and mirrors
/// records on stderr. Hold the result for the lifetime of the process.
pub fn init_logging(component: &str, verbose: bool) -> Option<impl Drop> {
    let level = if verbose { "debug" } else { "info" };
    Some(epb_core::logging::init_logging(component, level, verbose))
}
