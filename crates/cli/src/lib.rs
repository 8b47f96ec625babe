mod build_classpath;
mod clean;
mod deploy;
mod package;

use clap::{Args, Parser, Subcommand};
use epb_core::BuilderConfig;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "eclipse-plugin-builders",
    version,
    about = "Build Eclipse plugins whose third-party dependencies are managed by Maven",
    long_about = "Resolves the classpath of an Eclipse plugin project against a pre-installed \
                  target platform (Eclipse or Capella), writes its `.classpath`, and packages \
                  and deploys the plugin into the platform's `dropins` directory."
)]
pub struct Cli {
    #[command(flatten)]
    pub options: GlobalOptions,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug, Default)]
pub struct GlobalOptions {
    /// Plugin project directory. Defaults to the current directory.
    #[arg(long, global = true, value_name = "DIR")]
    pub project_dir: Option<PathBuf>,

    /// JSON file overriding the builder configuration
    #[arg(long, global = true, value_name = "JSON")]
    pub config: Option<PathBuf>,

    /// Install prefix of the target platform; `lib` entries below it are not staged
    #[arg(long, global = true, value_name = "PATH")]
    pub platform_prefix: Option<String>,

    /// Execution environment of the JRE container, e.g. `JavaSE-17`
    #[arg(long, global = true, value_name = "NAME")]
    pub execution_environment: Option<String>,

    /// Log at debug level and mirror logs to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl GlobalOptions {
    /// Defaults, then the `--config` file, then individual flags.
    pub fn load_config(&self) -> epb_core::Result<BuilderConfig> {
        let mut config = match &self.config {
            Some(path) => BuilderConfig::load(path)?,
            None => BuilderConfig::default(),
        };
        if let Some(prefix) = &self.platform_prefix {
            config.platform_prefix = prefix.clone();
        }
        if let Some(environment) = &self.execution_environment {
            config.execution_environment = environment.clone();
        }
        Ok(config)
    }

    pub fn project_dir(&self) -> std::io::Result<PathBuf> {
        match &self.project_dir {
            Some(dir) => Ok(dir.clone()),
            None => std::env::current_dir(),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve the project's classpath against a target platform
    #[command(
        long_about = "Locates the plugin project containing PROJECT_FILE, asks Maven for its \
                      third-party dependencies, pairs the target platform's binary and source \
                      archives, and overwrites the project's `.classpath`."
    )]
    BuildClasspath {
        /// Any file or directory inside the plugin project
        #[arg(value_name = "PROJECT_FILE")]
        project_file: PathBuf,

        /// Root of the Eclipse/Capella installation
        #[arg(value_name = "TARGET_PLATFORM_DIR")]
        target_platform: PathBuf,
    },
    /// Copy the packaged plugin into the target platform's `dropins` directory
    Deploy {
        /// Root of the Eclipse/Capella installation
        #[arg(value_name = "TARGET_PLATFORM_DIR")]
        target_platform: PathBuf,
    },
    /// Stage libraries, patch the manifest and build the plugin jar
    Package,
    /// Remove the packaged jar and staged libraries
    Clean,
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let _guard = epb_runtime::init_logging("cli", cli.options.verbose);

    let config = cli.options.load_config()?;
    let builder = epb_runtime::build_default_builder(config);

    match cli.command {
        Commands::BuildClasspath {
            project_file,
            target_platform,
        } => build_classpath::run(&builder, &project_file, &target_platform),
        Commands::Deploy { target_platform } => {
            deploy::run(&builder, &cli.options.project_dir()?, &target_platform)
        }
        Commands::Package => package::run(&builder, &cli.options.project_dir()?),
        Commands::Clean => clean::run(&builder, &cli.options.project_dir()?),
    }
}
