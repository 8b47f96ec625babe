use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("{what} `{}` not found", .path.display())]
    NotFound { what: &'static str, path: PathBuf },
    #[error("Output directory `{}` is empty.", .0.display())]
    EmptyOutput(PathBuf),
    #[error("`{tool}` failed ({status}): {output}")]
    ExternalTool {
        tool: String,
        status: String,
        output: String,
    },
    #[error(
        "Could not find a project directory containing a `.project` and a `pom.xml` file above `{}`",
        .0.display()
    )]
    ProjectRootNotFound(PathBuf),
    #[error("Missing input: {0}")]
    MissingInput(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("XML error in `{}`: {message}", .path.display())]
    Xml { path: PathBuf, message: String },
    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),
}

impl BuildError {
    pub fn not_found(what: &'static str, path: impl Into<PathBuf>) -> Self {
        BuildError::NotFound {
            what,
            path: path.into(),
        }
    }

    pub fn xml(path: impl Into<PathBuf>, err: impl std::fmt::Display) -> Self {
        BuildError::Xml {
            path: path.into(),
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, BuildError>;
