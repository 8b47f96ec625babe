pub mod error;
pub mod logging;

pub mod assemble;
pub mod config;
pub mod filter;
pub mod manifest;
pub mod model;
pub mod project;
pub mod target;
pub mod tool;
pub mod workflow;

pub use config::{BuilderConfig, Layout};
pub use error::{BuildError, Result};
pub use workflow::PluginBuilder;
