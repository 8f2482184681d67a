//! Errors raised while assembling or running a plugin pipeline.

use miette::Diagnostic;
use rollrig_config::ConfigError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PipelineError>;

#[derive(Debug, Error, Diagnostic)]
pub enum PipelineError {
    #[error("no plugin registered under '{name}'")]
    #[diagnostic(
        code(rollrig::pipeline::unknown_plugin),
        help("Register the plugin with PluginRegistry::register before assembling")
    )]
    UnknownPlugin { name: String },

    #[error("plugin '{name}' is already registered")]
    #[diagnostic(code(rollrig::pipeline::duplicate_plugin))]
    DuplicatePlugin { name: String },

    #[error("plugin '{plugin}' rejected its options: {message}")]
    #[diagnostic(code(rollrig::pipeline::configure))]
    Configure { plugin: String, message: String },

    #[error("stage '{stage}' failed on '{module}': {message}")]
    #[diagnostic(code(rollrig::pipeline::transform))]
    Transform {
        stage: String,
        module: String,
        message: String,
    },

    #[error("bundler failed: {0}")]
    #[diagnostic(code(rollrig::pipeline::bundler))]
    Bundler(String),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),
}
