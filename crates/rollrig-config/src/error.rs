//! Error types for configuration resolution, validation and loading.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    // Resolution errors
    #[error("cannot resolve path '{}': {reason}", .path.display())]
    #[diagnostic(
        code(rollrig::config::path_resolution),
        help("Paths are resolved against the directory containing the config file")
    )]
    PathResolution { path: PathBuf, reason: String },

    #[error("unrecognized output format '{0}'")]
    #[diagnostic(
        code(rollrig::config::unrecognized_format),
        help("Use one of: amd, cjs, es, iife, umd")
    )]
    UnrecognizedFormat(String),

    // Schema errors
    #[error("missing required field '{field}'")]
    #[diagnostic(code(rollrig::config::missing_field))]
    MissingField {
        field: String,
        #[help]
        hint: Option<String>,
    },

    #[error("invalid value for '{field}'")]
    #[diagnostic(code(rollrig::config::invalid_value))]
    InvalidValue {
        field: String,
        #[help]
        hint: Option<String>,
    },

    #[error("schema validation failed: {message}")]
    #[diagnostic(code(rollrig::config::schema))]
    SchemaValidation {
        message: String,
        #[help]
        hint: Option<String>,
    },

    // Filesystem validation errors
    #[error("entry path not found: {}", .0.display())]
    #[diagnostic(code(rollrig::config::entry_not_found))]
    EntryNotFound(PathBuf),

    #[error("compiler core path not found: {}", .0.display())]
    #[diagnostic(code(rollrig::config::core_not_found))]
    CoreNotFound(PathBuf),

    // Loading errors
    #[error("config not found")]
    #[diagnostic(
        code(rollrig::config::not_found),
        help("Create rollrig.config.json, rollrig.toml, or add a 'rollrig' field to package.json")
    )]
    NotFound,

    #[error("failed to load config: {0}")]
    #[diagnostic(code(rollrig::config::load))]
    Load(String),

    #[error("I/O error: {0}")]
    #[diagnostic(code(rollrig::config::io))]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        ConfigError::Load(err.to_string())
    }
}
