//! Pluggable config validation strategies
//!
//! Separates schema validation (pure, always run by the builder) from
//! filesystem validation (opt-in, for hosts that want to fail before
//! invoking the bundler).

use std::path::{Path, PathBuf};

use crate::bundle::{BuildConfig, PluginConfig};
use crate::error::{ConfigError, Result};

/// Trait for pluggable config validation strategies
pub trait ConfigValidator {
    fn validate(&self, config: &BuildConfig) -> Result<()>;
}

/// Schema-only validation (no filesystem checks)
///
/// # Example
///
/// ```
/// use rollrig_config::{BuildConfig, ConfigValidator, OutputFormat, SchemaValidator, SourceMapMode};
///
/// let config = BuildConfig {
///     entry_path: "/app/main.js".into(),
///     output_path: "/app/dist/bundle.js".into(),
///     format: OutputFormat::Es,
///     global_name: None,
///     source_map: SourceMapMode::None,
///     plugins: vec![],
/// };
/// SchemaValidator.validate(&config).unwrap();
/// ```
pub struct SchemaValidator;

impl ConfigValidator for SchemaValidator {
    fn validate(&self, config: &BuildConfig) -> Result<()> {
        if config.entry_path == config.output_path {
            return Err(ConfigError::SchemaValidation {
                message: format!(
                    "dest '{}' would overwrite the entry",
                    config.output_path.display()
                ),
                hint: Some("Write the bundle to a different file".to_string()),
            });
        }

        match &config.global_name {
            Some(name) => validate_global_name(name)?,
            None if config.format.uses_global_name() => {
                return Err(ConfigError::MissingField {
                    field: "moduleName".to_string(),
                    hint: Some(format!(
                        "{} bundles need a global variable name",
                        config.format
                    )),
                });
            }
            None => {}
        }

        for plugin in &config.plugins {
            match plugin {
                PluginConfig::Compiler(options) => {
                    for define in &options.defines {
                        if define.is_empty() || define.chars().any(char::is_whitespace) {
                            return Err(ConfigError::SchemaValidation {
                                message: format!("invalid define symbol {define:?}"),
                                hint: Some(
                                    "Defines are single symbols such as TRACE or FX_NO_PDB_READER"
                                        .to_string(),
                                ),
                            });
                        }
                    }
                }
                PluginConfig::External { name, .. } => {
                    if name.trim().is_empty() {
                        return Err(ConfigError::SchemaValidation {
                            message: "plugin name cannot be empty".to_string(),
                            hint: Some("Give every plugin entry a name".to_string()),
                        });
                    }
                }
            }
        }

        Ok(())
    }
}

/// Validate a global name: a JavaScript identifier, optionally dotted
/// (`Fable.Repl` assigns into an existing namespace).
pub fn validate_global_name(name: &str) -> Result<()> {
    let invalid = |hint: String| ConfigError::InvalidValue {
        field: "moduleName".to_string(),
        hint: Some(hint),
    };

    if name.is_empty() {
        return Err(invalid("Global name cannot be empty".to_string()));
    }

    for segment in name.split('.') {
        let mut chars = segment.chars();
        let Some(first) = chars.next() else {
            return Err(invalid(format!("Empty segment in '{name}'")));
        };

        if !first.is_alphabetic() && first != '_' && first != '$' {
            return Err(invalid(format!(
                "Must start with letter, underscore, or dollar sign (got '{first}')"
            )));
        }

        if let Some(c) = chars.find(|c| !c.is_alphanumeric() && *c != '_' && *c != '$') {
            return Err(invalid(format!("Invalid character '{c}' in identifier")));
        }
    }

    Ok(())
}

/// Filesystem validator
///
/// Runs schema validation, then checks that the entry and the compiler core
/// path exist on disk.
pub struct FsValidator {
    root: PathBuf,
}

impl FsValidator {
    /// Relative paths in the config (if any) are checked against `root`
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

impl ConfigValidator for FsValidator {
    fn validate(&self, config: &BuildConfig) -> Result<()> {
        SchemaValidator.validate(config)?;

        let entry = self.root.join(&config.entry_path);
        if !entry.exists() {
            return Err(ConfigError::EntryNotFound(entry));
        }

        if let Some(core) = config.compiler_options().and_then(|c| c.core_path.as_ref()) {
            let core = self.root.join(core);
            if !core.exists() {
                return Err(ConfigError::CoreNotFound(core));
            }
        }

        Ok(())
    }
}

/// Convenience function for schema-only validation
pub fn validate_schema(config: &BuildConfig) -> Result<()> {
    SchemaValidator.validate(config)
}

/// Convenience function for filesystem validation
pub fn validate_fs(config: &BuildConfig, root: impl AsRef<Path>) -> Result<()> {
    FsValidator::new(root).validate(config)
}
