//! Resolved build configuration handed to the bundler.

mod plugin;
mod types;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use plugin::{COMPILER_PLUGIN, CompilerPluginOptions, PluginConfig};
pub use types::{OutputFormat, SourceMapMode};

use crate::error::{ConfigError, Result};

/// Fully resolved build configuration.
///
/// Every path is absolute. Built once by [`ConfigBuilder`](crate::ConfigBuilder)
/// and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildConfig {
    /// Module or project to build
    pub entry_path: PathBuf,

    /// Where the bundle is written
    pub output_path: PathBuf,

    /// Module wrapping convention
    pub format: OutputFormat,

    /// Global identifier for `iife` and `umd` bundles
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_name: Option<String>,

    #[serde(default)]
    pub source_map: SourceMapMode,

    /// Plugin records in pipeline order
    #[serde(default)]
    pub plugins: Vec<PluginConfig>,
}

impl BuildConfig {
    /// The global name, if the format actually uses one.
    ///
    /// # Example
    ///
    /// ```
    /// use rollrig_config::{BuildConfig, OutputFormat, SourceMapMode};
    ///
    /// let config = BuildConfig {
    ///     entry_path: "/app/main.js".into(),
    ///     output_path: "/app/dist/bundle.js".into(),
    ///     format: OutputFormat::Cjs,
    ///     global_name: Some("App".into()),
    ///     source_map: SourceMapMode::None,
    ///     plugins: vec![],
    /// };
    /// assert_eq!(config.effective_global_name(), None);
    /// ```
    pub fn effective_global_name(&self) -> Option<&str> {
        if self.format.uses_global_name() {
            self.global_name.as_deref()
        } else {
            None
        }
    }

    /// Options of the first compiler plugin, if one is configured
    pub fn compiler_options(&self) -> Option<&CompilerPluginOptions> {
        self.plugins.iter().find_map(PluginConfig::as_compiler)
    }

    /// Convert to serde_json::Value, the shape the bundler receives
    pub fn to_value(&self) -> Result<Value> {
        serde_json::to_value(self).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            hint: Some(e.to_string()),
        })
    }
}
