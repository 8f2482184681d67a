//! The literal config record as authored in a project's build-config file.
//!
//! Nothing here is resolved or validated beyond its shape. Paths are kept as
//! written and `format` is still a string, so a misspelled value surfaces as
//! [`ConfigError::UnrecognizedFormat`] from the builder rather than as an
//! opaque deserialisation error.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ConfigError, Result as ConfigResult};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RawConfig {
    /// Module or project to build, relative to the config file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry: Option<String>,

    /// Bundle output file, relative to the config file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dest: Option<String>,

    /// Output format (amd, cjs, es, iife, umd)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Global variable name for iife/umd bundles
    #[schemars(regex(pattern = r"^[a-zA-Z_$][a-zA-Z0-9_$]*(\.[a-zA-Z_$][a-zA-Z0-9_$]*)*$"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module_name: Option<String>,

    /// Source map mode: true, false, "inline" or "hidden"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_map: Option<RawSourceMap>,

    /// Plugins in pipeline order
    #[serde(default)]
    pub plugins: Vec<RawPlugin>,
}

/// `sourceMap` accepts either a flag or a mode name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum RawSourceMap {
    Flag(bool),
    Mode(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RawPlugin {
    /// Plugin name; `fable` selects the compiler plugin
    pub name: String,

    /// Plugin-specific options record
    #[serde(default)]
    pub options: Value,
}

/// Options record of the compiler plugin, as written
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawCompilerOptions {
    #[serde(default)]
    pub fable_core: Option<String>,

    #[serde(default)]
    pub define: Vec<String>,

    #[serde(default)]
    pub plugins: Vec<String>,

    #[serde(default)]
    pub babel: Option<Value>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl RawConfig {
    /// Create from serde_json::Value (for programmatic config)
    ///
    /// # Example
    ///
    /// ```
    /// use rollrig_config::RawConfig;
    /// use serde_json::json;
    ///
    /// let raw = RawConfig::from_value(json!({
    ///     "entry": "src/main.js",
    ///     "dest": "dist/bundle.js",
    ///     "format": "cjs"
    /// }))
    /// .unwrap();
    /// assert_eq!(raw.format.as_deref(), Some("cjs"));
    /// ```
    pub fn from_value(value: Value) -> ConfigResult<Self> {
        serde_json::from_value(value).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            hint: Some(e.to_string()),
        })
    }

    /// Convert to serde_json::Value
    pub fn to_value(&self) -> ConfigResult<Value> {
        serde_json::to_value(self).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            hint: Some(e.to_string()),
        })
    }

    /// JSON Schema for the config file
    pub fn json_schema() -> Value {
        let schema = schemars::schema_for!(RawConfig);
        schema.to_value()
    }
}

impl RawCompilerOptions {
    pub(crate) fn from_value(value: &Value) -> ConfigResult<Self> {
        if value.is_null() {
            return Ok(Self::default());
        }

        serde_json::from_value(value.clone()).map_err(|e| ConfigError::InvalidValue {
            field: "plugins.options".to_string(),
            hint: Some(format!("compiler plugin options: {e}")),
        })
    }
}
