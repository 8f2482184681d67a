use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Plugin name that selects the compiler plugin's typed options
pub const COMPILER_PLUGIN: &str = "fable";

/// A resolved plugin record, in pipeline order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PluginConfig {
    /// The compiler plugin, with typed and path-resolved options
    Compiler(CompilerPluginOptions),

    /// Any other plugin; options are forwarded verbatim
    External { name: String, options: Value },
}

impl PluginConfig {
    pub fn name(&self) -> &str {
        match self {
            PluginConfig::Compiler(_) => COMPILER_PLUGIN,
            PluginConfig::External { name, .. } => name,
        }
    }

    pub fn as_compiler(&self) -> Option<&CompilerPluginOptions> {
        match self {
            PluginConfig::Compiler(options) => Some(options),
            PluginConfig::External { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompilerPluginOptions {
    /// Absolute path to the compiler's runtime support library
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub core_path: Option<PathBuf>,

    /// Conditional-compilation symbols, in input order and never deduplicated
    #[serde(default)]
    pub defines: Vec<String>,

    /// Compiler plugins, resolved to absolute paths
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub plugins: Vec<PathBuf>,

    /// Babel options handed to the compiler untouched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub babel: Option<Value>,

    /// Unrecognised option keys, kept as given
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub extra: Map<String, Value>,
}
