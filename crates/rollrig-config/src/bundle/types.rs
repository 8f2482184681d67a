use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Module wrapping convention of the generated bundle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Asynchronous Module Definition (`define([...], factory)`)
    Amd,
    /// CommonJS (`module.exports`)
    Cjs,
    /// ES module
    Es,
    /// Immediately-invoked function expression assigned to a global
    Iife,
    /// Universal Module Definition (AMD, CommonJS and global)
    Umd,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 5] = [
        OutputFormat::Amd,
        OutputFormat::Cjs,
        OutputFormat::Es,
        OutputFormat::Iife,
        OutputFormat::Umd,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Amd => "amd",
            OutputFormat::Cjs => "cjs",
            OutputFormat::Es => "es",
            OutputFormat::Iife => "iife",
            OutputFormat::Umd => "umd",
        }
    }

    /// Whether the format exposes the bundle on a global object
    pub fn uses_global_name(&self) -> bool {
        matches!(self, OutputFormat::Iife | OutputFormat::Umd)
    }
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OutputFormat::ALL
            .into_iter()
            .find(|format| format.as_str() == s)
            .ok_or_else(|| ConfigError::UnrecognizedFormat(s.to_string()))
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Source map generation mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SourceMapMode {
    /// No source maps
    #[default]
    None,
    /// External `.map` file next to the bundle
    External,
    /// Inline base64 data URL
    Inline,
    /// External `.map` file without the `sourceMappingURL` comment
    Hidden,
}

impl FromStr for SourceMapMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(SourceMapMode::None),
            "external" => Ok(SourceMapMode::External),
            "inline" => Ok(SourceMapMode::Inline),
            "hidden" => Ok(SourceMapMode::Hidden),
            other => Err(ConfigError::InvalidValue {
                field: "sourceMap".to_string(),
                hint: Some(format!(
                    "'{other}' is not a source map mode; use true, false, 'inline' or 'hidden'"
                )),
            }),
        }
    }
}
