//! Turns a [`RawConfig`] into a resolved [`BuildConfig`].

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::bundle::{
    BuildConfig, COMPILER_PLUGIN, CompilerPluginOptions, OutputFormat, PluginConfig,
    SourceMapMode,
};
use crate::error::{ConfigError, Result};
use crate::raw::{RawCompilerOptions, RawConfig, RawPlugin, RawSourceMap};
use crate::resolve::resolve_path;
use crate::validation::{ConfigValidator, SchemaValidator};

/// Resolves config records against the directory they were authored in.
///
/// `build` is a pure function of the base directory and the record: no
/// filesystem access, and identical inputs always give equal outputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigBuilder {
    base_dir: PathBuf,
}

impl ConfigBuilder {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Resolve a path relative to the base directory
    pub fn resolve(&self, relative: impl AsRef<Path>) -> Result<PathBuf> {
        let resolved = resolve_path(&self.base_dir, relative.as_ref())?;
        debug!(
            from = %relative.as_ref().display(),
            to = %resolved.display(),
            "resolved path"
        );
        Ok(resolved)
    }

    /// Build a resolved config.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::MissingField`] when `entry`, `dest` or `format` is absent
    /// - [`ConfigError::UnrecognizedFormat`] for a `format` outside amd/cjs/es/iife/umd
    /// - [`ConfigError::PathResolution`] when a path cannot be resolved
    /// - [`ConfigError::SchemaValidation`] when [`SchemaValidator`] rejects the result
    pub fn build(&self, raw: &RawConfig) -> Result<BuildConfig> {
        let format: OutputFormat = required(
            &raw.format,
            "format",
            "Set format to one of: amd, cjs, es, iife, umd",
        )?
        .parse()?;

        let entry = required(
            &raw.entry,
            "entry",
            "Point entry at the module or project to build",
        )?;
        let dest = required(&raw.dest, "dest", "Set dest to the bundle output file")?;

        if raw.module_name.is_some() && !format.uses_global_name() {
            warn!(format = %format, "moduleName is ignored for this format");
        }

        let plugins = raw
            .plugins
            .iter()
            .map(|plugin| self.build_plugin(plugin))
            .collect::<Result<Vec<_>>>()?;

        let config = BuildConfig {
            entry_path: self.resolve(entry)?,
            output_path: self.resolve(dest)?,
            format,
            global_name: raw.module_name.clone(),
            source_map: source_map_mode(raw.source_map.as_ref())?,
            plugins,
        };

        SchemaValidator.validate(&config)?;
        Ok(config)
    }

    fn build_plugin(&self, plugin: &RawPlugin) -> Result<PluginConfig> {
        debug!(plugin = %plugin.name, "building plugin options");

        if plugin.name != COMPILER_PLUGIN {
            return Ok(PluginConfig::External {
                name: plugin.name.clone(),
                options: plugin.options.clone(),
            });
        }

        let raw = RawCompilerOptions::from_value(&plugin.options)?;
        let core_path = raw
            .fable_core
            .as_deref()
            .map(|core| self.resolve(core))
            .transpose()?;
        let plugins = raw
            .plugins
            .iter()
            .map(|path| self.resolve(path))
            .collect::<Result<Vec<_>>>()?;

        Ok(PluginConfig::Compiler(CompilerPluginOptions {
            core_path,
            defines: raw.define,
            plugins,
            babel: raw.babel,
            extra: raw.extra,
        }))
    }
}

fn required<'a>(value: &'a Option<String>, field: &str, hint: &str) -> Result<&'a str> {
    value.as_deref().ok_or_else(|| ConfigError::MissingField {
        field: field.to_string(),
        hint: Some(hint.to_string()),
    })
}

fn source_map_mode(raw: Option<&RawSourceMap>) -> Result<SourceMapMode> {
    match raw {
        None | Some(RawSourceMap::Flag(false)) => Ok(SourceMapMode::None),
        Some(RawSourceMap::Flag(true)) => Ok(SourceMapMode::External),
        Some(RawSourceMap::Mode(mode)) => mode.parse(),
    }
}
