//! File-based config discovery and loading
//!
//! A config file is layered with `ROLLRIG_*` environment overrides through
//! figment, then resolved against the file's own directory.
//! Priority: environment > file

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format as _, Json, Serialized, Toml};
use serde_json::Value;
use tracing::{debug, info};

use crate::builder::ConfigBuilder;
use crate::bundle::BuildConfig;
use crate::error::{ConfigError, Result};
use crate::raw::RawConfig;

pub const JSON_CONFIG: &str = "rollrig.config.json";
pub const TOML_CONFIG: &str = "rollrig.toml";
pub const PACKAGE_JSON: &str = "package.json";

/// `package.json` field holding the config
pub const PACKAGE_FIELD: &str = "rollrig";

/// Prefix of environment overrides (`ROLLRIG_FORMAT=umd`, `ROLLRIG_DEST=...`)
pub const ENV_PREFIX: &str = "ROLLRIG_";

const ENV_KEYS: [&str; 4] = ["entry", "dest", "format", "module_name"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SourceKind {
    Json,
    Toml,
    PackageJson,
}

impl SourceKind {
    fn of(path: &Path) -> Result<Self> {
        if path.file_name().is_some_and(|name| name == PACKAGE_JSON) {
            return Ok(SourceKind::PackageJson);
        }

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(SourceKind::Json),
            Some("toml") => Ok(SourceKind::Toml),
            _ => Err(ConfigError::InvalidValue {
                field: "config".to_string(),
                hint: Some(format!(
                    "unsupported config file '{}'; use .json or .toml",
                    path.display()
                )),
            }),
        }
    }
}

/// File-based configuration discovery
///
/// # Example
///
/// ```no_run
/// use rollrig_config::ConfigDiscovery;
///
/// let config = ConfigDiscovery::new("demo").load().unwrap();
/// println!("bundling {}", config.entry_path.display());
/// ```
pub struct ConfigDiscovery {
    root: PathBuf,
}

impl ConfigDiscovery {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Find a config file in the root directory
    ///
    /// Searches in this order:
    /// 1. rollrig.config.json
    /// 2. rollrig.toml
    /// 3. package.json (rollrig field)
    pub fn find(&self) -> Option<PathBuf> {
        [JSON_CONFIG, TOML_CONFIG]
            .into_iter()
            .map(|name| self.root.join(name))
            .find(|path| path.is_file())
            .or_else(|| {
                let pkg_path = self.root.join(PACKAGE_JSON);
                has_package_field(&pkg_path).then_some(pkg_path)
            })
    }

    /// Load and resolve the discovered config
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if no config file is found.
    pub fn load(&self) -> Result<BuildConfig> {
        let path = self.find().ok_or(ConfigError::NotFound)?;
        load_build_config(path)
    }
}

/// Load the literal record from a config file, with environment overrides.
pub fn load_raw_config(path: impl AsRef<Path>) -> Result<RawConfig> {
    let path = absolute(path.as_ref())?;
    if !path.is_file() {
        return Err(ConfigError::NotFound);
    }

    let figment = match SourceKind::of(&path)? {
        SourceKind::Json => Figment::from(Json::file(&path)),
        SourceKind::Toml => Figment::from(Toml::file(&path)),
        SourceKind::PackageJson => {
            if !has_package_field(&path) {
                return Err(ConfigError::InvalidValue {
                    field: PACKAGE_FIELD.to_string(),
                    hint: Some(format!("Add a '{PACKAGE_FIELD}' field to your package.json")),
                });
            }
            Figment::from(Json::file(&path)).focus(PACKAGE_FIELD)
        }
    };

    let raw: RawConfig = figment.merge(env_overrides()).extract()?;
    debug!(path = %path.display(), plugins = raw.plugins.len(), "read config record");
    Ok(raw)
}

/// Load a config file and resolve it against the file's directory
///
/// # Example
///
/// ```no_run
/// use rollrig_config::load_build_config;
///
/// let config = load_build_config("demo/rollrig.config.json").unwrap();
/// ```
pub fn load_build_config(path: impl AsRef<Path>) -> Result<BuildConfig> {
    let path = absolute(path.as_ref())?;
    let raw = load_raw_config(&path)?;

    let base_dir = path.parent().ok_or_else(|| ConfigError::PathResolution {
        path: path.clone(),
        reason: "config file has no parent directory".to_string(),
    })?;

    let config = ConfigBuilder::new(base_dir).build(&raw)?;
    info!(
        config = %path.display(),
        entry = %config.entry_path.display(),
        format = %config.format,
        "loaded build config"
    );
    Ok(config)
}

/// Discover and load config from the current directory (convenience function)
pub fn discover() -> Result<BuildConfig> {
    let root = std::env::current_dir()?;
    ConfigDiscovery::new(root).load()
}

fn env_overrides() -> Serialized<BTreeMap<String, String>> {
    // Values stay raw strings, so `ROLLRIG_ENTRY=123` is a path and not a number
    let overrides = Env::prefixed(ENV_PREFIX)
        .only(&ENV_KEYS)
        .iter()
        .map(|(key, value)| {
            let field = match key.as_str() {
                "module_name" => "moduleName".to_string(),
                other => other.to_string(),
            };
            (field, value)
        })
        .collect();

    Serialized::defaults(overrides)
}

fn absolute(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(std::env::current_dir()?.join(path))
    }
}

fn has_package_field(path: &Path) -> bool {
    fs::read_to_string(path)
        .ok()
        .and_then(|content| serde_json::from_str::<Value>(&content).ok())
        .is_some_and(|parsed| parsed.get(PACKAGE_FIELD).is_some_and(|v| !v.is_null()))
}
