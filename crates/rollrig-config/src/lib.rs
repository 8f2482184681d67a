//! Typed build configuration for rollrig.
//!
//! A bundler config file is a loose record (`entry`, `dest`, `format`,
//! `moduleName`, `plugins`). This crate parses that record into [`RawConfig`],
//! resolves every relative path against the directory the config came from,
//! and produces an immutable [`BuildConfig`] ready to hand to a bundler.
//!
//! # Example
//!
//! ```
//! use rollrig_config::{ConfigBuilder, OutputFormat, RawConfig};
//! use serde_json::json;
//! use std::path::Path;
//!
//! let raw = RawConfig::from_value(json!({
//!     "entry": "../App.proj",
//!     "dest": "./out/bundle.js",
//!     "format": "iife",
//!     "moduleName": "Fable"
//! }))
//! .unwrap();
//!
//! let config = ConfigBuilder::new("/proj/demo").build(&raw).unwrap();
//! assert_eq!(config.entry_path, Path::new("/proj/App.proj"));
//! assert_eq!(config.format, OutputFormat::Iife);
//! ```

pub mod builder;
pub mod bundle;
pub mod discovery;
pub mod error;
pub mod raw;
pub mod resolve;
pub mod validation;

pub use builder::ConfigBuilder;
pub use bundle::*;
pub use error::*;
pub use raw::{RawConfig, RawPlugin, RawSourceMap};
pub use resolve::resolve_path;

pub use discovery::{ConfigDiscovery, discover, load_build_config};
pub use validation::{
    ConfigValidator, FsValidator, SchemaValidator, validate_fs, validate_global_name,
    validate_schema,
};
