//! Plugin pipeline assembly for rollrig build configs.
//!
//! A [`BuildConfig`](rollrig_config::BuildConfig) lists plugin records in
//! order. Each record is matched by name against a [`PluginRegistry`], the
//! plugin turns its options into a [`TransformStage`], and the resulting
//! [`Pipeline`] is handed to a [`Bundler`] together with the config.
//!
//! The bundler and the plugins are supplied by the host; this crate only
//! wires them together.

pub mod bundler;
pub mod error;
pub mod pipeline;
pub mod plugin;
pub mod registry;

#[cfg(feature = "logging")]
pub mod logging;

pub use bundler::{Bundler, invoke};
pub use error::{PipelineError, Result};
pub use pipeline::Pipeline;
pub use plugin::{Plugin, TransformStage};
pub use registry::PluginRegistry;

#[cfg(feature = "logging")]
pub use logging::{Verbosity, init_logging, init_logging_from_env};
