//! Hand-off to the external bundler.

use rollrig_config::BuildConfig;
use tracing::info;

use crate::error::Result;
use crate::pipeline::Pipeline;
use crate::registry::PluginRegistry;

/// The external bundler entry point.
///
/// Takes the config and pipeline by value: a build config is consumed by
/// exactly one invocation. What the bundler does after accepting them is its
/// own business; `bundle` returning `Ok` only means the hand-off succeeded.
pub trait Bundler {
    fn bundle(&self, config: BuildConfig, pipeline: Pipeline) -> Result<()>;
}

/// Assemble the pipeline for `config` and hand both to `bundler`.
pub fn invoke<B: Bundler + ?Sized>(
    config: BuildConfig,
    registry: &PluginRegistry,
    bundler: &B,
) -> Result<()> {
    let pipeline = Pipeline::assemble(&config, registry)?;
    info!(
        entry = %config.entry_path.display(),
        dest = %config.output_path.display(),
        format = %config.format,
        stages = pipeline.len(),
        "handing build to bundler"
    );
    bundler.bundle(config, pipeline)
}
