//! Capability traits for plugins and the transform stages they produce.

use rollrig_config::PluginConfig;

use crate::error::Result;

/// A transform stage pluggable into a build pipeline.
///
/// The bundler calls [`transform`](TransformStage::transform) for each module
/// it loads. Returning `Ok(None)` leaves the module untouched.
pub trait TransformStage: Send + Sync {
    fn name(&self) -> &str;

    fn transform(&self, module_id: &str, code: &str) -> Result<Option<String>>;
}

/// A plugin: configured with its own options record, yields a transform stage.
///
/// Plugins are looked up by [`name`](Plugin::name), which must match the
/// `name` of the plugin record in the config (`fable` for the compiler plugin).
///
/// # Example
///
/// ```
/// use rollrig_config::PluginConfig;
/// use rollrig_pipeline::{Plugin, Result, TransformStage};
///
/// struct Banner;
///
/// struct BannerStage(String);
///
/// impl TransformStage for BannerStage {
///     fn name(&self) -> &str {
///         "banner"
///     }
///
///     fn transform(&self, _module_id: &str, code: &str) -> Result<Option<String>> {
///         Ok(Some(format!("{}\n{code}", self.0)))
///     }
/// }
///
/// impl Plugin for Banner {
///     fn name(&self) -> &str {
///         "banner"
///     }
///
///     fn configure(&self, config: &PluginConfig) -> Result<Box<dyn TransformStage>> {
///         let text = match config {
///             PluginConfig::External { options, .. } => {
///                 options["text"].as_str().unwrap_or("/* built */").to_string()
///             }
///             PluginConfig::Compiler(_) => "/* built */".to_string(),
///         };
///         Ok(Box::new(BannerStage(text)))
///     }
/// }
/// ```
pub trait Plugin: Send + Sync {
    fn name(&self) -> &str;

    fn configure(&self, config: &PluginConfig) -> Result<Box<dyn TransformStage>>;
}
