//! End-to-end: raw config → build config → pipeline → bundler.

use std::sync::Mutex;

use rollrig_config::{BuildConfig, ConfigBuilder, PluginConfig, RawConfig};
use rollrig_pipeline::{
    Bundler, Pipeline, PipelineError, Plugin, PluginRegistry, Result, TransformStage, invoke,
};
use serde_json::json;

/// Stands in for the compiler plugin: prefixes modules with its defines.
struct DefinesPlugin;

struct DefinesStage(Vec<String>);

impl Plugin for DefinesPlugin {
    fn name(&self) -> &str {
        "fable"
    }

    fn configure(&self, config: &PluginConfig) -> Result<Box<dyn TransformStage>> {
        let options = config.as_compiler().ok_or_else(|| PipelineError::Configure {
            plugin: "fable".to_string(),
            message: "expected compiler options".to_string(),
        })?;
        Ok(Box::new(DefinesStage(options.defines.clone())))
    }
}

impl TransformStage for DefinesStage {
    fn name(&self) -> &str {
        "fable"
    }

    fn transform(&self, _module_id: &str, code: &str) -> Result<Option<String>> {
        Ok(Some(format!("// {}\n{code}", self.0.join(" "))))
    }
}

/// Replaces `__VERSION__` with the configured value.
struct ReplacePlugin;

struct ReplaceStage(String);

impl Plugin for ReplacePlugin {
    fn name(&self) -> &str {
        "replace"
    }

    fn configure(&self, config: &PluginConfig) -> Result<Box<dyn TransformStage>> {
        let PluginConfig::External { options, .. } = config else {
            unreachable!("replace is never the compiler plugin");
        };
        let version = options["version"]
            .as_str()
            .ok_or_else(|| PipelineError::Configure {
                plugin: "replace".to_string(),
                message: "missing 'version'".to_string(),
            })?;
        Ok(Box::new(ReplaceStage(version.to_string())))
    }
}

impl TransformStage for ReplaceStage {
    fn name(&self) -> &str {
        "replace"
    }

    fn transform(&self, _module_id: &str, code: &str) -> Result<Option<String>> {
        if !code.contains("__VERSION__") {
            return Ok(None);
        }
        Ok(Some(code.replace("__VERSION__", &self.0)))
    }
}

#[derive(Default)]
struct RecordingBundler {
    received: Mutex<Option<(BuildConfig, Vec<String>, String)>>,
}

impl Bundler for RecordingBundler {
    fn bundle(&self, config: BuildConfig, pipeline: Pipeline) -> Result<()> {
        let names = pipeline.stage_names().into_iter().map(String::from).collect();
        let output = pipeline.transform("main.js", "export const v = '__VERSION__';")?;
        *self.received.lock().unwrap() = Some((config, names, output));
        Ok(())
    }
}

struct FailingBundler;

impl Bundler for FailingBundler {
    fn bundle(&self, _config: BuildConfig, _pipeline: Pipeline) -> Result<()> {
        Err(PipelineError::Bundler("output directory is read-only".to_string()))
    }
}

fn registry() -> PluginRegistry {
    let mut registry = PluginRegistry::new();
    registry.register(ReplacePlugin).unwrap();
    registry.register(DefinesPlugin).unwrap();
    registry
}

fn build(plugins: serde_json::Value) -> BuildConfig {
    let raw = RawConfig::from_value(json!({
        "entry": "../App.proj",
        "dest": "./out/bundle.js",
        "format": "iife",
        "moduleName": "Fable",
        "plugins": plugins
    }))
    .unwrap();
    ConfigBuilder::new("/proj/demo").build(&raw).unwrap()
}

#[test]
fn bundler_receives_config_and_ordered_stages() {
    let config = build(json!([
        { "name": "fable", "options": { "fableCore": "../../../build/fable-core", "define": ["TRACE", "DEBUG"] } },
        { "name": "replace", "options": { "version": "1.2.3" } }
    ]));
    let expected = config.clone();

    let bundler = RecordingBundler::default();
    invoke(config, &registry(), &bundler).unwrap();

    let (received, stages, output) = bundler.received.lock().unwrap().take().unwrap();
    assert_eq!(received, expected);
    assert_eq!(stages, vec!["fable", "replace"]);
    assert_eq!(output, "// TRACE DEBUG\nexport const v = '1.2.3';");
}

#[test]
fn stage_order_follows_config_not_registration() {
    let config = build(json!([
        { "name": "replace", "options": { "version": "2.0.0" } },
        { "name": "fable", "options": { "define": ["A", "B", "A"] } }
    ]));

    let pipeline = Pipeline::assemble(&config, &registry()).unwrap();
    assert_eq!(pipeline.stage_names(), vec!["replace", "fable"]);
    assert_eq!(
        pipeline.transform("main.js", "__VERSION__").unwrap(),
        "// A B A\n2.0.0"
    );
}

#[test]
fn unknown_plugin_fails_before_bundling() {
    let config = build(json!([{ "name": "uglify" }]));
    let bundler = RecordingBundler::default();

    let err = invoke(config, &registry(), &bundler).unwrap_err();
    assert!(matches!(err, PipelineError::UnknownPlugin { ref name } if name == "uglify"));
    assert!(bundler.received.lock().unwrap().is_none());
}

#[test]
fn plugin_configure_errors_propagate() {
    let config = build(json!([{ "name": "replace", "options": {} }]));

    let err = Pipeline::assemble(&config, &registry()).unwrap_err();
    assert!(matches!(err, PipelineError::Configure { ref plugin, .. } if plugin == "replace"));
}

#[test]
fn bundler_errors_are_returned() {
    let config = build(json!([]));
    let err = invoke(config, &registry(), &FailingBundler).unwrap_err();
    assert!(matches!(err, PipelineError::Bundler(_)));
}

#[test]
fn config_errors_convert_into_pipeline_errors() {
    let raw = RawConfig::from_value(json!({
        "entry": "main.js",
        "dest": "out.js",
        "format": "xyz"
    }))
    .unwrap();

    let run = || -> Result<()> {
        let config = ConfigBuilder::new("/app").build(&raw)?;
        invoke(config, &registry(), &RecordingBundler::default())
    };

    assert!(matches!(
        run(),
        Err(PipelineError::Config(rollrig_config::ConfigError::UnrecognizedFormat(_)))
    ));
}
