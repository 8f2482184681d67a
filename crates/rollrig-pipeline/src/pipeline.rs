//! Ordered transform stages built from a config's plugin records.

use rollrig_config::BuildConfig;
use tracing::debug;

use crate::error::{PipelineError, Result};
use crate::plugin::TransformStage;
use crate::registry::PluginRegistry;

/// Transform stages in the order their plugin records appear in the config
pub struct Pipeline {
    stages: Vec<Box<dyn TransformStage>>,
}

impl Pipeline {
    /// Configure one stage per plugin record.
    ///
    /// # Errors
    ///
    /// - [`PipelineError::UnknownPlugin`] when a record names no registered plugin
    /// - whatever the plugin's `configure` returns for options it rejects
    pub fn assemble(config: &BuildConfig, registry: &PluginRegistry) -> Result<Self> {
        let stages = config
            .plugins
            .iter()
            .map(|record| {
                let plugin =
                    registry
                        .get(record.name())
                        .ok_or_else(|| PipelineError::UnknownPlugin {
                            name: record.name().to_string(),
                        })?;
                let stage = plugin.configure(record)?;
                debug!(plugin = record.name(), stage = stage.name(), "configured stage");
                Ok(stage)
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { stages })
    }

    pub fn from_stages(stages: Vec<Box<dyn TransformStage>>) -> Self {
        Self { stages }
    }

    pub fn stages(&self) -> &[Box<dyn TransformStage>] {
        &self.stages
    }

    pub fn stage_names(&self) -> Vec<&str> {
        self.stages.iter().map(|stage| stage.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Run a module through every stage in order
    pub fn transform(&self, module_id: &str, code: &str) -> Result<String> {
        let mut current = code.to_string();
        for stage in &self.stages {
            if let Some(next) = stage.transform(module_id, &current)? {
                current = next;
            }
        }
        Ok(current)
    }
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("stages", &self.stage_names())
            .finish()
    }
}
