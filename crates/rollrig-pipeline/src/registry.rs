//! Plugin registry keyed by plugin name.

use std::sync::Arc;

use indexmap::IndexMap;

use crate::error::{PipelineError, Result};
use crate::plugin::Plugin;

/// Available plugins, in registration order
#[derive(Default)]
pub struct PluginRegistry {
    plugins: IndexMap<String, Arc<dyn Plugin>>,
}

impl PluginRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a plugin under its own name
    ///
    /// Fails with [`PipelineError::DuplicatePlugin`] if the name is taken.
    pub fn register<P: Plugin + 'static>(&mut self, plugin: P) -> Result<()> {
        self.register_shared(Arc::new(plugin))
    }

    /// Register a plugin that is shared with other registries
    pub fn register_shared(&mut self, plugin: Arc<dyn Plugin>) -> Result<()> {
        let name = plugin.name().to_string();
        if self.plugins.contains_key(&name) {
            return Err(PipelineError::DuplicatePlugin { name });
        }

        self.plugins.insert(name, plugin);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn Plugin>> {
        self.plugins.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.plugins.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }
}

impl std::fmt::Debug for PluginRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginRegistry")
            .field("plugins", &self.plugins.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plugin::TransformStage;
    use rollrig_config::PluginConfig;

    struct Named(&'static str);

    impl Plugin for Named {
        fn name(&self) -> &str {
            self.0
        }

        fn configure(&self, _config: &PluginConfig) -> Result<Box<dyn TransformStage>> {
            Err(PipelineError::Configure {
                plugin: self.0.to_string(),
                message: "not used".to_string(),
            })
        }
    }

    #[test]
    fn keeps_registration_order() {
        let mut registry = PluginRegistry::new();
        registry.register(Named("replace")).unwrap();
        registry.register(Named("fable")).unwrap();
        registry.register(Named("uglify")).unwrap();

        assert_eq!(registry.len(), 3);
        assert_eq!(
            registry.names().collect::<Vec<_>>(),
            vec!["replace", "fable", "uglify"]
        );
        assert!(registry.get("fable").is_some());
        assert!(registry.get("babel").is_none());
    }

    #[test]
    fn rejects_duplicate_names() {
        let mut registry = PluginRegistry::new();
        registry.register(Named("fable")).unwrap();

        let err = registry.register(Named("fable")).unwrap_err();
        assert!(matches!(err, PipelineError::DuplicatePlugin { ref name } if name == "fable"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn empty_registry() {
        let registry = PluginRegistry::default();
        assert!(registry.is_empty());
        assert_eq!(format!("{registry:?}"), "PluginRegistry { plugins: [] }");
    }
}
