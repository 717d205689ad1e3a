use crate::dump::JsonModule;
use ecamap_api::{MetadataError, MetadataResult, ModuleLoader, ModuleMetadata};
use std::fs;
use std::path::Path;
use tracing::info;

/// Loads artifacts whose content is a JSON metadata dump.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonModuleLoader;

impl JsonModuleLoader {
    pub fn new() -> Self {
        Self
    }

    pub fn load_module(&self, artifact: &Path) -> MetadataResult<JsonModule> {
        let text = fs::read_to_string(artifact).map_err(|source| MetadataError::Io {
            path: artifact.to_path_buf(),
            source,
        })?;
        let module = JsonModule::parse(artifact, &text)?;
        info!(
            "Loaded module {} (version {}) from {}",
            module.name(),
            module.version().unwrap_or("unknown"),
            artifact.display()
        );
        Ok(module)
    }
}

impl ModuleLoader for JsonModuleLoader {
    fn load(&self, artifact: &Path) -> MetadataResult<Box<dyn ModuleMetadata>> {
        Ok(Box::new(self.load_module(artifact)?))
    }
}
