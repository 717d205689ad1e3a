use crate::error::MetadataResult;
use crate::metadata::ModuleMetadata;
use std::path::Path;

/// Turns a compiled artifact on disk into introspectable module metadata.
pub trait ModuleLoader {
    /// Check if this loader can handle the artifact
    fn can_load(&self, _artifact: &Path) -> bool {
        true
    }

    /// Load the artifact. Failures here are fatal for the caller.
    fn load(&self, artifact: &Path) -> MetadataResult<Box<dyn ModuleMetadata>>;
}
