pub mod error;
pub mod loader;
pub mod metadata;
pub mod models;

// Re-export commonly used types
pub use error::{MetadataError, MetadataResult};
pub use loader::ModuleLoader;
pub use metadata::{MethodMetadata, ModuleMetadata, TypeMetadata};
pub use models::*;
