use ecamap_api::MetadataError;
use ecamap_core::EcaError;
use ecamap_project::ProjectError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RuntimeError {
    #[error(transparent)]
    Project(#[from] ProjectError),
    #[error(transparent)]
    Eca(#[from] EcaError),
    #[error("Failed to load module {}: {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: MetadataError,
    },
    #[error("Failed to read config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RuntimeError>;
