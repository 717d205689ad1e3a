use ecamap_api::MetadataError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EcaError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Metadata error: {0}")]
    Metadata(#[from] MetadataError),
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, EcaError>;
