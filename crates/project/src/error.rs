use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProjectError {
    #[error("Failed to read project descriptor {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse project descriptor {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },
    #[error("Artifact directory not found: {}", .0.display())]
    MissingDirectory(PathBuf),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ProjectError>;
