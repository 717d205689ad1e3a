pub mod artifacts;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod walker;

pub use artifacts::ArtifactSet;
pub use config::WalkerConfig;
pub use descriptor::ProjectNode;
pub use error::{ProjectError, Result};
pub use walker::{DependencyGraphWalker, WalkReport};
