use crate::error::{Result, RuntimeError};
use ecamap_core::{EmitConfig, ScanConfig};
use ecamap_project::WalkerConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Everything tunable about a run, loadable from one JSON file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EcamapConfig {
    pub scan: ScanConfig,
    pub emit: EmitConfig,
    pub walker: WalkerConfig,
}

impl EcamapConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| RuntimeError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&text)?)
    }
}
