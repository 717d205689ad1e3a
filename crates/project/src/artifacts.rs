//! Artifact discovery and run-wide dedup by file name.

use crate::config::WalkerConfig;
use crate::error::{ProjectError, Result};
use indexmap::IndexMap;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// File name (case-insensitive) → first-discovered path, in discovery order.
#[derive(Debug, Default, Clone)]
pub struct ArtifactSet {
    by_name: IndexMap<String, PathBuf>,
}

impl ArtifactSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an artifact unless one with the same file name is already known.
    /// Returns whether the path was added.
    pub fn insert(&mut self, path: PathBuf) -> bool {
        let Some(name) = path.file_name().map(|n| n.to_string_lossy().to_lowercase()) else {
            return false;
        };
        if let Some(existing) = self.by_name.get(&name) {
            debug!(
                "Dropping duplicate artifact {} (already have {})",
                path.display(),
                existing.display()
            );
            return false;
        }
        self.by_name.insert(name, path);
        true
    }

    pub fn contains(&self, file_name: &str) -> bool {
        self.by_name.contains_key(&file_name.to_lowercase())
    }

    pub fn get(&self, file_name: &str) -> Option<&Path> {
        self.by_name
            .get(&file_name.to_lowercase())
            .map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.by_name.values().map(PathBuf::as_path)
    }

    pub fn into_paths(self) -> Vec<PathBuf> {
        self.by_name.into_values().collect()
    }
}

pub fn is_artifact(path: &Path, config: &WalkerConfig) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| config.is_artifact_extension(ext))
}

/// Recursively collect artifacts from each configured output directory of
/// a project. Missing directories contribute nothing.
pub fn scan_output_dirs(project_dir: &Path, config: &WalkerConfig) -> Vec<PathBuf> {
    let mut found = Vec::new();
    for dir in &config.output_dirs {
        let root = project_dir.join(dir);
        if !root.is_dir() {
            debug!("No output directory at {}", root.display());
            continue;
        }
        found.extend(
            WalkDir::new(&root)
                .sort_by_file_name()
                .into_iter()
                .filter_map(|e| e.ok())
                .filter(|e| e.file_type().is_file() && is_artifact(e.path(), config))
                .map(|e| e.into_path()),
        );
    }
    found
}

/// Artifacts directly inside `dir` (not recursive), sorted by file name.
/// Unlike project output directories, `dir` must exist.
pub fn list_artifacts(dir: &Path, config: &WalkerConfig) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(ProjectError::MissingDirectory(dir.to_path_buf()));
    }
    let mut found = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = entry.map_err(|e| ProjectError::Io(e.into()))?;
        if entry.file_type().is_file() && is_artifact(entry.path(), config) {
            found.push(entry.into_path());
        }
    }
    Ok(found)
}
