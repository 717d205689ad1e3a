//! Depth-first walk of the project reference graph.
//!
//! A project is marked visited before its references are followed, so
//! diamonds and cycles terminate with every project visited once.

use crate::artifacts::{ArtifactSet, scan_output_dirs};
use crate::config::WalkerConfig;
use crate::descriptor::{ProjectNode, absolutize, visit_key};
use crate::error::Result;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalkReport {
    /// Projects in DFS visitation order
    pub projects: Vec<PathBuf>,
    /// Deduplicated artifacts in discovery order
    pub artifacts: Vec<PathBuf>,
}

#[derive(Default)]
struct WalkState {
    visited: HashSet<String>,
    projects: Vec<PathBuf>,
    artifacts: ArtifactSet,
}

impl WalkState {
    /// Returns false if the project was already visited.
    fn mark_visited(&mut self, path: &Path) -> bool {
        self.visited.insert(visit_key(path))
    }

    fn is_visited(&self, path: &Path) -> bool {
        self.visited.contains(&visit_key(path))
    }
}

pub struct DependencyGraphWalker {
    config: WalkerConfig,
}

impl DependencyGraphWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &WalkerConfig {
        &self.config
    }

    /// Walk from `root`, returning the ordered artifact list.
    ///
    /// Any descriptor that cannot be read or parsed aborts the walk.
    pub fn walk(&self, root: &Path) -> Result<WalkReport> {
        let root = absolutize(root)?;
        let mut state = WalkState::default();
        self.visit(&root, &mut state)?;

        info!(
            "Walked {} projects from {}, found {} artifacts",
            state.projects.len(),
            root.display(),
            state.artifacts.len()
        );

        Ok(WalkReport {
            projects: state.projects,
            artifacts: state.artifacts.into_paths(),
        })
    }

    fn visit(&self, path: &Path, state: &mut WalkState) -> Result<()> {
        if !state.mark_visited(path) {
            return Ok(());
        }
        state.projects.push(path.to_path_buf());

        let directory = path.parent().unwrap_or(Path::new("/"));
        for artifact in scan_output_dirs(directory, &self.config) {
            state.artifacts.insert(artifact);
        }

        let node = ProjectNode::load(path)?;
        debug!(
            "Project {} references {} projects",
            path.display(),
            node.references.len()
        );

        for reference in &node.references {
            if !state.is_visited(reference) {
                self.visit(reference, state)?;
            }
        }
        Ok(())
    }
}
