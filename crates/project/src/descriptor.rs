//! MSBuild-style project descriptors.
//!
//! Only `<ProjectReference Include="..."/>` elements matter here; they may
//! appear anywhere in the document.

use crate::error::{ProjectError, Result};
use roxmltree::Document;
use std::fs;
use std::path::{Component, Path, PathBuf};

const PROJECT_REFERENCE: &str = "ProjectReference";
const INCLUDE: &str = "Include";

/// A project in the reference graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectNode {
    /// Absolute, lexically normalized descriptor path
    pub path: PathBuf,
    pub directory: PathBuf,
    /// Absolute paths of referenced descriptors, in document order.
    pub references: Vec<PathBuf>,
}

impl ProjectNode {
    pub fn load(path: &Path) -> Result<Self> {
        let path = absolutize(path)?;
        let text = fs::read_to_string(&path).map_err(|source| ProjectError::Read {
            path: path.clone(),
            source,
        })?;
        Self::parse(&path, &text)
    }

    /// Parse descriptor text. `path` must already be absolute.
    pub fn parse(path: &Path, xml: &str) -> Result<Self> {
        let directory = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("/"));

        let document = Document::parse(xml.trim_start_matches('\u{feff}')).map_err(|error| {
            ProjectError::Parse {
                path: path.to_path_buf(),
                message: error.to_string(),
            }
        })?;

        let references = document
            .descendants()
            .filter(|node| node.is_element() && node.tag_name().name() == PROJECT_REFERENCE)
            .filter_map(|node| node.attribute(INCLUDE))
            .map(str::trim)
            .filter(|include| !include.is_empty())
            .map(|include| resolve_reference(&directory, include))
            .collect();

        Ok(Self {
            path: normalize_lexically(path),
            directory,
            references,
        })
    }
}

/// Join an `Include` value onto the referencing project's directory.
/// Windows separators are accepted on every platform.
pub fn resolve_reference(directory: &Path, include: &str) -> PathBuf {
    let include = if cfg!(windows) {
        include.to_string()
    } else {
        include.replace('\\', "/")
    };
    normalize_lexically(&directory.join(include))
}

/// Make `path` absolute against the working directory and normalize it.
pub fn absolutize(path: &Path) -> std::io::Result<PathBuf> {
    if path.is_absolute() {
        Ok(normalize_lexically(path))
    } else {
        Ok(normalize_lexically(&std::env::current_dir()?.join(path)))
    }
}

/// Drop `.` components and fold `..` into their parent without touching
/// the file system.
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(out.components().next_back(), Some(Component::Normal(_))) {
                    out.pop();
                } else if !out.has_root() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Case-insensitive identity of a project path.
pub fn visit_key(path: &Path) -> String {
    path.to_string_lossy().to_lowercase()
}
