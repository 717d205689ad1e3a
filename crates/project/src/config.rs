use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalkerConfig {
    /// Build-output directories scanned under each project directory.
    pub output_dirs: Vec<String>,
    /// Artifact file extensions, compared case-insensitively.
    pub artifact_extensions: Vec<String>,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            output_dirs: vec!["bin".to_string()],
            artifact_extensions: vec!["dll".to_string()],
        }
    }
}

impl WalkerConfig {
    pub fn is_artifact_extension(&self, ext: &str) -> bool {
        self.artifact_extensions
            .iter()
            .any(|candidate| candidate.trim_start_matches('.').eq_ignore_ascii_case(ext))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_match_is_case_insensitive() {
        let config = WalkerConfig::default();
        assert!(config.is_artifact_extension("dll"));
        assert!(config.is_artifact_extension("DLL"));
        assert!(!config.is_artifact_extension("pdb"));
    }

    #[test]
    fn test_leading_dot_tolerated() {
        let config = WalkerConfig {
            artifact_extensions: vec![".so".to_string()],
            ..WalkerConfig::default()
        };
        assert!(config.is_artifact_extension("so"));
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let config: WalkerConfig = serde_json::from_str(r#"{"output_dirs": ["out", "bin"]}"#).unwrap();
        assert_eq!(config.output_dirs, vec!["out", "bin"]);
        assert_eq!(config.artifact_extensions, vec!["dll"]);
    }
}
