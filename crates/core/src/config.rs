use crate::error::{EcaError, Result};
use serde::{Deserialize, Serialize};

/// Marker kinds recognised out of the box, highest priority first.
pub const DEFAULT_MARKER_KINDS: [&str; 2] = ["ActionAttribute", "CheckerAttribute"];

/// Marker field that may override a method's registry key.
pub const DEFAULT_KEY_FIELD: &str = "Key";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Marker kinds that make a method dispatchable, in priority order.
    pub marker_kinds: Vec<String>,
    /// Name of the string field carrying an override key.
    pub key_field: String,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            marker_kinds: DEFAULT_MARKER_KINDS.iter().map(|k| k.to_string()).collect(),
            key_field: DEFAULT_KEY_FIELD.to_string(),
        }
    }
}

impl ScanConfig {
    pub fn validate(&self) -> Result<()> {
        if self.marker_kinds.is_empty() {
            return Err(EcaError::Config("no marker kinds configured".to_string()));
        }
        if let Some(blank) = self.marker_kinds.iter().position(|k| k.trim().is_empty()) {
            return Err(EcaError::Config(format!("marker kind #{} is blank", blank)));
        }
        if self.key_field.is_empty() {
            return Err(EcaError::Config("key field name is empty".to_string()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmitConfig {
    pub namespace: String,
    pub class_name: String,
    pub field_name: String,
    /// Written as a `// ...` line ahead of the prologue.
    pub header_comment: Option<String>,
}

impl Default for EmitConfig {
    fn default() -> Self {
        Self {
            namespace: "ECA".to_string(),
            class_name: "ECAMap".to_string(),
            field_name: "sMethods".to_string(),
            header_comment: None,
        }
    }
}
