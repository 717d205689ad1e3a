use serde::{Deserialize, Serialize};

/// One resolved line of the generated registry: a key and enough
/// information to look the method up reflectively.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct RegistryEntry {
    pub key: String,
    pub declaring_type: String,
    pub method_name: String,
    /// Rendered parameter type names; empty for a parameterless method.
    pub parameter_type_names: Vec<String>,
}

impl RegistryEntry {
    pub fn new(
        key: impl Into<String>,
        declaring_type: impl Into<String>,
        method_name: impl Into<String>,
        parameter_type_names: Vec<String>,
    ) -> Self {
        Self {
            key: key.into(),
            declaring_type: declaring_type.into(),
            method_name: method_name.into(),
            parameter_type_names,
        }
    }
}
