use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Scalar value of a marker field.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum MarkerValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl MarkerValue {
    /// The string payload, if the field is string-typed and set.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            MarkerValue::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for MarkerValue {
    fn from(s: &str) -> Self {
        MarkerValue::Str(s.to_string())
    }
}

impl From<String> for MarkerValue {
    fn from(s: String) -> Self {
        MarkerValue::Str(s)
    }
}

impl From<i64> for MarkerValue {
    fn from(v: i64) -> Self {
        MarkerValue::Int(v)
    }
}

impl From<bool> for MarkerValue {
    fn from(v: bool) -> Self {
        MarkerValue::Bool(v)
    }
}

/// An annotation attached to a method, identified by its kind name
/// (e.g. `ActionAttribute`).
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Marker {
    pub kind: String,
    #[serde(default)]
    pub fields: BTreeMap<String, MarkerValue>,
}

impl Marker {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            fields: BTreeMap::new(),
        }
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<MarkerValue>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    pub fn field(&self, name: &str) -> Option<&MarkerValue> {
        self.fields.get(name)
    }

    /// Value of a string-typed field. Fields of any other type read as `None`.
    pub fn string_field(&self, name: &str) -> Option<&str> {
        self.field(name).and_then(MarkerValue::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_fields_from_json() {
        let json = r#"{"kind": "ActionAttribute", "fields": {"Key": "spawn", "Order": 3, "Hidden": null}}"#;
        let marker: Marker = serde_json::from_str(json).unwrap();

        assert_eq!(marker.kind, "ActionAttribute");
        assert_eq!(marker.string_field("Key"), Some("spawn"));
        assert_eq!(marker.field("Order"), Some(&MarkerValue::Int(3)));
        assert_eq!(marker.field("Hidden"), Some(&MarkerValue::Null));
    }

    #[test]
    fn test_string_field_ignores_other_types() {
        let marker = Marker::new("CheckerAttribute").with_field("Key", 42i64);
        assert_eq!(marker.string_field("Key"), None);
        assert_eq!(marker.string_field("Missing"), None);
    }

    #[test]
    fn test_fields_default_to_empty() {
        let marker: Marker = serde_json::from_str(r#"{"kind": "ActionAttribute"}"#).unwrap();
        assert!(marker.fields.is_empty());
    }
}
