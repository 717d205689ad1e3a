use ecamap_api::Marker;

/// `<type>.<method>`, the key used when a marker carries no override.
pub fn default_key(type_name: &str, method_name: &str) -> String {
    format!("{}.{}", type_name, method_name)
}

/// Computes registry keys. No normalization or collision checking happens here.
#[derive(Debug, Clone)]
pub struct KeyResolver {
    field: String,
}

impl KeyResolver {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    pub fn resolve(&self, type_name: &str, method_name: &str, marker: &Marker) -> String {
        match marker.string_field(&self.field) {
            Some(key) if !key.is_empty() => key.to_string(),
            _ => default_key(type_name, method_name),
        }
    }
}
