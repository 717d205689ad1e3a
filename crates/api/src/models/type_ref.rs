use serde::{Deserialize, Serialize};

/// A parameter type as reported by the metadata host.
///
/// Serialized either as a bare string (`"System.Int32"`) or as
/// `{ "name": "System.Collections.Generic.List`1", "args": [...] }`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum TypeRef {
    /// Non-generic type, by fully-qualified name
    Named(String),

    /// Generic instantiation. `name` keeps the host's arity suffix
    /// (e.g. ``System.Collections.Generic.Dictionary`2``).
    Generic { name: String, args: Vec<TypeRef> },
}

impl TypeRef {
    /// Helper to create a Named type
    pub fn named(name: impl Into<String>) -> Self {
        TypeRef::Named(name.into())
    }

    /// Helper to create a Generic type
    pub fn generic(name: impl Into<String>, args: Vec<TypeRef>) -> Self {
        TypeRef::Generic {
            name: name.into(),
            args,
        }
    }

    /// Qualified name as the host reports it, arity suffix included.
    pub fn full_name(&self) -> &str {
        match self {
            TypeRef::Named(name) | TypeRef::Generic { name, .. } => name,
        }
    }

    pub fn is_generic(&self) -> bool {
        matches!(self, TypeRef::Generic { .. })
    }

    pub fn args(&self) -> &[TypeRef] {
        match self {
            TypeRef::Named(_) => &[],
            TypeRef::Generic { args, .. } => args,
        }
    }
}
