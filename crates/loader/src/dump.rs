use ecamap_api::{
    Marker, MetadataError, MetadataResult, MethodMetadata, ModuleMetadata, TypeMetadata, TypeRef,
};
use serde::Deserialize;
use serde_json::Value;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
struct ModuleDump {
    name: String,
    #[serde(default)]
    version: Option<String>,
    #[serde(default)]
    types: Vec<Value>,
}

#[derive(Debug, Deserialize)]
struct TypeDump {
    full_name: String,
    #[serde(default)]
    methods: Vec<Value>,
}

#[derive(Debug, Deserialize)]
struct MethodDump {
    name: String,
    #[serde(default)]
    parameters: Vec<TypeRef>,
    #[serde(default)]
    markers: Vec<Value>,
}

/// A module read from a metadata dump.
#[derive(Debug)]
pub struct JsonModule {
    name: String,
    version: Option<String>,
    path: PathBuf,
    types: Vec<Value>,
}

impl JsonModule {
    /// Decode the module header. Types stay undecoded until enumerated.
    pub fn parse(path: &Path, text: &str) -> MetadataResult<Self> {
        let dump: ModuleDump = serde_json::from_str(text)?;
        Ok(Self {
            name: dump.name,
            version: dump.version,
            path: path.to_path_buf(),
            types: dump.types,
        })
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Decode every entry, failing the whole enumeration on the first bad one.
fn decode_all<'v, T: Deserialize<'v>>(entries: &'v [Value], what: &str) -> MetadataResult<Vec<T>> {
    entries
        .iter()
        .enumerate()
        .map(|(index, value)| {
            T::deserialize(value)
                .map_err(|e| MetadataError::Malformed(format!("{} #{}: {}", what, index, e)))
        })
        .collect()
}

impl ModuleMetadata for JsonModule {
    fn name(&self) -> &str {
        &self.name
    }

    fn types(&self) -> MetadataResult<Vec<Box<dyn TypeMetadata + '_>>> {
        let types: Vec<TypeDump> = decode_all(&self.types, "type")?;
        Ok(types
            .into_iter()
            .map(|t| Box::new(t) as Box<dyn TypeMetadata + '_>)
            .collect())
    }
}

impl TypeMetadata for TypeDump {
    fn full_name(&self) -> &str {
        &self.full_name
    }

    fn methods(&self) -> MetadataResult<Vec<Box<dyn MethodMetadata + '_>>> {
        let methods: Vec<MethodDump> = decode_all(&self.methods, "method")?;
        Ok(methods
            .into_iter()
            .map(|m| Box::new(m) as Box<dyn MethodMetadata + '_>)
            .collect())
    }
}

impl MethodMetadata for MethodDump {
    fn name(&self) -> &str {
        &self.name
    }

    fn parameter_types(&self) -> MetadataResult<Vec<TypeRef>> {
        Ok(self.parameters.clone())
    }

    fn markers(&self) -> MetadataResult<Vec<Marker>> {
        decode_all(&self.markers, "marker")
    }
}
