//! Renders registry entries into the generated lookup-table source.
//!
//! Entries are transcribed as given: no dedup, no reordering, no key
//! validation. The whole artifact is rendered in memory and written once.

use crate::config::EmitConfig;
use crate::error::Result;
use ecamap_api::RegistryEntry;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use tracing::info;

/// Parameter list used for methods without parameters.
pub const EMPTY_PARAMETER_LIST: &str = "Array.Empty<Type>()";

pub struct RegistryEmitter {
    config: EmitConfig,
}

impl RegistryEmitter {
    pub fn new(config: EmitConfig) -> Self {
        Self { config }
    }

    pub fn render(&self, entries: &[RegistryEntry]) -> String {
        let mut out = String::new();
        if let Some(comment) = &self.config.header_comment {
            let _ = writeln!(out, "// {}", comment);
        }
        out.push_str(&self.prologue());
        for entry in entries {
            out.push_str(&render_entry(entry));
        }
        out.push_str(&self.epilogue());
        out
    }

    pub fn emit(&self, entries: &[RegistryEntry], destination: &Path) -> Result<()> {
        let text = self.render(entries);
        fs::write(destination, text)?;
        info!("Wrote {} registry entries to {}", entries.len(), destination.display());
        Ok(())
    }

    fn prologue(&self) -> String {
        format!(
            "using System;\n\
             using System.Collections.Generic;\n\
             using System.Reflection;\n\
             \n\
             namespace {namespace}\n\
             {{\n\
             \tpublic static class {class}\n\
             \t{{\n\
             \t\tpublic static readonly Dictionary<string, MethodInfo> {field} = new Dictionary<string, MethodInfo>()\n\
             \t\t{{\n",
            namespace = self.config.namespace,
            class = self.config.class_name,
            field = self.config.field_name,
        )
    }

    fn epilogue(&self) -> String {
        "\t\t};\n\t}\n}".to_string()
    }
}

/// One table row: `{"key", typeof(T).GetMethod(nameof(T.M), <params>)},`
pub fn render_entry(entry: &RegistryEntry) -> String {
    format!(
        "\t\t\t{{\"{key}\", typeof({ty}).GetMethod(nameof({ty}.{method}), {params})}},\n",
        key = entry.key,
        ty = entry.declaring_type,
        method = entry.method_name,
        params = render_parameter_list(&entry.parameter_type_names),
    )
}

pub fn render_parameter_list(names: &[String]) -> String {
    if names.is_empty() {
        return EMPTY_PARAMETER_LIST.to_string();
    }
    let types = names
        .iter()
        .map(|name| format!("typeof({})", name))
        .collect::<Vec<_>>()
        .join(",");
    format!("new Type[] {{{}}}", types)
}
