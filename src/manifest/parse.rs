//! Tool extraction from `mise.toml` and `.tool-versions` content.

use toml::{Table, Value};

/// One tool declared by a manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolEntry {
    /// Key as declared (`node`, `npm:prettier`).
    pub name: String,
    /// Executable probed on the search path (`node`, `prettier`).
    pub binary: String,
    /// Declared version constraint.
    pub version: String,
}

impl ToolEntry {
    /// Create an entry, deriving the binary name from `name`.
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            binary: binary_name(&name).to_string(),
            name,
            version: version.into(),
        }
    }
}

/// Strip a backend prefix and package scope from a tool key.
///
/// `npm:prettier` -> `prettier`, `aqua:cli/cli` -> `cli`.
pub fn binary_name(name: &str) -> &str {
    let after_backend = name.rsplit(':').next().unwrap_or(name);
    after_backend.rsplit('/').next().unwrap_or(after_backend)
}

/// Parse `mise.toml` content.
///
/// Tools are the keys of the `[tools]` table when there is one; otherwise
/// every top-level key whose value is not a table.
pub fn parse_mise_toml(content: &str) -> Result<Vec<ToolEntry>, String> {
    let table: Table = toml::from_str(content).map_err(|e| e.message().to_string())?;

    let entries = match table.get("tools") {
        Some(Value::Table(tools)) => tools
            .iter()
            .map(|(name, value)| ToolEntry::new(name, render_version(value)))
            .collect(),
        Some(_) => return Err("`tools` must be a table".to_string()),
        None => table
            .iter()
            .filter(|(_, value)| !value.is_table())
            .map(|(name, value)| ToolEntry::new(name, render_version(value)))
            .collect(),
    };

    Ok(entries)
}

/// Parse `.tool-versions` content: `<tool> <version>...` per line.
pub fn parse_tool_versions(content: &str) -> Vec<ToolEntry> {
    content
        .lines()
        .filter_map(|line| {
            let line = line.split('#').next().unwrap_or("").trim();
            let mut parts = line.split_whitespace();
            let name = parts.next()?;
            let version = parts.collect::<Vec<_>>().join(" ");
            Some(ToolEntry::new(name, version))
        })
        .collect()
}

fn render_version(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(render_version)
            .collect::<Vec<_>>()
            .join(", "),
        Value::Table(options) => options
            .get("version")
            .map(render_version)
            .unwrap_or_else(|| value.to_string()),
        other => other.to_string(),
    }
}
