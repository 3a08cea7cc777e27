//! Configuration file discovery and loading.
//!
//! Config files are optional. When several exist they are layered, later
//! overriding earlier:
//!
//! 1. User global config (`~/.devboot/config.yml`)
//! 2. Project config (`<project>/.devboot/config.yml`)

use crate::config::schema::DevbootConfig;
use crate::error::{DevbootError, Result};
use anyhow::Context;
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory holding devboot config, relative to home or project root.
pub const CONFIG_DIR: &str = ".devboot";

/// Config file name inside [`CONFIG_DIR`].
pub const CONFIG_FILE: &str = "config.yml";

/// Paths to configuration files in priority order (later overrides earlier).
#[derive(Debug, Clone, Default)]
pub struct ConfigPaths {
    /// User's global config: ~/.devboot/config.yml
    pub user_global: Option<PathBuf>,

    /// Project config: .devboot/config.yml
    pub project: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover config files for the given home and project directories.
    pub fn discover(home: &Path, project_root: &Path) -> Self {
        Self {
            user_global: existing(home.join(CONFIG_DIR).join(CONFIG_FILE)),
            project: existing(project_root.join(CONFIG_DIR).join(CONFIG_FILE)),
        }
    }

    /// Returns all existing config paths in merge order.
    pub fn all_existing(&self) -> Vec<&PathBuf> {
        self.user_global.iter().chain(self.project.iter()).collect()
    }
}

fn existing(path: PathBuf) -> Option<PathBuf> {
    path.is_file().then_some(path)
}

/// Load a config file as raw YAML Value (for layering).
///
/// An empty file yields an empty mapping.
pub fn load_config_value(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;

    let value: Value =
        serde_yaml::from_str(&content).map_err(|e| DevbootError::ConfigParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    match value {
        Value::Null => Ok(Value::Mapping(Mapping::new())),
        Value::Mapping(_) => Ok(value),
        _ => Err(DevbootError::ConfigParseError {
            path: path.to_path_buf(),
            message: "expected a mapping at the top level".to_string(),
        }),
    }
}

/// Deep-merge `overlay` into `base`.
///
/// Nested mappings merge recursively. Any other overlay value replaces the
/// base value. A null value removes the key, restoring the built-in default.
pub fn layer(base: &mut Mapping, overlay: &Mapping) {
    for (key, value) in overlay {
        match value {
            Value::Null => {
                base.remove(key);
            }
            Value::Mapping(over) => match base.get_mut(key) {
                Some(Value::Mapping(nested)) => layer(nested, over),
                _ => {
                    base.insert(key.clone(), value.clone());
                }
            },
            _ => {
                base.insert(key.clone(), value.clone());
            }
        }
    }
}

/// Load and layer all config files for a project.
///
/// Returns defaults when no config file exists.
///
/// # Errors
///
/// Returns `ConfigParseError` if any config file is invalid.
pub fn load_config(home: &Path, project_root: &Path) -> Result<DevbootConfig> {
    let paths = ConfigPaths::discover(home, project_root);
    let mut merged = Mapping::new();
    let mut last_path = None;

    for path in paths.all_existing() {
        tracing::debug!("Loading config from {}", path.display());
        if let Value::Mapping(map) = load_config_value(path)? {
            layer(&mut merged, &map);
        }
        last_path = Some(path.clone());
    }

    serde_yaml::from_value(Value::Mapping(merged)).map_err(|e| DevbootError::ConfigParseError {
        path: last_path.unwrap_or_else(|| project_root.join(CONFIG_DIR).join(CONFIG_FILE)),
        message: e.to_string(),
    })
}
