//! Configuration loading for devboot.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and layering in [`loader`]
//!
//! Config is optional: without any file every setting has a default.
//!
//! # Example
//!
//! ```
//! use devboot::config::load_config;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let home = TempDir::new().unwrap();
//! let project = TempDir::new().unwrap();
//! fs::create_dir_all(project.path().join(".devboot")).unwrap();
//! fs::write(project.path().join(".devboot/config.yml"), "tool: gh").unwrap();
//!
//! let config = load_config(home.path(), project.path()).unwrap();
//! assert_eq!(config.tool, "gh");
//! ```

pub mod loader;
pub mod schema;

pub use loader::{layer, load_config, load_config_value, ConfigPaths, CONFIG_DIR, CONFIG_FILE};
pub use schema::{DevbootConfig, DEFAULT_HOMEBREW_INSTALL_URL, DEFAULT_TOOL};
