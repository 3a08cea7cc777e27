//! Project tool manifests.
//!
//! A manifest pins the tool versions a project needs. Two formats are
//! recognized, checked in this order:
//!
//! 1. `mise.toml`
//! 2. `.tool-versions`
//!
//! Both the trust/install step and the verification step locate the
//! manifest through [`Manifest::require`], so they accept the same files.
//!
//! # Example
//!
//! ```
//! use devboot::manifest::Manifest;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join(".tool-versions"), "nodejs 20.11.0\n").unwrap();
//!
//! let manifest = Manifest::require(temp.path()).unwrap();
//! let tools = manifest.tools().unwrap();
//! assert_eq!(tools[0].name, "nodejs");
//! assert_eq!(tools[0].version, "20.11.0");
//! ```

pub mod parse;

pub use parse::{binary_name, parse_mise_toml, parse_tool_versions, ToolEntry};

use crate::error::{DevbootError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Manifest file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestKind {
    /// `mise.toml`
    MiseToml,
    /// `.tool-versions` (asdf format, also read by mise)
    ToolVersions,
}

impl ManifestKind {
    /// Recognized formats in lookup order.
    pub const ALL: [ManifestKind; 2] = [ManifestKind::MiseToml, ManifestKind::ToolVersions];

    /// File name of this format.
    pub fn file_name(&self) -> &'static str {
        match self {
            ManifestKind::MiseToml => "mise.toml",
            ManifestKind::ToolVersions => ".tool-versions",
        }
    }
}

/// A manifest found in a project directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    path: PathBuf,
    kind: ManifestKind,
}

impl Manifest {
    /// Find the first recognized manifest in `dir`.
    pub fn locate(dir: &Path) -> Option<Self> {
        ManifestKind::ALL.iter().find_map(|kind| {
            let path = dir.join(kind.file_name());
            path.is_file().then_some(Self { path, kind: *kind })
        })
    }

    /// Like [`locate`](Self::locate), failing with `ManifestNotFound`.
    pub fn require(dir: &Path) -> Result<Self> {
        Self::locate(dir).ok_or_else(|| DevbootError::ManifestNotFound {
            dir: dir.to_path_buf(),
        })
    }

    /// Path to the manifest file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Format of the manifest.
    pub fn kind(&self) -> ManifestKind {
        self.kind
    }

    /// File name of the manifest (`mise.toml`).
    pub fn file_name(&self) -> &'static str {
        self.kind.file_name()
    }

    /// Read the manifest and list its declared tools in file order.
    pub fn tools(&self) -> Result<Vec<ToolEntry>> {
        let content = fs::read_to_string(&self.path).map_err(|e| DevbootError::ManifestParse {
            path: self.path.clone(),
            message: e.to_string(),
        })?;

        match self.kind {
            ManifestKind::MiseToml => {
                parse_mise_toml(&content).map_err(|message| DevbootError::ManifestParse {
                    path: self.path.clone(),
                    message,
                })
            }
            ManifestKind::ToolVersions => Ok(parse_tool_versions(&content)),
        }
    }
}
