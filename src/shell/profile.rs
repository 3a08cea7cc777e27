//! Idempotent edits to shell startup files.
//!
//! Both Homebrew and mise need a line in a dotfile so future shells can
//! find them. [`ensure_line`] is the single operation used for both: it
//! appends the line only when the file does not already contain it.
//!
//! # Example
//!
//! ```
//! use devboot::shell::{ensure_line, LineStatus};
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! let rc = temp.path().join(".zshrc");
//!
//! let line = r#"eval "$(mise activate zsh)""#;
//! assert_eq!(ensure_line(&rc, line).unwrap(), LineStatus::Added);
//! assert_eq!(ensure_line(&rc, line).unwrap(), LineStatus::AlreadyPresent);
//! ```

use crate::error::Result;
use anyhow::Context;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::Path;

/// Outcome of [`ensure_line`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStatus {
    /// The line was appended.
    Added,
    /// The file already contained the line; nothing was written.
    AlreadyPresent,
}

/// Ensure `line` is present in the file at `path`.
///
/// Presence is an exact byte substring match against the whole file, so
/// dotfiles in any encoding are accepted. Missing files and parent
/// directories are created. Existing content is never rewritten, only
/// appended to.
pub fn ensure_line(path: &Path, line: &str) -> Result<LineStatus> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }

    let existing = match fs::read(path) {
        Err(e) if e.kind() == ErrorKind::NotFound => Vec::new(),
        read => read.with_context(|| format!("Failed to read {}", path.display()))?,
    };

    if contains(&existing, line.as_bytes()) {
        tracing::debug!("{} already contains activation line", path.display());
        return Ok(LineStatus::AlreadyPresent);
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open {} for writing", path.display()))?;

    let mut appended = Vec::with_capacity(line.len() + 2);
    if existing.last().is_some_and(|&b| b != b'\n') {
        appended.push(b'\n');
    }
    appended.extend_from_slice(line.as_bytes());
    appended.push(b'\n');
    file.write_all(&appended)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    tracing::debug!("Appended '{}' to {}", line, path.display());
    Ok(LineStatus::Added)
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    needle.is_empty() || haystack.windows(needle.len()).any(|w| w == needle)
}
