//! devboot - One-shot macOS developer machine bootstrap.
//!
//! devboot takes a fresh Mac to a working project toolchain: it installs
//! Homebrew, installs mise through Homebrew, trusts the project's tool
//! manifest and installs the versions it pins, installs one extra CLI, and
//! finishes with a report of which declared tools are on PATH. Every step is
//! idempotent, so running it again on a configured machine changes nothing.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Layered YAML configuration
//! - [`error`] - Error types and result aliases
//! - [`host`] - The machine being bootstrapped (processes, PATH, downloads)
//! - [`manifest`] - `mise.toml` / `.tool-versions` discovery and parsing
//! - [`runner`] - Fixed-order pipeline orchestration
//! - [`shell`] - Process execution, dotfile edits, shell detection
//! - [`steps`] - The individual bootstrap steps
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use devboot::shell::{ensure_line, LineStatus};
//! use tempfile::TempDir;
//!
//! let home = TempDir::new().unwrap();
//! let zshrc = home.path().join(".zshrc");
//!
//! let line = r#"eval "$(mise activate zsh)""#;
//! assert_eq!(ensure_line(&zshrc, line).unwrap(), LineStatus::Added);
//! assert_eq!(ensure_line(&zshrc, line).unwrap(), LineStatus::AlreadyPresent);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod host;
pub mod manifest;
pub mod runner;
pub mod shell;
pub mod steps;
pub mod ui;

pub use error::{DevbootError, Result};
