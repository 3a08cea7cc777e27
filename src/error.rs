//! Error types for devboot operations.
//!
//! This module defines [`DevbootError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Every `DevbootError` is fatal: it aborts the bootstrap with exit code 1
//! - Tolerated failures (upgrade, trust, version queries) never become errors;
//!   steps report them through the UI as warnings
//! - File I/O attaches `anyhow::Context` naming the file; it arrives here as
//!   `DevbootError::Other`

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for devboot operations.
#[derive(Debug, Error)]
pub enum DevbootError {
    /// Host kernel is not the supported one.
    #[error("Unsupported operating system: {detected} (devboot only supports macOS)")]
    UnsupportedPlatform { detected: String },

    /// Homebrew could not be downloaded or installed.
    #[error("Failed to install Homebrew: {message}")]
    PackageManagerInstall { message: String },

    /// mise could not be installed through Homebrew.
    #[error("Failed to install mise: {message}")]
    VersionManagerInstall { message: String },

    /// The named CLI tool could not be installed through Homebrew.
    #[error("Failed to install '{tool}': {message}")]
    ToolInstall { tool: String, message: String },

    /// No tool manifest in the project directory.
    #[error(
        "No mise.toml or .tool-versions found in {}. Add one to pin the project's tool versions.",
        dir.display()
    )]
    ManifestNotFound { dir: PathBuf },

    /// Tool manifest exists but cannot be read.
    #[error("Failed to parse manifest at {path}: {message}")]
    ManifestParse { path: PathBuf, message: String },

    /// Failed to parse a devboot config file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// A process could not be spawned.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// Downloading a remote resource failed.
    #[error("Failed to fetch {url}: {message}")]
    Fetch { url: String, message: String },

    /// A bootstrap step aborted the run.
    #[error("Step '{step}' failed: {source}")]
    StepFailed {
        step: String,
        #[source]
        source: Box<DevbootError>,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// I/O failure with context attached through `anyhow`.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for devboot operations.
pub type Result<T> = std::result::Result<T, DevbootError>;
