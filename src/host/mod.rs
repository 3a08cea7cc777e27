//! The machine being bootstrapped.
//!
//! Every external effect of a bootstrap step (spawning processes, looking
//! up executables, reading and changing the process environment, and
//! downloading installers) goes through the [`Host`] trait. [`SystemHost`]
//! talks to the real system; [`MockHost`] records calls for tests.
//!
//! Dotfile edits are not part of the trait: they go through
//! [`ensure_line`](crate::shell::ensure_line) against the home directory
//! in the bootstrap context, which tests point at a temporary directory.

pub mod fetch;
pub mod mock;
pub mod path;

pub use fetch::HttpFetcher;
pub use mock::MockHost;
pub use path::{is_executable, resolve_tool_path, split_search_path};

use crate::error::Result;
use crate::shell::{execute, is_elevated, CommandResult, Invocation};
use std::path::{Path, PathBuf};

/// Side-effecting operations a bootstrap step may perform.
pub trait Host {
    /// Spawn a process and wait for it.
    ///
    /// A non-zero exit is not an error; check [`CommandResult::success`].
    fn run(&mut self, invocation: &Invocation) -> Result<CommandResult>;

    /// Locate an executable on the current search path.
    fn resolve(&self, program: &str) -> Option<PathBuf>;

    /// Whether `path` is an executable file.
    fn is_executable(&self, path: &Path) -> bool;

    /// Read an environment variable of this process.
    fn var(&self, key: &str) -> Option<String>;

    /// Set an environment variable for this process and its children.
    fn set_var(&mut self, key: &str, value: &str);

    /// Download a text resource.
    fn fetch(&mut self, url: &str) -> Result<String>;

    /// Whether this process runs with root privileges.
    fn is_elevated(&self) -> bool;
}

/// [`Host`] backed by the real operating system.
#[derive(Default)]
pub struct SystemHost {
    fetcher: HttpFetcher,
}

impl SystemHost {
    /// Create a host for the current machine.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Host for SystemHost {
    fn run(&mut self, invocation: &Invocation) -> Result<CommandResult> {
        execute(invocation)
    }

    fn resolve(&self, program: &str) -> Option<PathBuf> {
        let path = std::env::var_os("PATH").unwrap_or_default();
        resolve_tool_path(program, &split_search_path(&path))
    }

    fn is_executable(&self, path: &Path) -> bool {
        is_executable(path)
    }

    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }

    fn set_var(&mut self, key: &str, value: &str) {
        tracing::debug!("Setting {}={}", key, value);
        // Single-threaded: steps run one at a time on the main thread
        std::env::set_var(key, value);
    }

    fn fetch(&mut self, url: &str) -> Result<String> {
        self.fetcher.fetch(url)
    }

    fn is_elevated(&self) -> bool {
        is_elevated()
    }
}
