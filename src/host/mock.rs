//! Mock host implementation for testing.
//!
//! `MockHost` implements the [`Host`] trait without touching the real
//! system. Executables live in an in-memory set, the environment is an
//! in-memory map, and every process invocation is recorded for later
//! assertion. Commands are matched by their display form
//! (`brew install mise`); unknown commands succeed with empty output.
//!
//! # Example
//!
//! ```
//! use devboot::host::{Host, MockHost};
//! use devboot::shell::Invocation;
//!
//! let mut host = MockHost::new();
//! host.respond("brew --version", "Homebrew 4.4.0");
//! host.add_executable("/opt/homebrew/bin/brew");
//! host.set_var("PATH", "/opt/homebrew/bin:/usr/bin");
//!
//! assert!(host.resolve("brew").is_some());
//! let out = host.run(&Invocation::new("brew").arg("--version")).unwrap();
//! assert_eq!(out.first_line(), Some("Homebrew 4.4.0"));
//! assert!(host.ran("brew --version"));
//! ```

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{DevbootError, Result};
use crate::shell::{CommandResult, Invocation};

use super::Host;

/// Mock host for testing.
#[derive(Debug, Default)]
pub struct MockHost {
    env: HashMap<String, String>,
    executables: HashSet<PathBuf>,
    responses: HashMap<String, CommandResult>,
    spawn_failures: HashSet<String>,
    creates: HashMap<String, Vec<PathBuf>>,
    pages: HashMap<String, String>,
    invocations: Vec<Invocation>,
    fetched: Vec<String>,
    elevated: bool,
}

impl MockHost {
    /// Create a mock host with `PATH=/usr/bin:/bin` and nothing installed.
    pub fn new() -> Self {
        let mut host = Self::default();
        host.env.insert("PATH".to_string(), "/usr/bin:/bin".to_string());
        host
    }

    /// Mark `path` as an existing executable file.
    pub fn add_executable(&mut self, path: impl Into<PathBuf>) {
        self.executables.insert(path.into());
    }

    /// Make `command` succeed with the given stdout.
    pub fn respond(&mut self, command: &str, stdout: &str) {
        self.responses.insert(
            command.to_string(),
            CommandResult::success(stdout.to_string(), String::new(), Duration::ZERO),
        );
    }

    /// Make `command` exit with `code` and the given stderr.
    pub fn fail(&mut self, command: &str, code: i32, stderr: &str) {
        self.responses.insert(
            command.to_string(),
            CommandResult::failure(Some(code), String::new(), stderr.to_string(), Duration::ZERO),
        );
    }

    /// Make `command` fail to spawn at all.
    pub fn fail_to_spawn(&mut self, command: &str) {
        self.spawn_failures.insert(command.to_string());
    }

    /// When `command` succeeds, the executable at `path` starts existing.
    pub fn creates(&mut self, command: &str, path: impl Into<PathBuf>) {
        self.creates
            .entry(command.to_string())
            .or_default()
            .push(path.into());
    }

    /// Serve `body` for `url`. Unserved URLs fail to fetch.
    pub fn serve(&mut self, url: &str, body: &str) {
        self.pages.insert(url.to_string(), body.to_string());
    }

    /// Pretend to run as root.
    pub fn set_elevated(&mut self, elevated: bool) {
        self.elevated = elevated;
    }

    /// All invocations, in order.
    pub fn invocations(&self) -> &[Invocation] {
        &self.invocations
    }

    /// Display forms of all invocations, in order.
    pub fn commands(&self) -> Vec<String> {
        self.invocations.iter().map(|i| i.to_string()).collect()
    }

    /// Whether `command` was run.
    pub fn ran(&self, command: &str) -> bool {
        self.invocations.iter().any(|i| i.to_string() == command)
    }

    /// URLs fetched, in order.
    pub fn fetched(&self) -> &[String] {
        &self.fetched
    }
}

impl Host for MockHost {
    fn run(&mut self, invocation: &Invocation) -> Result<CommandResult> {
        let key = invocation.to_string();
        self.invocations.push(invocation.clone());

        if self.spawn_failures.contains(&key) {
            return Err(DevbootError::CommandFailed {
                command: key,
                code: None,
            });
        }

        let result = self.responses.get(&key).cloned().unwrap_or_else(|| {
            CommandResult::success(String::new(), String::new(), Duration::ZERO)
        });

        if result.success {
            if let Some(paths) = self.creates.get(&key) {
                self.executables.extend(paths.iter().cloned());
            }
        }

        Ok(result)
    }

    fn resolve(&self, program: &str) -> Option<PathBuf> {
        if program.contains('/') {
            let path = PathBuf::from(program);
            return self.executables.contains(&path).then_some(path);
        }

        self.env
            .get("PATH")
            .map(String::as_str)
            .unwrap_or_default()
            .split(':')
            .filter(|dir| !dir.is_empty())
            .map(|dir| Path::new(dir).join(program))
            .find(|candidate| self.executables.contains(candidate))
    }

    fn is_executable(&self, path: &Path) -> bool {
        self.executables.contains(path)
    }

    fn var(&self, key: &str) -> Option<String> {
        self.env.get(key).cloned()
    }

    fn set_var(&mut self, key: &str, value: &str) {
        self.env.insert(key.to_string(), value.to_string());
    }

    fn fetch(&mut self, url: &str) -> Result<String> {
        self.fetched.push(url.to_string());
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| DevbootError::Fetch {
                url: url.to_string(),
                message: "HTTP 404 Not Found".to_string(),
            })
    }

    fn is_elevated(&self) -> bool {
        self.elevated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_commands_succeed() {
        let mut host = MockHost::new();
        let result = host.run(&Invocation::new("brew").arg("doctor")).unwrap();
        assert!(result.success);
        assert!(host.ran("brew doctor"));
    }

    #[test]
    fn configured_failures_are_returned() {
        let mut host = MockHost::new();
        host.fail("brew upgrade mise", 1, "network down");

        let result = host
            .run(&Invocation::new("brew").args(["upgrade", "mise"]))
            .unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, Some(1));
        assert!(result.stderr.contains("network down"));
    }

    #[test]
    fn spawn_failures_are_errors() {
        let mut host = MockHost::new();
        host.fail_to_spawn("uname -s");
        assert!(host.run(&Invocation::new("uname").arg("-s")).is_err());
    }

    #[test]
    fn successful_install_creates_executable() {
        let mut host = MockHost::new();
        host.set_var("PATH", "/opt/homebrew/bin:/usr/bin");
        host.creates("brew install mise", "/opt/homebrew/bin/mise");

        assert!(host.resolve("mise").is_none());
        host.run(&Invocation::new("brew").args(["install", "mise"]))
            .unwrap();
        assert_eq!(
            host.resolve("mise"),
            Some(PathBuf::from("/opt/homebrew/bin/mise"))
        );
    }

    #[test]
    fn failed_install_creates_nothing() {
        let mut host = MockHost::new();
        host.fail("brew install mise", 1, "");
        host.creates("brew install mise", "/usr/bin/mise");

        host.run(&Invocation::new("brew").args(["install", "mise"]))
            .unwrap();

        assert!(host.resolve("mise").is_none());
    }

    #[test]
    fn resolve_follows_path_order() {
        let mut host = MockHost::new();
        host.add_executable("/usr/bin/node");
        host.add_executable("/shims/node");
        host.set_var("PATH", "/shims:/usr/bin");

        assert_eq!(host.resolve("node"), Some(PathBuf::from("/shims/node")));
    }

    #[test]
    fn fetch_serves_configured_pages() {
        let mut host = MockHost::new();
        host.serve("https://example.test/install.sh", "echo hi\n");

        assert_eq!(
            host.fetch("https://example.test/install.sh").unwrap(),
            "echo hi\n"
        );
        assert!(host.fetch("https://example.test/other").is_err());
        assert_eq!(host.fetched().len(), 2);
    }
}
