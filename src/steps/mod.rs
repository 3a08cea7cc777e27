//! Bootstrap steps.
//!
//! Each step is one stage of the bootstrap pipeline:
//!
//! 1. [`OsGuard`] - refuse to run anywhere but macOS
//! 2. [`PackageManager`] - install and activate Homebrew
//! 3. [`VersionManager`] - install and activate mise
//! 4. [`ProjectTools`] - trust the project manifest and install its tools
//! 5. [`NamedTool`] - install one extra CLI through Homebrew
//! 6. [`Verify`] - report which declared tools are on PATH
//!
//! A step returns `Err` only for fatal failures. Tolerated failures are
//! reported as warnings and the step returns `Ok`.

pub mod os_guard;
pub mod package_manager;
pub mod project;
pub mod tool;
pub mod verify;
pub mod version_manager;

pub use os_guard::{check_platform, OsGuard, SUPPORTED_KERNEL};
pub use package_manager::{PackageManager, BREW_LOCATIONS};
pub use project::ProjectTools;
pub use tool::NamedTool;
pub use verify::{
    verify_tools, ToolReport, ToolStatus, VerificationReport, Verify, UNKNOWN_VERSION,
};
pub use version_manager::VersionManager;

use std::path::{Path, PathBuf};

use crate::config::DevbootConfig;
use crate::error::{DevbootError, Result};
use crate::host::Host;
use crate::shell::{
    detect_shell, parse_exports, CommandResult, Invocation, LineStatus, ShellType,
};
use crate::ui::UserInterface;

/// Everything a step needs to know about the machine and project.
#[derive(Debug, Clone)]
pub struct BootstrapContext {
    /// User's home directory; dotfiles live here.
    pub home: PathBuf,
    /// Directory holding the project manifest.
    pub project_root: PathBuf,
    /// Shell whose startup files receive activation lines.
    pub shell: ShellType,
    /// Merged configuration.
    pub config: DevbootConfig,
}

impl BootstrapContext {
    /// Build a context, detecting the shell unless the config names one.
    pub fn new(home: PathBuf, project_root: PathBuf, config: DevbootConfig) -> Self {
        let shell = config.shell.unwrap_or_else(detect_shell);
        Self {
            home,
            project_root,
            shell,
            config,
        }
    }

    /// Render `path` relative to home as `~/...` for messages.
    pub fn display_path(&self, path: &Path) -> String {
        match path.strip_prefix(&self.home) {
            Ok(rest) => format!("~/{}", rest.display()),
            Err(_) => path.display().to_string(),
        }
    }
}

/// One stage of the bootstrap pipeline.
pub trait Step {
    /// Short identifier used in error reports.
    fn name(&self) -> &'static str;

    /// Human-readable title shown when the step starts.
    fn title(&self) -> &'static str;

    /// Run the step.
    fn run(
        &self,
        ctx: &BootstrapContext,
        host: &mut dyn Host,
        ui: &mut dyn UserInterface,
    ) -> Result<()>;
}

/// Run a command whose failure must abort the step.
///
/// `on_fail` turns a failure description into the step's error.
pub(crate) fn run_required<F>(
    host: &mut dyn Host,
    ui: &mut dyn UserInterface,
    invocation: &Invocation,
    on_fail: F,
) -> Result<CommandResult>
where
    F: FnOnce(String) -> DevbootError,
{
    ui.command(&invocation.to_string());
    match host.run(invocation) {
        Ok(result) if result.success => Ok(result),
        Ok(result) => Err(on_fail(format!(
            "`{}` failed with {}",
            invocation,
            result.describe_failure()
        ))),
        Err(e) => Err(on_fail(e.to_string())),
    }
}

/// Run a command whose failure is tolerated. Returns whether it succeeded.
pub(crate) fn run_tolerated(
    host: &mut dyn Host,
    ui: &mut dyn UserInterface,
    invocation: &Invocation,
    what: &str,
) -> bool {
    ui.command(&invocation.to_string());
    let failure = match host.run(invocation) {
        Ok(result) if result.success => return true,
        Ok(result) => result.describe_failure(),
        Err(e) => e.to_string(),
    };
    tracing::debug!("Ignoring failure of {}: {}", invocation, failure);
    ui.warning(&format!("{} failed ({}); continuing", what, failure));
    false
}

/// Ask `program --version` for its version line.
pub(crate) fn query_version(host: &mut dyn Host, program: &str) -> Option<String> {
    let invocation = Invocation::new(program).arg("--version").captured();
    match host.run(&invocation) {
        Ok(result) if result.success => result.first_line().map(str::to_string),
        _ => None,
    }
}

/// Run a command that prints `export` statements and apply them here.
///
/// Returns false (after warning) if the command fails.
pub(crate) fn apply_env_script(
    host: &mut dyn Host,
    ui: &mut dyn UserInterface,
    invocation: &Invocation,
    what: &str,
) -> bool {
    let failure = match host.run(invocation) {
        Ok(result) if result.success => {
            let exports = parse_exports(&result.stdout, |name| host.var(name));
            for (name, value) in &exports {
                host.set_var(name, value);
            }
            tracing::debug!("Applied {} variables from {}", exports.len(), invocation);
            return true;
        }
        Ok(result) => result.describe_failure(),
        Err(e) => e.to_string(),
    };
    ui.warning(&format!("Could not {} in this session ({})", what, failure));
    false
}

/// Report the outcome of an activation-line edit.
pub(crate) fn report_line(
    ctx: &BootstrapContext,
    ui: &mut dyn UserInterface,
    path: &Path,
    tool: &str,
    status: LineStatus,
) {
    let shown = ctx.display_path(path);
    match status {
        LineStatus::Added => ui.message(&format!("Added {} activation to {}", tool, shown)),
        LineStatus::AlreadyPresent => {
            ui.message(&format!("{} already activates {}", shown, tool))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::MockHost;
    use crate::ui::MockUI;

    fn ctx() -> BootstrapContext {
        BootstrapContext {
            home: PathBuf::from("/Users/me"),
            project_root: PathBuf::from("/Users/me/app"),
            shell: ShellType::Zsh,
            config: DevbootConfig::default(),
        }
    }

    #[test]
    fn display_path_abbreviates_home() {
        let ctx = ctx();
        assert_eq!(ctx.display_path(Path::new("/Users/me/.zshrc")), "~/.zshrc");
        assert_eq!(ctx.display_path(Path::new("/etc/zshrc")), "/etc/zshrc");
    }

    #[test]
    fn context_prefers_configured_shell() {
        let config = DevbootConfig {
            shell: Some(ShellType::Fish),
            ..Default::default()
        };
        let ctx = BootstrapContext::new("/h".into(), "/p".into(), config);
        assert_eq!(ctx.shell, ShellType::Fish);
    }

    #[test]
    fn run_required_maps_failure() {
        let mut host = MockHost::new();
        let mut ui = MockUI::new();
        host.fail("brew install mise", 1, "Error: boom");

        let err = run_required(
            &mut host,
            &mut ui,
            &Invocation::new("brew").args(["install", "mise"]),
            |message| DevbootError::VersionManagerInstall { message },
        )
        .unwrap_err();

        let msg = err.to_string();
        assert!(msg.contains("brew install mise"));
        assert!(msg.contains("boom"));
    }

    #[test]
    fn run_tolerated_warns_and_continues() {
        let mut host = MockHost::new();
        let mut ui = MockUI::new();
        host.fail("brew upgrade mise", 1, "");

        let ok = run_tolerated(
            &mut host,
            &mut ui,
            &Invocation::new("brew").args(["upgrade", "mise"]),
            "mise upgrade",
        );

        assert!(!ok);
        assert!(ui.has_warning("mise upgrade failed"));
    }

    #[test]
    fn run_tolerated_survives_spawn_errors() {
        let mut host = MockHost::new();
        let mut ui = MockUI::new();
        host.fail_to_spawn("mise trust");

        let ok = run_tolerated(&mut host, &mut ui, &Invocation::new("mise").arg("trust"), "trust");

        assert!(!ok);
        assert_eq!(ui.warnings().len(), 1);
    }

    #[test]
    fn query_version_reads_first_line() {
        let mut host = MockHost::new();
        host.respond("node --version", "v20.11.0\n");
        assert_eq!(query_version(&mut host, "node"), Some("v20.11.0".into()));
    }

    #[test]
    fn query_version_none_on_failure() {
        let mut host = MockHost::new();
        host.fail("node --version", 127, "");
        assert_eq!(query_version(&mut host, "node"), None);
    }

    #[test]
    fn apply_env_script_updates_environment() {
        let mut host = MockHost::new();
        let mut ui = MockUI::new();
        host.respond("mise activate bash --shims", "export PATH=\"/shims:$PATH\"\n");

        let inv = Invocation::new("mise")
            .args(["activate", "bash", "--shims"])
            .captured();
        assert!(apply_env_script(&mut host, &mut ui, &inv, "activate mise"));

        assert_eq!(host.var("PATH").as_deref(), Some("/shims:/usr/bin:/bin"));
    }

    #[test]
    fn apply_env_script_warns_on_failure() {
        let mut host = MockHost::new();
        let mut ui = MockUI::new();
        host.fail("mise activate bash --shims", 1, "");

        let inv = Invocation::new("mise")
            .args(["activate", "bash", "--shims"])
            .captured();
        assert!(!apply_env_script(&mut host, &mut ui, &inv, "activate mise"));

        assert!(ui.has_warning("activate mise"));
        assert_eq!(host.var("PATH").as_deref(), Some("/usr/bin:/bin"));
    }
}
