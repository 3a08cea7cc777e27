//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands};
use crate::config::load_config;
use crate::error::Result;
use crate::host::Host;
use crate::steps::BootstrapContext;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command against `host`, reporting through `ui`.
    fn execute(&self, host: &mut dyn Host, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    project_root: PathBuf,
    home: PathBuf,
}

impl CommandDispatcher {
    /// Create a dispatcher for the given project root and home directory.
    ///
    /// A relative project root is resolved against the current directory.
    pub fn new(project_root: PathBuf, home: PathBuf) -> Self {
        let project_root = std::path::absolute(&project_root).unwrap_or(project_root);
        Self { project_root, home }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Load configuration and apply command-line overrides.
    pub fn context(&self, cli: &Cli) -> Result<BootstrapContext> {
        let mut config = load_config(&self.home, &self.project_root)?;
        cli.apply_overrides(&mut config);
        Ok(BootstrapContext::new(
            self.home.clone(),
            self.project_root.clone(),
            config,
        ))
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it.
    pub fn dispatch(
        &self,
        cli: &Cli,
        host: &mut dyn Host,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Run) | None => {
                let cmd = super::run::RunCommand::new(self.context(cli)?);
                cmd.execute(host, ui)
            }
            Some(Commands::Verify) => {
                let cmd = super::verify::VerifyCommand::new(self.context(cli)?);
                cmd.execute(host, ui)
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(host, ui)
            }
        }
    }
}
