//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::config::DevbootConfig;
use crate::shell::ShellType;

/// devboot - One-shot macOS developer machine bootstrap.
#[derive(Debug, Parser)]
#[command(name = "devboot")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Homebrew formula to install after project tools (default: awscli)
    #[arg(short, long, global = true, env = "DEVBOOT_TOOL")]
    pub tool: Option<String>,

    /// Shell whose startup files receive activation lines (default: $SHELL)
    #[arg(long, global = true, value_parser = parse_shell)]
    pub shell: Option<ShellType>,

    /// Don't run `brew upgrade mise` when mise is already installed
    #[arg(long, global = true)]
    pub no_upgrade: bool,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Apply command-line overrides on top of file configuration.
    pub fn apply_overrides(&self, config: &mut DevbootConfig) {
        if let Some(tool) = &self.tool {
            config.tool = tool.clone();
        }
        if let Some(shell) = self.shell {
            config.shell = Some(shell);
        }
        if self.no_upgrade {
            config.upgrade_version_manager = false;
        }
    }
}

fn parse_shell(value: &str) -> Result<ShellType, String> {
    value.parse()
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the full bootstrap (default if no command specified)
    Run,

    /// Report which project tools are installed
    Verify,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum, id = "completion_shell", value_name = "SHELL")]
    pub shell: Shell,
}
