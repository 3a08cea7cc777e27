//! Shell completions generation.
//!
//! The `devboot completions` command generates shell completion scripts.

use crate::cli::args::{Cli, CompletionsArgs};
use crate::host::Host;
use crate::ui::UserInterface;
use clap::CommandFactory;

use super::dispatcher::{Command, CommandResult};

/// The completions command implementation.
pub struct CompletionsCommand {
    args: CompletionsArgs,
}

impl CompletionsCommand {
    /// Create a new completions command.
    pub fn new(args: CompletionsArgs) -> Self {
        Self { args }
    }

    fn render(&self, out: &mut dyn std::io::Write) {
        let mut cmd = Cli::command();
        clap_complete::generate(self.args.shell, &mut cmd, "devboot", out);
    }
}

impl Command for CompletionsCommand {
    fn execute(
        &self,
        _host: &mut dyn Host,
        _ui: &mut dyn UserInterface,
    ) -> crate::error::Result<CommandResult> {
        self.render(&mut std::io::stdout());
        Ok(CommandResult::success())
    }
}
