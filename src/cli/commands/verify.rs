//! Verify command implementation.
//!
//! The `devboot verify` command reports which declared project tools are
//! installed, without installing anything.

use crate::error::Result;
use crate::host::Host;
use crate::steps::{verify_tools, BootstrapContext};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The verify command implementation.
pub struct VerifyCommand {
    ctx: BootstrapContext,
}

impl VerifyCommand {
    /// Create a new verify command.
    pub fn new(ctx: BootstrapContext) -> Self {
        Self { ctx }
    }
}

impl Command for VerifyCommand {
    fn execute(&self, host: &mut dyn Host, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let report = match verify_tools(&self.ctx, host) {
            Ok(report) => report,
            Err(e) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(1));
            }
        };

        ui.show_header(&format!("Tools from {}", self.ctx.display_path(&report.manifest)));
        report.print(ui);

        Ok(CommandResult::success())
    }
}
