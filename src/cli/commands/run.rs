//! Run command implementation.
//!
//! The `devboot run` command executes the full bootstrap pipeline.

use crate::error::Result;
use crate::host::Host;
use crate::runner::Pipeline;
use crate::steps::BootstrapContext;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The run command implementation.
pub struct RunCommand {
    ctx: BootstrapContext,
    pipeline: Pipeline,
}

impl RunCommand {
    /// Create a run command for the standard pipeline.
    pub fn new(ctx: BootstrapContext) -> Self {
        Self {
            ctx,
            pipeline: Pipeline::standard(),
        }
    }

    /// Get the bootstrap context.
    pub fn context(&self) -> &BootstrapContext {
        &self.ctx
    }
}

impl Command for RunCommand {
    fn execute(&self, host: &mut dyn Host, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match self.pipeline.run(&self.ctx, host, ui) {
            Ok(result) => {
                tracing::debug!("Completed steps: {}", result.steps.join(", "));
                Ok(CommandResult::success())
            }
            Err(e) => {
                ui.error(&e.to_string());
                Ok(CommandResult::failure(1))
            }
        }
    }
}
