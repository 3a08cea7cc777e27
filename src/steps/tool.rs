//! Named CLI installation through Homebrew.

use crate::error::{DevbootError, Result};
use crate::host::Host;
use crate::shell::Invocation;
use crate::ui::UserInterface;

use super::{run_required, BootstrapContext, Step};

/// Install the configured tool (`awscli` unless overridden).
#[derive(Debug, Default)]
pub struct NamedTool;

impl Step for NamedTool {
    fn name(&self) -> &'static str {
        "tool"
    }

    fn title(&self) -> &'static str {
        "Installing named tool"
    }

    fn run(
        &self,
        ctx: &BootstrapContext,
        host: &mut dyn Host,
        ui: &mut dyn UserInterface,
    ) -> Result<()> {
        let tool = ctx.config.tool.as_str();
        let install = Invocation::new("brew").args(["install", tool]);

        run_required(host, ui, &install, |message| DevbootError::ToolInstall {
            tool: tool.to_string(),
            message,
        })?;

        ui.success(&format!("{} installed", tool));
        Ok(())
    }
}
