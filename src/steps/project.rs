//! Project manifest trust and tool installation.

use crate::error::Result;
use crate::host::Host;
use crate::manifest::Manifest;
use crate::shell::Invocation;
use crate::ui::UserInterface;

use super::{run_tolerated, BootstrapContext, Step};

/// Trust the project manifest and install every tool it pins.
///
/// A missing manifest is fatal. `mise trust` and `mise install` failures
/// are reported and the run continues.
#[derive(Debug, Default)]
pub struct ProjectTools;

impl Step for ProjectTools {
    fn name(&self) -> &'static str {
        "project-tools"
    }

    fn title(&self) -> &'static str {
        "Installing project tools"
    }

    fn run(
        &self,
        ctx: &BootstrapContext,
        host: &mut dyn Host,
        ui: &mut dyn UserInterface,
    ) -> Result<()> {
        let manifest = Manifest::require(&ctx.project_root)?;
        ui.message(&format!("Found {}", manifest.file_name()));

        // File name only; the child resolves it against its cwd
        let trust = Invocation::new("mise")
            .arg("trust")
            .arg(manifest.file_name())
            .cwd(&ctx.project_root);
        run_tolerated(host, ui, &trust, "mise trust");

        let install = Invocation::new("mise")
            .arg("install")
            .cwd(&ctx.project_root);
        if run_tolerated(host, ui, &install, "mise install") {
            ui.success(&format!("Installed tools from {}", manifest.file_name()));
        }

        Ok(())
    }
}
