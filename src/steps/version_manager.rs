//! mise installation and activation.

use crate::error::{DevbootError, Result};
use crate::host::Host;
use crate::shell::{ensure_line, Invocation};
use crate::ui::UserInterface;

use super::{
    apply_env_script, query_version, report_line, run_required, run_tolerated, BootstrapContext,
    Step,
};

/// Homebrew formula and executable name of the version manager.
const MISE: &str = "mise";

/// Install or upgrade mise and activate it.
#[derive(Debug, Default)]
pub struct VersionManager;

impl Step for VersionManager {
    fn name(&self) -> &'static str {
        "mise"
    }

    fn title(&self) -> &'static str {
        "Setting up mise"
    }

    fn run(
        &self,
        ctx: &BootstrapContext,
        host: &mut dyn Host,
        ui: &mut dyn UserInterface,
    ) -> Result<()> {
        if host.resolve(MISE).is_some() {
            match query_version(host, MISE) {
                Some(version) => ui.message(&format!("mise already installed ({})", version)),
                None => ui.message("mise already installed"),
            }

            if ctx.config.upgrade_version_manager {
                let upgrade = Invocation::new("brew").args(["upgrade", MISE]);
                if run_tolerated(host, ui, &upgrade, "mise upgrade") {
                    ui.success("mise is up to date");
                }
            } else {
                tracing::debug!("Skipping mise upgrade");
            }
        } else {
            let install = Invocation::new("brew").args(["install", MISE]);
            run_required(host, ui, &install, |message| {
                DevbootError::VersionManagerInstall { message }
            })?;
            ui.success("mise installed");
        }

        let rc = ctx.shell.rc_file(&ctx.home);
        let status = ensure_line(&rc, &ctx.shell.mise_activation())?;
        report_line(ctx, ui, &rc, "mise", status);

        // Shims rather than hooks: this process never runs a prompt
        let activate = Invocation::new(MISE)
            .args(["activate", "bash", "--shims"])
            .captured();
        apply_env_script(host, ui, &activate, "activate mise");

        Ok(())
    }
}
