//! Homebrew installation and activation.

use std::path::{Path, PathBuf};

use crate::error::{DevbootError, Result};
use crate::host::Host;
use crate::shell::{ensure_line, Invocation};
use crate::ui::UserInterface;

use super::{
    apply_env_script, query_version, report_line, run_required, BootstrapContext, Step,
};

/// Homebrew prefixes, Apple Silicon first.
pub const BREW_LOCATIONS: [&str; 2] = ["/opt/homebrew/bin/brew", "/usr/local/bin/brew"];

/// Install Homebrew if missing and put it on PATH.
#[derive(Debug, Default)]
pub struct PackageManager;

impl PackageManager {
    fn install(
        &self,
        ctx: &BootstrapContext,
        host: &mut dyn Host,
        ui: &mut dyn UserInterface,
    ) -> Result<()> {
        let url = &ctx.config.homebrew_install_url;
        ui.message("Homebrew not found, installing");
        tracing::debug!("Downloading Homebrew installer from {}", url);

        let script = host
            .fetch(url)
            .map_err(|e| DevbootError::PackageManagerInstall {
                message: e.to_string(),
            })?;

        let installer = Invocation::new("/bin/bash")
            .arg("-c")
            .arg(script)
            .env("NONINTERACTIVE", "1");

        run_required(host, ui, &installer, |message| {
            DevbootError::PackageManagerInstall { message }
        })?;

        ui.success("Homebrew installed");
        Ok(())
    }

    fn activate(
        &self,
        ctx: &BootstrapContext,
        host: &mut dyn Host,
        ui: &mut dyn UserInterface,
    ) -> Result<()> {
        let Some(brew) = locate_brew(host) else {
            ui.warning(&format!(
                "Homebrew not found at {}; it may not be on PATH until you open a new terminal",
                BREW_LOCATIONS.join(" or ")
            ));
            return Ok(());
        };

        let shellenv = Invocation::new(brew.display().to_string())
            .arg("shellenv")
            .captured();
        apply_env_script(host, ui, &shellenv, "add Homebrew to PATH");

        let profile = ctx.shell.login_profile(&ctx.home);
        let status = ensure_line(&profile, &ctx.shell.brew_activation(&brew))?;
        report_line(ctx, ui, &profile, "Homebrew", status);

        Ok(())
    }
}

/// First standard Homebrew location holding an executable.
pub fn locate_brew(host: &dyn Host) -> Option<PathBuf> {
    BREW_LOCATIONS
        .iter()
        .map(Path::new)
        .find(|path| host.is_executable(path))
        .map(Path::to_path_buf)
}

impl Step for PackageManager {
    fn name(&self) -> &'static str {
        "homebrew"
    }

    fn title(&self) -> &'static str {
        "Setting up Homebrew"
    }

    fn run(
        &self,
        ctx: &BootstrapContext,
        host: &mut dyn Host,
        ui: &mut dyn UserInterface,
    ) -> Result<()> {
        if host.resolve("brew").is_some() {
            match query_version(host, "brew") {
                Some(version) => ui.message(&format!("Homebrew already installed ({})", version)),
                None => ui.warning("Homebrew is installed but `brew --version` failed"),
            }
        } else {
            self.install(ctx, host, ui)?;
        }

        self.activate(ctx, host, ui)
    }
}
