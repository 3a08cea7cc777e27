//! Operating system guard.

use crate::error::{DevbootError, Result};
use crate::host::Host;
use crate::shell::Invocation;
use crate::ui::UserInterface;

use super::{BootstrapContext, Step};

/// Kernel name reported by `uname -s` on macOS.
pub const SUPPORTED_KERNEL: &str = "Darwin";

/// Confirm the host kernel is macOS.
///
/// Any other kernel name, or a failure to run `uname`, is fatal.
pub fn check_platform(host: &mut dyn Host) -> Result<()> {
    let invocation = Invocation::new("uname").arg("-s").captured();
    let detected = match host.run(&invocation) {
        Ok(result) if result.success => result.first_line().unwrap_or("").to_string(),
        Ok(result) => {
            tracing::debug!("uname failed: {}", result.describe_failure());
            String::new()
        }
        Err(e) => {
            tracing::debug!("uname failed: {}", e);
            String::new()
        }
    };

    if detected == SUPPORTED_KERNEL {
        return Ok(());
    }

    Err(DevbootError::UnsupportedPlatform {
        detected: if detected.is_empty() {
            "unknown".to_string()
        } else {
            detected
        },
    })
}

/// Refuse to bootstrap anything but macOS.
#[derive(Debug, Default)]
pub struct OsGuard;

impl Step for OsGuard {
    fn name(&self) -> &'static str {
        "os-guard"
    }

    fn title(&self) -> &'static str {
        "Checking operating system"
    }

    fn run(
        &self,
        _ctx: &BootstrapContext,
        host: &mut dyn Host,
        ui: &mut dyn UserInterface,
    ) -> Result<()> {
        check_platform(host)?;
        ui.message("macOS detected");

        if host.is_elevated() {
            ui.warning(
                "Running as root. Homebrew refuses to install as root; \
                 run devboot as your normal user.",
            );
        }

        Ok(())
    }
}
