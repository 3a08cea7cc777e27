//! Verification of declared project tools.
//!
//! Every tool the manifest declares is looked up on the search path and
//! reported with its self-reported version. Missing tools are warnings,
//! never errors: the report exists to surface what `mise install` could
//! not provide.

use std::path::PathBuf;

use crate::error::Result;
use crate::host::Host;
use crate::manifest::Manifest;
use crate::ui::UserInterface;

use super::{query_version, BootstrapContext, Step};

/// Placeholder shown when `<tool> --version` fails.
pub const UNKNOWN_VERSION: &str = "Unknown version";

/// Outcome for one declared tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolStatus {
    /// Found on the search path.
    Installed { path: PathBuf, version: String },
    /// Not resolvable on the search path.
    Missing,
}

/// One line of the verification report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolReport {
    pub name: String,
    pub status: ToolStatus,
}

impl ToolReport {
    pub fn is_installed(&self) -> bool {
        matches!(self.status, ToolStatus::Installed { .. })
    }
}

/// Verification results in manifest order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationReport {
    /// Manifest the tools were read from.
    pub manifest: PathBuf,
    pub tools: Vec<ToolReport>,
}

impl VerificationReport {
    /// Tools that were not found.
    pub fn missing(&self) -> impl Iterator<Item = &ToolReport> {
        self.tools.iter().filter(|t| !t.is_installed())
    }

    /// Print one line per tool.
    pub fn print(&self, ui: &mut dyn UserInterface) {
        if self.tools.is_empty() {
            ui.warning("No tools declared in manifest");
            return;
        }

        for tool in &self.tools {
            match &tool.status {
                ToolStatus::Installed { version, .. } => {
                    ui.success(&format!("{}: {}", tool.name, version))
                }
                ToolStatus::Missing => {
                    ui.warning(&format!("{} is not installed or not on PATH", tool.name))
                }
            }
        }
    }
}

/// Check every tool the project manifest declares.
///
/// A missing or unparseable manifest is an error.
pub fn verify_tools(ctx: &BootstrapContext, host: &mut dyn Host) -> Result<VerificationReport> {
    let manifest = Manifest::require(&ctx.project_root)?;
    let entries = manifest.tools()?;
    tracing::debug!(
        "Verifying {} tools from {}",
        entries.len(),
        manifest.path().display()
    );

    let tools = entries
        .into_iter()
        .map(|entry| {
            let status = match host.resolve(&entry.binary) {
                Some(path) => ToolStatus::Installed {
                    version: query_version(host, &entry.binary)
                        .unwrap_or_else(|| UNKNOWN_VERSION.to_string()),
                    path,
                },
                None => ToolStatus::Missing,
            };
            ToolReport {
                name: entry.name,
                status,
            }
        })
        .collect();

    Ok(VerificationReport {
        manifest: manifest.path().to_path_buf(),
        tools,
    })
}

/// Print the verification report.
#[derive(Debug, Default)]
pub struct Verify;

impl Step for Verify {
    fn name(&self) -> &'static str {
        "verify"
    }

    fn title(&self) -> &'static str {
        "Verifying project tools"
    }

    fn run(
        &self,
        ctx: &BootstrapContext,
        host: &mut dyn Host,
        ui: &mut dyn UserInterface,
    ) -> Result<()> {
        let report = verify_tools(ctx, host)?;
        report.print(ui);
        Ok(())
    }
}
