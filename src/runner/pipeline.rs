//! Fixed-order bootstrap pipeline.

use std::time::{Duration, Instant};

use crate::error::{DevbootError, Result};
use crate::host::Host;
use crate::steps::{
    BootstrapContext, NamedTool, OsGuard, PackageManager, ProjectTools, Step, Verify,
    VersionManager,
};
use crate::ui::UserInterface;

/// Result of a completed pipeline run.
#[derive(Debug)]
pub struct PipelineResult {
    /// Names of the steps that ran, in order.
    pub steps: Vec<&'static str>,
    /// Total duration.
    pub duration: Duration,
}

/// Runs bootstrap steps in order, stopping at the first fatal error.
pub struct Pipeline {
    steps: Vec<Box<dyn Step>>,
}

impl Pipeline {
    /// The full bootstrap: OS guard, Homebrew, mise, project tools, named
    /// tool, verification.
    pub fn standard() -> Self {
        Self::with_steps(vec![
            Box::new(OsGuard),
            Box::new(PackageManager),
            Box::new(VersionManager),
            Box::new(ProjectTools),
            Box::new(NamedTool),
            Box::new(Verify),
        ])
    }

    pub fn with_steps(steps: Vec<Box<dyn Step>>) -> Self {
        Self { steps }
    }

    /// Step names in execution order.
    pub fn step_names(&self) -> Vec<&'static str> {
        self.steps.iter().map(|s| s.name()).collect()
    }

    /// Run every step.
    ///
    /// A fatal step error is wrapped in [`DevbootError::StepFailed`] naming
    /// the step. Later steps do not run.
    pub fn run(
        &self,
        ctx: &BootstrapContext,
        host: &mut dyn Host,
        ui: &mut dyn UserInterface,
    ) -> Result<PipelineResult> {
        let start = Instant::now();
        let total = self.steps.len();
        let mut completed = Vec::with_capacity(total);

        ui.show_header("devboot");

        for (index, step) in self.steps.iter().enumerate() {
            ui.show_step(index + 1, total, step.title());
            tracing::debug!("Starting step {}", step.name());

            step.run(ctx, host, ui)
                .map_err(|source| DevbootError::StepFailed {
                    step: step.name().to_string(),
                    source: Box::new(source),
                })?;

            completed.push(step.name());
        }

        let duration = start.elapsed();
        tracing::debug!("Bootstrap finished in {:?}", duration);

        ui.success("Bootstrap complete!");
        ui.show_hint(&format!(
            "Restart your terminal or run `{}` to pick up the new PATH.",
            ctx.shell.reload_command()
        ));

        Ok(PipelineResult {
            steps: completed,
            duration,
        })
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::standard()
    }
}
