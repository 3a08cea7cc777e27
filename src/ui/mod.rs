//! User-facing terminal output.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for real terminal usage
//! - [`MockUI`] for capturing output in tests
//!
//! Diagnostics go through `tracing`; everything the user is meant to read
//! goes through a `UserInterface`.
//!
//! # Example
//!
//! ```
//! use devboot::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.show_header("devboot");
//! ui.success("Bootstrap complete!");
//! assert!(ui.has_success("complete"));
//! ```

pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, DevbootTheme};

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a status message.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Echo a command about to run (verbose mode only).
    fn command(&mut self, command: &str);

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);

    /// Announce a pipeline step (e.g., "[2/6] Homebrew").
    fn show_step(&mut self, current: usize, total: usize, title: &str);

    /// Show a contextual hint.
    fn show_hint(&mut self, hint: &str);
}
