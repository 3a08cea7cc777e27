//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! Commands are dispatched via [`CommandDispatcher`], which loads the
//! layered configuration, applies command-line overrides, and routes the
//! subcommand (`devboot run`, `devboot verify`) to its implementation.

pub mod completions;
pub mod dispatcher;
pub mod run;
pub mod verify;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
