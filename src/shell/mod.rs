//! Shell integration: process execution, startup-file edits, and
//! parsing of the environment scripts tools print for `eval`.

pub mod command;
pub mod exports;
pub mod platform;
pub mod profile;

pub use command::{execute, CommandResult, Invocation};
pub use exports::{expand, parse_exports};
pub use platform::{detect_shell, is_elevated, ShellType};
pub use profile::{ensure_line, LineStatus};
