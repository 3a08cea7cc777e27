//! Configuration schema.
//!
//! ```yaml
//! # ~/.devboot/config.yml or <project>/.devboot/config.yml
//! tool: awscli
//! shell: zsh
//! upgrade_version_manager: true
//! homebrew_install_url: https://raw.githubusercontent.com/Homebrew/install/HEAD/install.sh
//! ```

use serde::Deserialize;

use crate::shell::ShellType;

/// Homebrew formula installed by the named-tool step unless configured.
pub const DEFAULT_TOOL: &str = "awscli";

/// Official non-interactive Homebrew installer.
pub const DEFAULT_HOMEBREW_INSTALL_URL: &str =
    "https://raw.githubusercontent.com/Homebrew/install/HEAD/install.sh";

/// Merged devboot configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DevbootConfig {
    /// Homebrew formula for the named-tool step.
    pub tool: String,

    /// Shell whose startup files receive activation lines.
    /// Detected from `$SHELL` when unset.
    pub shell: Option<ShellType>,

    /// Run `brew upgrade mise` when mise is already installed.
    pub upgrade_version_manager: bool,

    /// URL of the Homebrew install script.
    pub homebrew_install_url: String,
}

impl Default for DevbootConfig {
    fn default() -> Self {
        Self {
            tool: DEFAULT_TOOL.to_string(),
            shell: None,
            upgrade_version_manager: true,
            homebrew_install_url: DEFAULT_HOMEBREW_INSTALL_URL.to_string(),
        }
    }
}
