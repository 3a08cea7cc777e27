//! Platform-specific shell detection.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Shells whose startup files devboot knows how to edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShellType {
    Bash,
    /// Default login shell on macOS since Catalina.
    #[default]
    Zsh,
    Fish,
}

impl ShellType {
    /// Parse shell type from executable name.
    pub fn from_executable(exe: &str) -> Option<Self> {
        let name = Path::new(exe)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("")
            .to_lowercase();

        match name.as_str() {
            "bash" => Some(ShellType::Bash),
            "zsh" => Some(ShellType::Zsh),
            "fish" => Some(ShellType::Fish),
            _ => None,
        }
    }

    /// Shell name as used by `mise activate <shell>`.
    pub fn name(&self) -> &'static str {
        match self {
            ShellType::Bash => "bash",
            ShellType::Zsh => "zsh",
            ShellType::Fish => "fish",
        }
    }

    /// Startup file read by login shells.
    pub fn login_profile(&self, home: &Path) -> PathBuf {
        match self {
            ShellType::Bash => home.join(".bash_profile"),
            ShellType::Zsh => home.join(".zprofile"),
            ShellType::Fish => home.join(".config/fish/config.fish"),
        }
    }

    /// Startup file read by interactive shells.
    pub fn rc_file(&self, home: &Path) -> PathBuf {
        match self {
            ShellType::Bash => home.join(".bashrc"),
            ShellType::Zsh => home.join(".zshrc"),
            ShellType::Fish => home.join(".config/fish/config.fish"),
        }
    }

    /// Line that puts Homebrew on PATH in future sessions.
    pub fn brew_activation(&self, brew: &Path) -> String {
        match self {
            ShellType::Bash | ShellType::Zsh => {
                format!("eval \"$({} shellenv)\"", brew.display())
            }
            ShellType::Fish => format!("{} shellenv | source", brew.display()),
        }
    }

    /// Line that activates mise in future interactive sessions.
    pub fn mise_activation(&self) -> String {
        match self {
            ShellType::Bash | ShellType::Zsh => {
                format!("eval \"$(mise activate {})\"", self.name())
            }
            ShellType::Fish => "mise activate fish | source".to_string(),
        }
    }

    /// Command the user can run to pick up the new startup lines.
    pub fn reload_command(&self) -> String {
        match self {
            ShellType::Bash => "source ~/.bashrc".to_string(),
            ShellType::Zsh => "source ~/.zshrc".to_string(),
            ShellType::Fish => "source ~/.config/fish/config.fish".to_string(),
        }
    }
}

impl FromStr for ShellType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShellType::from_executable(s).ok_or_else(|| format!("unsupported shell: {}", s))
    }
}

/// Detect the user's shell from `$SHELL`, falling back to zsh.
pub fn detect_shell() -> ShellType {
    let shell = std::env::var("SHELL").unwrap_or_default();
    ShellType::from_executable(&shell).unwrap_or_else(|| {
        tracing::debug!("Unrecognized SHELL '{}', assuming zsh", shell);
        ShellType::default()
    })
}

/// Check if running as root.
pub fn is_elevated() -> bool {
    #[cfg(unix)]
    {
        // SAFETY: geteuid() is a simple syscall that returns the effective user ID
        unsafe { libc::geteuid() == 0 }
    }

    #[cfg(not(unix))]
    {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shell_type_from_executable() {
        assert_eq!(ShellType::from_executable("/bin/bash"), Some(ShellType::Bash));
        assert_eq!(ShellType::from_executable("/bin/zsh"), Some(ShellType::Zsh));
        assert_eq!(
            ShellType::from_executable("/opt/homebrew/bin/fish"),
            Some(ShellType::Fish)
        );
        assert_eq!(ShellType::from_executable("/bin/tcsh"), None);
        assert_eq!(ShellType::from_executable(""), None);
    }

    #[test]
    fn shell_type_parses_from_str() {
        assert_eq!("zsh".parse::<ShellType>(), Ok(ShellType::Zsh));
        assert!("csh".parse::<ShellType>().is_err());
    }

    #[test]
    fn zsh_dotfiles() {
        let home = Path::new("/Users/me");
        assert_eq!(
            ShellType::Zsh.login_profile(home),
            PathBuf::from("/Users/me/.zprofile")
        );
        assert_eq!(
            ShellType::Zsh.rc_file(home),
            PathBuf::from("/Users/me/.zshrc")
        );
    }

    #[test]
    fn fish_uses_one_nested_config_file() {
        let home = Path::new("/Users/me");
        assert_eq!(
            ShellType::Fish.login_profile(home),
            ShellType::Fish.rc_file(home)
        );
        assert!(ShellType::Fish
            .rc_file(home)
            .ends_with(".config/fish/config.fish"));
    }

    #[test]
    fn brew_activation_embeds_path() {
        let brew = Path::new("/opt/homebrew/bin/brew");
        assert_eq!(
            ShellType::Zsh.brew_activation(brew),
            "eval \"$(/opt/homebrew/bin/brew shellenv)\""
        );
        assert_eq!(
            ShellType::Fish.brew_activation(brew),
            "/opt/homebrew/bin/brew shellenv | source"
        );
    }

    #[test]
    fn mise_activation_names_shell() {
        assert_eq!(
            ShellType::Zsh.mise_activation(),
            "eval \"$(mise activate zsh)\""
        );
        assert_eq!(
            ShellType::Bash.mise_activation(),
            "eval \"$(mise activate bash)\""
        );
        assert_eq!(
            ShellType::Fish.mise_activation(),
            "mise activate fish | source"
        );
    }

    #[test]
    fn reload_command_sources_rc_file() {
        assert!(ShellType::Zsh.reload_command().contains(".zshrc"));
        assert!(ShellType::Bash.reload_command().contains(".bashrc"));
    }

    #[test]
    fn default_is_zsh() {
        assert_eq!(ShellType::default(), ShellType::Zsh);
    }
}
