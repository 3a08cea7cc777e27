//! Visual theme and styling.

use console::Style;

/// Styles for each kind of line devboot prints.
#[derive(Debug, Clone)]
pub struct DevbootTheme {
    pub success: Style,
    pub warning: Style,
    pub error: Style,
    pub banner: Style,
    pub step: Style,
    pub counter: Style,
    pub command: Style,
    pub hint: Style,
}

impl Default for DevbootTheme {
    fn default() -> Self {
        Self::colored()
    }
}

impl DevbootTheme {
    /// Colored theme for terminals.
    pub fn colored() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().yellow(),
            error: Style::new().red().bold(),
            banner: Style::new().bold().cyan(),
            step: Style::new().bold(),
            counter: Style::new().dim(),
            command: Style::new().dim(),
            hint: Style::new().cyan(),
        }
    }

    /// Theme without escape codes (pipes, `NO_COLOR`, `--no-color`).
    pub fn plain() -> Self {
        let s = Style::new();
        Self {
            success: s.clone(),
            warning: s.clone(),
            error: s.clone(),
            banner: s.clone(),
            step: s.clone(),
            counter: s.clone(),
            command: s.clone(),
            hint: s,
        }
    }

    /// Pick colored or plain for the current stdout.
    pub fn detect() -> Self {
        if should_use_colors() {
            Self::colored()
        } else {
            Self::plain()
        }
    }

    pub fn format_success(&self, msg: &str) -> String {
        self.success.apply_to(format!("✓ {}", msg)).to_string()
    }

    pub fn format_warning(&self, msg: &str) -> String {
        self.warning.apply_to(format!("! {}", msg)).to_string()
    }

    pub fn format_error(&self, msg: &str) -> String {
        self.error.apply_to(format!("✗ {}", msg)).to_string()
    }

    /// `[2/6] Setting up Homebrew`
    pub fn format_step(&self, current: usize, total: usize, title: &str) -> String {
        format!(
            "{} {}",
            self.counter.apply_to(format!("[{}/{}]", current, total)),
            self.step.apply_to(title)
        )
    }

    /// `$ brew install mise`
    pub fn format_command(&self, command: &str) -> String {
        self.command.apply_to(format!("$ {}", command)).to_string()
    }

    /// `==> devboot`
    pub fn format_banner(&self, title: &str) -> String {
        self.banner.apply_to(format!("==> {}", title)).to_string()
    }

    pub fn format_hint(&self, hint: &str) -> String {
        self.hint.apply_to(hint).to_string()
    }
}

/// Colors are off when `NO_COLOR` is set or stdout is not a terminal.
pub fn should_use_colors() -> bool {
    std::env::var_os("NO_COLOR").is_none() && console::Term::stdout().is_term()
}
