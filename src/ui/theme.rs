//! Terminal styling.

use console::Style;

use super::StatusKind;

/// Styles for each kind of line `setup` prints.
#[derive(Debug, Clone)]
pub struct Theme {
    pub success: Style,
    pub warning: Style,
    pub error: Style,
    /// Secondary text such as summary details.
    pub dim: Style,
    pub header: Style,
    pub border: Style,
    pub hint: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme {
    /// Colored theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
            header: Style::new().bold().magenta(),
            border: Style::new().dim(),
            hint: Style::new().magenta().dim(),
        }
    }

    /// Theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        let none = Style::new();
        Self {
            success: none.clone(),
            warning: none.clone(),
            error: none.clone(),
            dim: none.clone(),
            header: none.clone(),
            border: none.clone(),
            hint: none,
        }
    }

    pub fn format_success(&self, msg: &str) -> String {
        icon_line(&self.success, "✓", msg)
    }

    pub fn format_warning(&self, msg: &str) -> String {
        icon_line(&self.warning, "⚠", msg)
    }

    pub fn format_error(&self, msg: &str) -> String {
        icon_line(&self.error, "✗", msg)
    }

    pub fn format_header(&self, title: &str) -> String {
        icon_line(&self.header, "◆", title)
    }

    /// Icon for a summary row, colored by its status.
    pub fn format_status(&self, status: StatusKind) -> String {
        let style = match status {
            StatusKind::Done => &self.success,
            StatusKind::Skipped => &self.dim,
            StatusKind::Planned => &self.header,
        };
        style.apply_to(status.icon()).to_string()
    }
}

fn icon_line(style: &Style, icon: &str, msg: &str) -> String {
    style.apply_to(format!("{} {}", icon, msg)).to_string()
}

/// Check if colors should be used.
pub fn should_use_colors() -> bool {
    // https://no-color.org/
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}
