//! Terminal UI implementation.

use console::Term;
use std::io::Write;

use super::theme::{should_use_colors, Theme};
use super::{
    NonInteractiveUI, OutputMode, ProgressSpinner, SpinnerHandle, SummaryRow, UserInterface,
};

/// Terminal-based UI implementation.
pub struct TerminalUI {
    term: Term,
    mode: OutputMode,
    theme: Theme,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            Theme::new()
        } else {
            Theme::plain()
        };

        Self {
            term: Term::stdout(),
            mode,
            theme,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_messages() {
            writeln!(self.term, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_warning(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        // Errors always shown
        let _ = Term::stderr().write_line(&self.theme.format_error(msg));
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_messages() {
            writeln!(self.term, "\n{}\n", self.theme.format_header(title)).ok();
        }
    }

    fn show_hint(&mut self, hint: &str) {
        let _ = Term::stderr().write_line(&format!(
            "  {}",
            self.theme.hint.apply_to(format!("Hint: {}", hint))
        ));
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_spinners() {
            Box::new(ProgressSpinner::new(message, self.theme.clone()))
        } else {
            Box::new(ProgressSpinner::hidden())
        }
    }

    fn show_summary(&mut self, rows: &[SummaryRow]) {
        if !self.mode.shows_status() || rows.is_empty() {
            return;
        }

        let b = &self.theme.border;
        let width = rows.iter().map(|r| r.name.len()).max().unwrap_or(0);

        writeln!(self.term).ok();
        writeln!(
            self.term,
            "  {} {}",
            b.apply_to("┌─"),
            b.apply_to("Summary ──────────────────────────")
        )
        .ok();
        for row in rows {
            writeln!(
                self.term,
                "  {} {} {:<width$}  {}",
                b.apply_to("│"),
                self.theme.format_status(row.status),
                row.name,
                self.theme.dim.apply_to(&row.detail),
                width = width
            )
            .ok();
        }
        writeln!(
            self.term,
            "  {}",
            b.apply_to("└────────────────────────────────────")
        )
        .ok();
    }
}

/// Create the appropriate UI based on environment.
pub fn create_ui(interactive: bool, mode: OutputMode) -> Box<dyn UserInterface> {
    if interactive && Term::stdout().is_term() {
        Box::new(TerminalUI::new(mode))
    } else {
        Box::new(NonInteractiveUI::new(mode))
    }
}
