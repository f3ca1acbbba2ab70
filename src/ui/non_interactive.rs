//! Non-interactive UI for CI/headless environments.

use super::theme::Theme;
use super::{OutputMode, SpinnerHandle, SummaryRow, UserInterface};

/// UI implementation for non-interactive mode.
///
/// Spinners become a single start line followed by the finish line. In CI
/// the start line is dropped since log-based environments only need the
/// outcome.
pub struct NonInteractiveUI {
    mode: OutputMode,
    is_ci: bool,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        Self {
            mode,
            is_ci: crate::shell::is_ci(),
        }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_messages() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", Theme::plain().format_success(msg));
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("{}", Theme::plain().format_warning(msg));
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{}", Theme::plain().format_error(msg));
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_messages() {
            println!("\n{}\n", Theme::plain().format_header(title));
        }
    }

    fn show_hint(&mut self, hint: &str) {
        eprintln!("  Hint: {}", hint);
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        let visible = self.mode.shows_spinners();
        if visible && !self.is_ci {
            println!("{}", message);
        }
        Box::new(LineSpinner { visible })
    }

    fn show_summary(&mut self, rows: &[SummaryRow]) {
        if !self.mode.shows_status() || rows.is_empty() {
            return;
        }

        println!();
        println!("Summary:");
        for row in rows {
            println!("  {} {}  {}", row.status.icon(), row.name, row.detail);
        }
    }

}

/// Spinner stand-in that prints only the outcome.
struct LineSpinner {
    visible: bool,
}

impl SpinnerHandle for LineSpinner {
    fn finish_success(&mut self, msg: &str) {
        if self.visible {
            println!("{}", Theme::plain().format_success(msg));
        }
    }

    fn finish_error(&mut self, msg: &str) {
        eprintln!("{}", Theme::plain().format_error(msg));
    }
}
