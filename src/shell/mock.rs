//! Scripted [`ToolRunner`] for tests.
//!
//! # Example
//!
//! ```
//! use lwc_test::shell::{MockRunner, ToolRunner};
//!
//! let runner = MockRunner::new().with_output("node", "v18.17.0\n");
//! let output = runner.capture("node", &["-v".to_string()]).unwrap();
//! assert_eq!(output.stdout, "v18.17.0\n");
//! assert!(runner.capture("npm", &[]).is_err());
//! assert_eq!(runner.calls().len(), 2);
//! ```

use std::cell::RefCell;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use super::command::{ToolOutput, ToolRunner};

/// A recorded invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub program: String,
    pub args: Vec<String>,
    /// Set for attached runs.
    pub cwd: Option<PathBuf>,
}

impl RecordedCall {
    /// `program arg1 arg2 ...`
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Runner that returns canned results per program.
///
/// Programs with no configured result behave as if they are not installed.
#[derive(Debug, Default)]
pub struct MockRunner {
    outputs: HashMap<String, ToolOutput>,
    attached: HashMap<String, ToolOutput>,
    calls: RefCell<Vec<RecordedCall>>,
}

impl MockRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `program` succeed with `stdout`.
    pub fn with_output(mut self, program: &str, stdout: &str) -> Self {
        self.outputs
            .insert(program.to_string(), ToolOutput::success(stdout));
        self
    }

    /// Make `program` start but exit with `code`.
    pub fn with_failure(mut self, program: &str, code: i32, stderr: &str) -> Self {
        self.outputs
            .insert(program.to_string(), ToolOutput::failure(Some(code), stderr));
        self
    }

    /// Make attached runs of `program` exit with `code`, leaving captured
    /// runs as configured.
    pub fn with_attached_failure(mut self, program: &str, code: i32, stderr: &str) -> Self {
        self.attached
            .insert(program.to_string(), ToolOutput::failure(Some(code), stderr));
        self
    }

    /// All invocations so far, in order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.borrow().clone()
    }

    /// Whether any invocation's command line starts with `prefix`.
    pub fn was_called(&self, prefix: &str) -> bool {
        self.calls
            .borrow()
            .iter()
            .any(|c| c.command_line().starts_with(prefix))
    }

    fn respond(&self, program: &str, args: &[String], cwd: Option<&Path>) -> io::Result<ToolOutput> {
        self.calls.borrow_mut().push(RecordedCall {
            program: program.to_string(),
            args: args.to_vec(),
            cwd: cwd.map(Path::to_path_buf),
        });

        let attached = cwd.and_then(|_| self.attached.get(program));
        attached.or_else(|| self.outputs.get(program)).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("{program}: command not found"),
            )
        })
    }
}

impl ToolRunner for MockRunner {
    fn capture(&self, program: &str, args: &[String]) -> io::Result<ToolOutput> {
        self.respond(program, args, None)
    }

    fn run_attached(&self, program: &str, args: &[String], cwd: &Path) -> io::Result<ToolOutput> {
        self.respond(program, args, Some(cwd))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_calls_with_cwd() {
        let runner = MockRunner::new().with_output("npm", "");
        runner
            .run_attached("npm", &["add".to_string()], Path::new("/work"))
            .unwrap();

        let calls = runner.calls();
        assert_eq!(calls[0].cwd.as_deref(), Some(Path::new("/work")));
        assert_eq!(calls[0].command_line(), "npm add");
        assert!(runner.was_called("npm add"));
    }

    #[test]
    fn attached_failure_only_affects_attached_runs() {
        let runner = MockRunner::new()
            .with_output("npm", "9.8.1\n")
            .with_attached_failure("npm", 1, "ERR! 404");

        assert!(runner.capture("npm", &[]).unwrap().success);
        let output = runner.run_attached("npm", &[], Path::new("/work")).unwrap();
        assert!(!output.success);
        assert_eq!(output.stderr, "ERR! 404");
    }

    #[test]
    fn failure_is_ok_but_unsuccessful() {
        let runner = MockRunner::new().with_failure("npm", 1, "boom");
        let output = runner.capture("npm", &[]).unwrap();
        assert!(!output.success);
        assert_eq!(output.exit_code, Some(1));
    }

    #[test]
    fn unknown_program_is_not_found() {
        let err = MockRunner::new().capture("node", &[]).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
