//! External tool execution.
//!
//! Tools are invoked directly (no intermediate shell) and the caller blocks
//! until the process exits. There are no timeouts.

use std::io;
use std::path::Path;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// Result of running an external tool.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolOutput {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output (empty when inherited).
    pub stdout: String,

    /// Standard error (empty when inherited).
    pub stderr: String,

    /// Whether the tool exited with code 0.
    pub success: bool,
}

impl ToolOutput {
    /// Create a success result with captured stdout.
    pub fn success(stdout: impl Into<String>) -> Self {
        Self {
            exit_code: Some(0),
            stdout: stdout.into(),
            stderr: String::new(),
            success: true,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: Option<i32>, stderr: impl Into<String>) -> Self {
        Self {
            exit_code,
            stdout: String::new(),
            stderr: stderr.into(),
            success: false,
        }
    }

    /// Short description of why the tool failed.
    pub fn failure_reason(&self) -> String {
        let stderr = self.stderr.trim();
        let code = match self.exit_code {
            Some(code) => format!("exited with code {code}"),
            None => "terminated by signal".to_string(),
        };
        if stderr.is_empty() {
            code
        } else {
            format!("{code}: {}", stderr.lines().last().unwrap_or(stderr))
        }
    }
}

/// Runs external tools.
///
/// The `Err` case means the program could not be started at all (usually
/// not on PATH); a program that starts and fails is an `Ok` with
/// `success == false`.
pub trait ToolRunner {
    /// Run a tool and capture its output.
    fn capture(&self, program: &str, args: &[String]) -> io::Result<ToolOutput>;

    /// Run a tool in `cwd` with the terminal attached.
    fn run_attached(&self, program: &str, args: &[String], cwd: &Path) -> io::Result<ToolOutput>;
}

/// [`ToolRunner`] backed by real processes.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner {
    stdout_to_stderr: bool,
}

impl SystemRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Send the stdout of attached runs to our stderr, keeping our stdout
    /// for machine-readable output.
    pub fn with_stdout_to_stderr(mut self, enabled: bool) -> Self {
        self.stdout_to_stderr = enabled;
        self
    }

    fn attached_stdout(&self) -> Stdio {
        if self.stdout_to_stderr {
            Stdio::from(io::stderr())
        } else {
            Stdio::inherit()
        }
    }
}

impl ToolRunner for SystemRunner {
    fn capture(&self, program: &str, args: &[String]) -> io::Result<ToolOutput> {
        let start = Instant::now();
        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .output()?;
        log_finished(program, args, output.status.code(), start.elapsed());

        Ok(ToolOutput {
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            success: output.status.success(),
        })
    }

    fn run_attached(&self, program: &str, args: &[String], cwd: &Path) -> io::Result<ToolOutput> {
        let start = Instant::now();
        let status = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .stdin(Stdio::inherit())
            .stdout(self.attached_stdout())
            .stderr(Stdio::inherit())
            .status()?;
        log_finished(program, args, status.code(), start.elapsed());

        Ok(ToolOutput {
            exit_code: status.code(),
            success: status.success(),
            ..Default::default()
        })
    }
}

fn log_finished(program: &str, args: &[String], code: Option<i32>, elapsed: Duration) {
    tracing::debug!(
        "{} {} exited with {:?} after {:?}",
        program,
        args.join(" "),
        code,
        elapsed
    );
}
