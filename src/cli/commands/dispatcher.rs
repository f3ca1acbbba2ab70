//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::PathBuf;

use crate::cli::args::{Cli, Commands, SetupArgs};
use crate::config::load_config;
use crate::error::Result;
use crate::shell::SystemRunner;
use crate::ui::UserInterface;

use super::setup::SetupCommand;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] carrying the exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Exit code to use. Failures travel as errors and exit with 1.
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self { exit_code: 0 }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    start_dir: PathBuf,
}

impl CommandDispatcher {
    /// Create a new dispatcher that searches for the project from `start_dir`.
    pub fn new(start_dir: PathBuf) -> Self {
        Self { start_dir }
    }

    /// Dispatch and execute a command.
    ///
    /// Loads the setup settings named by `--config` (or the built-in
    /// defaults), then routes the subcommand. No subcommand means `setup`.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = load_config(cli.config.as_deref())?;
        // --json keeps stdout for the payload, so the install prints to stderr
        let runner = SystemRunner::new().with_stdout_to_stderr(cli.json);

        let args = match &cli.command {
            Some(Commands::Setup(args)) => args.clone(),
            None => SetupArgs::default(),
        };

        let cmd = SetupCommand::new(&self.start_dir, config, args, &runner).with_json(cli.json);
        cmd.execute(ui)
    }
}
