//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations and owns the shared startup work
//! (config loading, picking the process runner).

pub mod dispatcher;
pub mod setup;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
pub use setup::{SetupCommand, SetupReport};
