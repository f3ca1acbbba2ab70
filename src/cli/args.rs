//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// lwc-test - Jest unit test scaffolding for Lightning Web Components projects.
#[derive(Debug, Parser)]
#[command(name = "lwc-test")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a YAML file overriding the built-in setup settings
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory to start the project search from (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Print a single JSON result object instead of progress output
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Set up Jest unit testing in the project (default if no command specified)
    Setup(SetupArgs),
}

/// Arguments for the `setup` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct SetupArgs {
    /// Show the planned file changes without writing or installing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Write the files but do not install the test dependency
    #[arg(long)]
    pub skip_install: bool,

    /// Fail instead of warning when test scripts already exist
    #[arg(long)]
    pub strict: bool,
}
