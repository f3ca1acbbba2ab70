//! lwc-test - Jest unit test scaffolding for Lightning Web Components projects.
//!
//! `lwc-test setup` checks that Node.js and npm are available, finds the
//! project root, merges the Jest test scripts into `package.json`, writes a
//! `jest.config.js` and a `.forceignore` entry when they are missing, and
//! installs `@salesforce/lwc-jest`. Running it again changes nothing.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Built-in settings and YAML overrides
//! - [`error`] - Error types and result aliases
//! - [`installer`] - Development dependency installation
//! - [`messages`] - User-facing message table
//! - [`planner`] - Idempotent file change planning
//! - [`preflight`] - Runtime and package manager checks
//! - [`project`] - Project root discovery and the package manifest
//! - [`shell`] - External tool invocation
//! - [`ui`] - Spinners and terminal output
//! - [`writer`] - Deferred, ordered file writes
//!
//! # Example
//!
//! ```
//! use lwc_test::config::SetupConfig;
//! use lwc_test::planner::{plan_scripts, ScriptsOutcome};
//! use lwc_test::project::Manifest;
//! use std::path::Path;
//!
//! let config = SetupConfig::default();
//! let mut manifest = Manifest::parse(Path::new("package.json"), r#"{"name": "app"}"#).unwrap();
//! let outcome = plan_scripts(&mut manifest, &config.scripts).unwrap();
//! assert_eq!(outcome, ScriptsOutcome::Set);
//! assert!(manifest.to_json_string().unwrap().contains("\"test:unit\": \"lwc-jest\""));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod installer;
pub mod messages;
pub mod planner;
pub mod preflight;
pub mod project;
pub mod shell;
pub mod ui;
pub mod writer;

pub use error::{Result, SetupError};
