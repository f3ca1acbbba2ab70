//! Error types for lwc-test operations.
//!
//! This module defines [`SetupError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Every failure path of `setup` has its own variant so callers (and the
//!   `--json` payload) can tell them apart
//! - Use `anyhow::Error` (via `SetupError::Other`) for unexpected errors
//! - All errors should provide actionable messages for users

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for lwc-test operations.
#[derive(Debug, Error)]
pub enum SetupError {
    /// The JavaScript runtime could not be invoked.
    #[error("'{tool}' was not found. Install Node.js and make sure it is on your PATH")]
    RuntimeNotFound { tool: String },

    /// The runtime reported a version below the supported minimum.
    #[error("Node.js {found} is not supported. Version {minimum} or later is required")]
    RuntimeVersionUnsupported { found: String, minimum: String },

    /// The package manager could not be invoked.
    #[error("'{tool}' was not found. Install npm and make sure it is on your PATH")]
    PackageManagerNotFound { tool: String },

    /// No recognised project root above the working directory.
    #[error("No project found at or above {start} (looked for {marker})")]
    ProjectNotFound { start: PathBuf, marker: String },

    /// The project has no package manifest.
    #[error("No manifest found at {path}. Run `npm init` in the project root first")]
    ManifestNotFound { path: PathBuf },

    /// The package manifest exists but is not usable.
    #[error("Failed to parse manifest at {path}: {message}")]
    ManifestParse { path: PathBuf, message: String },

    /// The manifest already defines one of the test scripts.
    #[error("package.json already defines test scripts: {}", keys.join(", "))]
    ExistingScripts { keys: Vec<String> },

    /// Installing the development dependency failed.
    #[error("Failed to install {package}: {message}")]
    DependencyInstallFailed { package: String, message: String },

    /// A queued file operation could not be applied.
    #[error("Failed to write {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A `--config` file could not be read or parsed.
    #[error("Failed to load config at {path}: {message}")]
    ConfigLoad { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SetupError {
    /// Stable identifier for the error kind.
    pub fn name(&self) -> &'static str {
        match self {
            Self::RuntimeNotFound { .. } => "RuntimeNotFound",
            Self::RuntimeVersionUnsupported { .. } => "RuntimeVersionUnsupported",
            Self::PackageManagerNotFound { .. } => "PackageManagerNotFound",
            Self::ProjectNotFound { .. } => "ProjectNotFound",
            Self::ManifestNotFound { .. } => "ManifestNotFound",
            Self::ManifestParse { .. } => "ManifestParse",
            Self::ExistingScripts { .. } => "ExistingScripts",
            Self::DependencyInstallFailed { .. } => "DependencyInstallFailed",
            Self::WriteFailed { .. } => "WriteFailed",
            Self::ConfigLoad { .. } => "ConfigLoad",
            Self::Io(_) => "Io",
            Self::Other(_) => "Other",
        }
    }

    /// A one-line remediation hint, when there is an obvious one.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::RuntimeNotFound { .. } | Self::RuntimeVersionUnsupported { .. } => {
                Some("Download a current Node.js release from https://nodejs.org")
            }
            Self::PackageManagerNotFound { .. } => {
                Some("npm ships with Node.js; reinstall Node.js or fix your PATH")
            }
            Self::ProjectNotFound { .. } => {
                Some("Run this command from inside a project, or pass --project")
            }
            Self::ExistingScripts { .. } => {
                Some("Remove the conflicting entries from package.json and run setup again")
            }
            _ => None,
        }
    }
}

/// Result type alias for lwc-test operations.
pub type Result<T> = std::result::Result<T, SetupError>;
