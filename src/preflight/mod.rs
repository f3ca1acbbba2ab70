//! Environment checks run before any file is touched.
//!
//! The runtime must be invokable and at least the configured minimum
//! version; the package manager must be invokable. Each failure has its own
//! [`SetupError`] variant.

pub mod version;

pub use version::{meets_minimum, normalize, parse_version};

use serde::Serialize;

use crate::config::{SetupConfig, VersionCompare};
use crate::error::{Result, SetupError};
use crate::shell::ToolRunner;

/// Versions reported by the checked tools.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreflightReport {
    pub runtime_version: String,
    pub package_manager_version: String,
}

/// Runs the environment checks.
pub struct PreflightChecker<'a> {
    config: &'a SetupConfig,
    runner: &'a dyn ToolRunner,
}

impl<'a> PreflightChecker<'a> {
    pub fn new(config: &'a SetupConfig, runner: &'a dyn ToolRunner) -> Self {
        Self { config, runner }
    }

    /// Check the runtime, then the package manager.
    pub fn run(&self) -> Result<PreflightReport> {
        let runtime_version = self.check_runtime()?;
        let package_manager_version = self.check_package_manager()?;
        Ok(PreflightReport {
            runtime_version,
            package_manager_version,
        })
    }

    /// Verify the runtime is present and new enough. Returns its version.
    pub fn check_runtime(&self) -> Result<String> {
        let runtime = &self.config.runtime;
        let missing = || SetupError::RuntimeNotFound {
            tool: runtime.command.clone(),
        };

        let output = self
            .runner
            .capture(&runtime.command, &runtime.version_args)
            .map_err(|e| {
                tracing::debug!("Failed to run {}: {}", runtime.command, e);
                missing()
            })?;
        if !output.success {
            return Err(missing());
        }

        let found = normalize(&output.stdout).to_string();
        let minimum = &runtime.minimum_version;

        if runtime.version_compare == VersionCompare::Lexical {
            tracing::warn!(
                "Comparing {} versions as strings; multi-digit majors may sort below {}",
                runtime.command,
                minimum
            );
        } else if parse_version(minimum).is_none() {
            return Err(anyhow::anyhow!("Invalid minimum runtime version '{}'", minimum).into());
        }

        match meets_minimum(&found, minimum, runtime.version_compare) {
            Some(true) => {
                tracing::debug!("{} {} satisfies >= {}", runtime.command, found, minimum);
                Ok(found)
            }
            _ => Err(SetupError::RuntimeVersionUnsupported {
                found,
                minimum: minimum.clone(),
            }),
        }
    }

    /// Verify the package manager is present. Returns its version.
    pub fn check_package_manager(&self) -> Result<String> {
        let pm = &self.config.package_manager;
        let missing = || SetupError::PackageManagerNotFound {
            tool: pm.command.clone(),
        };

        let output = self
            .runner
            .capture(&pm.command, &pm.version_args)
            .map_err(|e| {
                tracing::debug!("Failed to run {}: {}", pm.command, e);
                missing()
            })?;
        if !output.success {
            return Err(missing());
        }

        Ok(normalize(&output.stdout).to_string())
    }
}
