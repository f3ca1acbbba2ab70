//! Development dependency installation.
//!
//! The last step of setup: the package manager adds the test dependency to
//! the project with the terminal attached, so its own progress output is
//! shown as-is.

use std::path::Path;

use crate::config::SetupConfig;
use crate::error::{Result, SetupError};
use crate::shell::ToolRunner;

/// Installs the configured development dependency.
pub struct DependencyInstaller<'a> {
    config: &'a SetupConfig,
    runner: &'a dyn ToolRunner,
}

impl<'a> DependencyInstaller<'a> {
    pub fn new(config: &'a SetupConfig, runner: &'a dyn ToolRunner) -> Self {
        Self { config, runner }
    }

    /// Name of the package being installed.
    pub fn package(&self) -> &str {
        &self.config.dev_dependency
    }

    /// Full argument list, e.g. `add --save-dev @salesforce/lwc-jest`.
    pub fn install_args(&self) -> Vec<String> {
        let mut args = self.config.package_manager.install_args.clone();
        args.push(self.config.dev_dependency.clone());
        args
    }

    /// Run the install in `project_root`.
    pub fn install(&self, project_root: &Path) -> Result<()> {
        let program = &self.config.package_manager.command;
        let args = self.install_args();
        tracing::info!("Running {} {}", program, args.join(" "));

        let failed = |message: String| SetupError::DependencyInstallFailed {
            package: self.package().to_string(),
            message,
        };

        let output = self
            .runner
            .run_attached(program, &args, project_root)
            .map_err(|e| failed(format!("could not run {program}: {e}")))?;

        if !output.success {
            return Err(failed(output.failure_reason()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::MockRunner;

    #[test]
    fn install_args_end_with_package() {
        let config = SetupConfig::default();
        let runner = MockRunner::new();
        let installer = DependencyInstaller::new(&config, &runner);

        assert_eq!(
            installer.install_args(),
            ["add", "--save-dev", "@salesforce/lwc-jest"]
        );
    }

    #[test]
    fn install_runs_package_manager_in_project_root() {
        let config = SetupConfig::default();
        let runner = MockRunner::new().with_output("npm", "");

        DependencyInstaller::new(&config, &runner)
            .install(Path::new("/work/app"))
            .unwrap();

        let calls = runner.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(
            calls[0].command_line(),
            "npm add --save-dev @salesforce/lwc-jest"
        );
        assert_eq!(calls[0].cwd.as_deref(), Some(Path::new("/work/app")));
    }

    #[test]
    fn nonzero_exit_is_install_failure() {
        let config = SetupConfig::default();
        let runner = MockRunner::new().with_failure("npm", 1, "npm ERR! network");

        let err = DependencyInstaller::new(&config, &runner)
            .install(Path::new("/work/app"))
            .unwrap_err();

        match err {
            SetupError::DependencyInstallFailed { package, message } => {
                assert_eq!(package, "@salesforce/lwc-jest");
                assert!(message.contains("exited with code 1"));
                assert!(message.contains("npm ERR! network"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn spawn_failure_is_install_failure() {
        let config = SetupConfig::default();
        let runner = MockRunner::new();

        let err = DependencyInstaller::new(&config, &runner)
            .install(Path::new("/work/app"))
            .unwrap_err();

        assert_eq!(err.name(), "DependencyInstallFailed");
        assert!(err.to_string().contains("could not run npm"));
    }
}
