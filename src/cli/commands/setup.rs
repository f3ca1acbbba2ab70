//! Setup command implementation.
//!
//! The `lwc-test setup` command checks the environment, plans the three file
//! changes, writes them in one flush and installs the test dependency. A
//! step never runs if an earlier one failed.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Serialize;
use serde_json::json;

use crate::cli::args::SetupArgs;
use crate::config::SetupConfig;
use crate::error::{Result, SetupError};
use crate::installer::DependencyInstaller;
use crate::messages;
use crate::planner::{IgnoreFileOutcome, JestConfigOutcome, Planner, ScriptsOutcome, SetupPlan};
use crate::preflight::{PreflightChecker, PreflightReport};
use crate::project::Project;
use crate::shell::ToolRunner;
use crate::ui::{OutputMode, StatusKind, SummaryRow, UserInterface};
use crate::writer::{BatchWriter, PendingWrite};

use super::dispatcher::{Command, CommandResult};

/// Everything a finished setup run decided and did.
#[derive(Debug, Clone, Serialize)]
pub struct SetupReport {
    pub project_root: PathBuf,
    pub dry_run: bool,
    pub preflight: PreflightReport,
    pub plan: SetupPlan,
    /// Operations applied, or in a dry run the ones that would have been.
    pub files: Vec<PendingWrite>,
    /// `None` when the install was skipped or in a dry run.
    pub installed: Option<String>,
}

/// `--json` payload for a successful run.
pub fn json_success(report: &SetupReport) -> Result<String> {
    let result = serde_json::to_value(report).context("Failed to serialize setup report")?;
    Ok(json!({ "status": 0, "result": result }).to_string())
}

/// `--json` payload for a failed run.
pub fn json_error(err: &SetupError) -> String {
    json!({
        "status": 1,
        "name": err.name(),
        "message": err.to_string(),
    })
    .to_string()
}

/// The setup command implementation.
pub struct SetupCommand<'a> {
    start_dir: PathBuf,
    config: SetupConfig,
    args: SetupArgs,
    runner: &'a dyn ToolRunner,
    json: bool,
}

impl<'a> SetupCommand<'a> {
    /// Create a new setup command searching for the project from `start_dir`.
    pub fn new(
        start_dir: &Path,
        config: SetupConfig,
        args: SetupArgs,
        runner: &'a dyn ToolRunner,
    ) -> Self {
        Self {
            start_dir: start_dir.to_path_buf(),
            config,
            args,
            runner,
            json: false,
        }
    }

    /// Print the JSON payload on success.
    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    /// Run the whole pipeline and return what happened.
    pub fn run(&self, ui: &mut dyn UserInterface) -> Result<SetupReport> {
        ui.show_header(messages::HEADER);

        let preflight = self.check_environment(ui)?;

        let project = Project::resolve(&self.start_dir, &self.config.files)?;
        tracing::debug!("Project root: {}", project.root().display());
        if ui.output_mode() == OutputMode::Verbose {
            ui.message(&messages::project_root(&project.root().display().to_string()));
        }
        let mut manifest = project.load_manifest()?;

        let mut writer = BatchWriter::new();
        let plan = Planner::new(&self.config).plan(&project, &mut manifest, &mut writer)?;

        if let ScriptsOutcome::Skip { existing } = &plan.scripts {
            if self.args.strict {
                return Err(SetupError::ExistingScripts {
                    keys: existing.clone(),
                });
            }
        }
        self.report_plan(&plan, ui);

        let files = writer.pending().to_vec();
        let mut installed = None;

        if self.args.dry_run {
            for op in &files {
                let path = op.path.strip_prefix(project.root()).unwrap_or(&op.path);
                ui.message(&messages::pending_write(
                    &op.mode.to_string(),
                    &path.display().to_string(),
                ));
            }
            ui.message(messages::DRY_RUN);
        } else {
            let count = writer.flush()?;
            if count > 0 {
                ui.success(&messages::wrote_files(count));
            }

            if self.args.skip_install {
                ui.message(messages::INSTALL_SKIPPED);
            } else {
                let installer = DependencyInstaller::new(&self.config, self.runner);
                ui.message(&messages::installing(installer.package()));
                installer.install(project.root())?;
                ui.success(&messages::installed(installer.package()));
                installed = Some(installer.package().to_string());
            }
        }

        let report = SetupReport {
            project_root: project.root().to_path_buf(),
            dry_run: self.args.dry_run,
            preflight,
            plan,
            files,
            installed,
        };

        ui.show_summary(&self.summary_rows(&report));
        if !report.dry_run {
            ui.success(messages::DONE);
        }
        Ok(report)
    }

    fn check_environment(&self, ui: &mut dyn UserInterface) -> Result<PreflightReport> {
        let checker = PreflightChecker::new(&self.config, self.runner);
        let mut spinner = ui.start_spinner(messages::CHECKING_ENVIRONMENT);

        match checker.run() {
            Ok(report) => {
                spinner.finish_success(&messages::tool_found(
                    &self.config.runtime.command,
                    &report.runtime_version,
                ));
                ui.success(&messages::tool_found(
                    &self.config.package_manager.command,
                    &report.package_manager_version,
                ));
                Ok(report)
            }
            Err(e) => {
                spinner.finish_error(messages::ENVIRONMENT_FAILED);
                Err(e)
            }
        }
    }

    fn report_plan(&self, plan: &SetupPlan, ui: &mut dyn UserInterface) {
        let files = &self.config.files;

        match &plan.scripts {
            ScriptsOutcome::Set | ScriptsOutcome::Merge => {
                ui.message(&messages::scripts_added(&files.manifest))
            }
            ScriptsOutcome::Skip { existing } => {
                ui.warning(&messages::scripts_skipped(&files.manifest, existing))
            }
        }

        match plan.ignore_file {
            IgnoreFileOutcome::Create => {
                ui.message(&messages::ignore_file_creating(&files.ignore_file))
            }
            IgnoreFileOutcome::Append => ui.message(&messages::ignore_entry_missing(
                &self.config.ignore_marker,
                &files.ignore_file,
            )),
            IgnoreFileOutcome::Unchanged => {
                ui.message(&messages::ignore_file_present(&files.ignore_file))
            }
        }

        match plan.jest_config {
            JestConfigOutcome::SkipManifest => ui.message(&messages::jest_in_manifest(
                &files.manifest,
                &files.jest_config,
            )),
            JestConfigOutcome::SkipFile => {
                ui.message(&messages::jest_config_exists(&files.jest_config))
            }
            JestConfigOutcome::Create => {
                ui.message(&messages::jest_config_creating(&files.jest_config))
            }
        }
    }

    fn summary_rows(&self, report: &SetupReport) -> Vec<SummaryRow> {
        let files = &self.config.files;
        let applied = if report.dry_run {
            StatusKind::Planned
        } else {
            StatusKind::Done
        };

        let scripts = match &report.plan.scripts {
            ScriptsOutcome::Set => SummaryRow::new(&files.manifest, applied, "test scripts added"),
            ScriptsOutcome::Merge => {
                SummaryRow::new(&files.manifest, applied, "test scripts merged")
            }
            ScriptsOutcome::Skip { .. } => SummaryRow::new(
                &files.manifest,
                StatusKind::Skipped,
                "test scripts already present",
            ),
        };

        let ignore_file = match report.plan.ignore_file {
            IgnoreFileOutcome::Create => SummaryRow::new(&files.ignore_file, applied, "created"),
            IgnoreFileOutcome::Append => {
                SummaryRow::new(&files.ignore_file, applied, "test entry appended")
            }
            IgnoreFileOutcome::Unchanged => SummaryRow::new(
                &files.ignore_file,
                StatusKind::Skipped,
                "already excludes tests",
            ),
        };

        let jest_config = match report.plan.jest_config {
            JestConfigOutcome::Create => SummaryRow::new(&files.jest_config, applied, "created"),
            JestConfigOutcome::SkipManifest => SummaryRow::new(
                &files.jest_config,
                StatusKind::Skipped,
                format!("configured in {}", files.manifest),
            ),
            JestConfigOutcome::SkipFile => {
                SummaryRow::new(&files.jest_config, StatusKind::Skipped, "already exists")
            }
        };

        let package = &self.config.dev_dependency;
        let dependency = match (&report.installed, report.dry_run) {
            (Some(_), _) => SummaryRow::new(package, StatusKind::Done, "installed"),
            (None, true) => SummaryRow::new(package, StatusKind::Planned, "would install"),
            (None, false) => SummaryRow::new(package, StatusKind::Skipped, "install skipped"),
        };

        vec![scripts, ignore_file, jest_config, dependency]
    }
}

impl Command for SetupCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let report = self.run(ui)?;
        if self.json {
            println!("{}", json_success(&report)?);
        }
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_JEST_CONFIG;
    use crate::shell::MockRunner;
    use crate::ui::{MockUI, SpinnerStatus};
    use std::fs;
    use tempfile::TempDir;

    fn project(manifest: &str) -> TempDir {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("sfdx-project.json"), "{}").unwrap();
        fs::write(temp.path().join("package.json"), manifest).unwrap();
        temp
    }

    fn runner() -> MockRunner {
        MockRunner::new()
            .with_output("node", "v18.17.0\n")
            .with_output("npm", "9.8.1\n")
    }

    fn run(
        temp: &TempDir,
        args: SetupArgs,
        runner: &MockRunner,
        ui: &mut MockUI,
    ) -> Result<SetupReport> {
        SetupCommand::new(temp.path(), SetupConfig::default(), args, runner).run(ui)
    }

    #[test]
    fn fresh_project_gets_every_file_and_the_install() {
        let temp = project(r#"{"name": "app", "version": "1.0.0"}"#);
        let runner = runner();
        let mut ui = MockUI::new();

        let report = run(&temp, SetupArgs::default(), &runner, &mut ui).unwrap();

        let manifest = fs::read_to_string(temp.path().join("package.json")).unwrap();
        assert!(manifest.contains("    \"scripts\": {"));
        assert!(manifest.contains("\"test:unit:watch\": \"lwc-jest --watch\""));

        let ignore = fs::read_to_string(temp.path().join(".forceignore")).unwrap();
        assert!(ignore.contains("**/__tests__/**"));

        let jest = fs::read_to_string(temp.path().join("jest.config.js")).unwrap();
        assert_eq!(jest, DEFAULT_JEST_CONFIG);

        assert!(runner.was_called("npm add --save-dev @salesforce/lwc-jest"));
        let install = runner.calls().pop().unwrap();
        assert_eq!(
            install.cwd.unwrap(),
            temp.path().canonicalize().unwrap()
        );

        assert_eq!(report.files.len(), 3);
        assert_eq!(report.installed.as_deref(), Some("@salesforce/lwc-jest"));
        assert_eq!(ui.spinner_results()[0].0, SpinnerStatus::Success);
        assert!(ui.has_success(messages::DONE));
        assert!(ui.has_success("Updated 3 files"));
    }

    #[test]
    fn second_run_changes_nothing() {
        let temp = project(r#"{"name": "app"}"#);
        let runner = runner();

        run(&temp, SetupArgs::default(), &runner, &mut MockUI::new()).unwrap();
        let manifest_before = fs::read_to_string(temp.path().join("package.json")).unwrap();
        let ignore_before = fs::read_to_string(temp.path().join(".forceignore")).unwrap();

        let mut ui = MockUI::new();
        let report = run(&temp, SetupArgs::default(), &runner, &mut ui).unwrap();

        assert!(report.files.is_empty());
        assert!(matches!(report.plan.scripts, ScriptsOutcome::Skip { .. }));
        assert_eq!(report.plan.ignore_file, IgnoreFileOutcome::Unchanged);
        assert_eq!(report.plan.jest_config, JestConfigOutcome::SkipFile);
        assert!(ui.has_warning("already has test:unit"));
        assert_eq!(
            fs::read_to_string(temp.path().join("package.json")).unwrap(),
            manifest_before
        );
        assert_eq!(
            fs::read_to_string(temp.path().join(".forceignore")).unwrap(),
            ignore_before
        );
    }

    #[test]
    fn verbose_mode_names_the_project_root() {
        let temp = project(r#"{"name": "app"}"#);
        let mut ui = MockUI::with_mode(OutputMode::Verbose);
        let args = SetupArgs {
            dry_run: true,
            ..SetupArgs::default()
        };

        run(&temp, args.clone(), &runner(), &mut ui).unwrap();
        assert!(ui.has_message("Project: "));

        let mut normal = MockUI::new();
        run(&temp, args, &runner(), &mut normal).unwrap();
        assert!(!normal.has_message("Project: "));
    }

    #[test]
    fn dry_run_writes_nothing_and_skips_install() {
        let temp = project(r#"{"name": "app"}"#);
        let runner = runner();
        let mut ui = MockUI::new();
        let args = SetupArgs {
            dry_run: true,
            ..SetupArgs::default()
        };

        let report = run(&temp, args, &runner, &mut ui).unwrap();

        assert_eq!(report.files.len(), 3);
        assert!(report.installed.is_none());
        assert!(!temp.path().join("jest.config.js").exists());
        assert!(!temp.path().join(".forceignore").exists());
        assert!(!runner.was_called("npm add"));
        assert!(ui.has_message("Would write package.json"));
        assert!(ui.has_message(messages::DRY_RUN));
        assert!(!ui.has_success(messages::DONE));
    }

    #[test]
    fn strict_with_existing_scripts_fails_before_writing() {
        let temp = project(r#"{"name": "app", "scripts": {"test:unit": "jest"}}"#);
        let runner = runner();
        let args = SetupArgs {
            strict: true,
            ..SetupArgs::default()
        };

        let err = run(&temp, args, &runner, &mut MockUI::new()).unwrap_err();

        match err {
            SetupError::ExistingScripts { keys } => assert_eq!(keys, ["test:unit"]),
            other => panic!("unexpected error: {other}"),
        }
        assert!(!temp.path().join(".forceignore").exists());
        assert!(!temp.path().join("jest.config.js").exists());
        assert!(!runner.was_called("npm add"));
    }

    #[test]
    fn existing_scripts_warn_and_the_rest_still_runs() {
        let temp = project(r#"{"name": "app", "scripts": {"test:unit": "jest"}}"#);
        let runner = runner();
        let mut ui = MockUI::new();

        let report = run(&temp, SetupArgs::default(), &runner, &mut ui).unwrap();

        assert!(ui.has_warning("test:unit"));
        assert_eq!(report.plan.ignore_file, IgnoreFileOutcome::Create);
        assert!(temp.path().join("jest.config.js").exists());
        let manifest = fs::read_to_string(temp.path().join("package.json")).unwrap();
        assert_eq!(manifest, r#"{"name": "app", "scripts": {"test:unit": "jest"}}"#);
    }

    #[test]
    fn skip_install_writes_files_only() {
        let temp = project(r#"{"name": "app"}"#);
        let runner = runner();
        let mut ui = MockUI::new();
        let args = SetupArgs {
            skip_install: true,
            ..SetupArgs::default()
        };

        let report = run(&temp, args, &runner, &mut ui).unwrap();

        assert!(temp.path().join("jest.config.js").exists());
        assert!(report.installed.is_none());
        assert!(!runner.was_called("npm add"));
        assert!(ui.has_message(messages::INSTALL_SKIPPED));

        let rows = &ui.summaries()[0];
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[3].status, StatusKind::Skipped);
    }

    #[test]
    fn missing_runtime_stops_before_project_lookup() {
        let temp = TempDir::new().unwrap();
        let runner = MockRunner::new().with_output("npm", "9.8.1\n");
        let mut ui = MockUI::new();

        let err = run(&temp, SetupArgs::default(), &runner, &mut ui).unwrap_err();

        assert!(matches!(err, SetupError::RuntimeNotFound { .. }));
        assert_eq!(ui.spinners(), [messages::CHECKING_ENVIRONMENT]);
        assert_eq!(
            ui.spinner_results(),
            [(SpinnerStatus::Error, messages::ENVIRONMENT_FAILED.to_string())]
        );
    }

    #[test]
    fn missing_manifest_is_reported() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("sfdx-project.json"), "{}").unwrap();

        let err = run(&temp, SetupArgs::default(), &runner(), &mut MockUI::new()).unwrap_err();

        assert!(matches!(err, SetupError::ManifestNotFound { .. }));
    }

    #[test]
    fn install_failure_keeps_written_files() {
        let temp = project(r#"{"name": "app"}"#);
        let runner = runner().with_attached_failure("npm", 1, "npm ERR! 404");

        let err = run(&temp, SetupArgs::default(), &runner, &mut MockUI::new()).unwrap_err();

        assert!(matches!(err, SetupError::DependencyInstallFailed { .. }));
        assert!(temp.path().join("jest.config.js").exists());
        assert!(temp.path().join(".forceignore").exists());
    }

    #[test]
    fn json_success_payload_lists_plan_and_files() {
        let temp = project(r#"{"name": "app"}"#);
        let args = SetupArgs {
            skip_install: true,
            ..SetupArgs::default()
        };
        let report = run(&temp, args, &runner(), &mut MockUI::new()).unwrap();

        let payload: serde_json::Value =
            serde_json::from_str(&json_success(&report).unwrap()).unwrap();

        assert_eq!(payload["status"], 0);
        assert_eq!(payload["result"]["plan"]["scripts"]["action"], "set");
        assert_eq!(payload["result"]["plan"]["ignore_file"], "create");
        assert_eq!(payload["result"]["files"][0]["mode"], "overwrite");
        assert!(payload["result"]["files"][0]["path"]
            .as_str()
            .unwrap()
            .ends_with("package.json"));
        assert!(payload["result"]["installed"].is_null());
        assert_eq!(payload["result"]["preflight"]["runtime_version"], "18.17.0");
    }

    #[test]
    fn json_error_payload_names_the_kind() {
        let err = SetupError::RuntimeNotFound {
            tool: "node".into(),
        };
        let payload: serde_json::Value = serde_json::from_str(&json_error(&err)).unwrap();

        assert_eq!(payload["status"], 1);
        assert_eq!(payload["name"], "RuntimeNotFound");
        assert!(payload["message"].as_str().unwrap().contains("node"));
    }
}
