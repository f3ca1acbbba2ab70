//! User-facing message table.
//!
//! Every line `setup` prints lives here so wording stays consistent between
//! the terminal and the tests that assert on it.

pub const HEADER: &str = "LWC Jest setup";

pub const CHECKING_ENVIRONMENT: &str = "Checking environment...";

pub const ENVIRONMENT_FAILED: &str = "Environment check failed";

pub const DRY_RUN: &str = "Dry run: no files were changed and nothing was installed.";

pub const INSTALL_SKIPPED: &str = "Skipping dependency install (--skip-install).";

pub const DONE: &str = "Jest unit testing is set up. Run `npm run test:unit` to run your tests.";

pub fn scripts_added(manifest: &str) -> String {
    format!("Adding Jest test scripts to {manifest}...")
}

pub fn scripts_skipped(manifest: &str, keys: &[String]) -> String {
    format!(
        "{manifest} already has {}. Skipping test script setup.",
        keys.join(", ")
    )
}

pub fn jest_in_manifest(manifest: &str, jest_file: &str) -> String {
    format!("Jest configuration found in {manifest}. Skipping creation of {jest_file} file.")
}

pub fn jest_config_exists(jest_file: &str) -> String {
    format!("Jest configuration found in {jest_file}. Skipping creation of new config file.")
}

pub fn jest_config_creating(jest_file: &str) -> String {
    format!("Creating {jest_file} configuration file in the project root...")
}

pub fn ignore_file_creating(file: &str) -> String {
    format!("Creating missing {file} file found in the project root...")
}

pub fn ignore_file_present(file: &str) -> String {
    format!("{file} already excludes test files.")
}

pub fn ignore_entry_missing(marker: &str, file: &str) -> String {
    format!("No \"{marker}\" entry found in {file}. Adding now...")
}

pub fn installing(package: &str) -> String {
    format!("Installing {package} node package...")
}

pub fn installed(package: &str) -> String {
    format!("Installed {package}")
}

pub fn project_root(path: &str) -> String {
    format!("Project: {path}")
}

pub fn tool_found(tool: &str, version: &str) -> String {
    format!("Found {tool} {version}")
}

pub fn pending_write(action: &str, path: &str) -> String {
    format!("Would {action} {path}")
}

pub fn wrote_files(count: usize) -> String {
    let noun = if count == 1 { "file" } else { "files" };
    format!("Updated {count} {noun}")
}
