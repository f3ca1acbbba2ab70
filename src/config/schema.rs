//! Configuration schema types.
//!
//! These types define the structure of an optional `--config` YAML file.
//! Every field has a default, so a file only needs to name what it changes.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Default Jest config written when the project has none.
pub const DEFAULT_JEST_CONFIG: &str = "const { jestConfig } = require('@salesforce/lwc-jest/config');
module.exports = {
    ...jestConfig,
    // add any custom configurations here
};
";

/// Everything `setup` needs to know that is not discovered from the project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SetupConfig {
    /// JavaScript runtime that must be installed.
    pub runtime: RuntimeConfig,

    /// Package manager used for the version check and the install.
    pub package_manager: PackageManagerConfig,

    /// Development dependency installed at the end of setup.
    pub dev_dependency: String,

    /// Scripts merged into the manifest's `scripts` block, in this order.
    pub scripts: IndexMap<String, String>,

    /// Files touched in the project root.
    pub files: FileNames,

    /// Content of a freshly created Jest config file.
    pub jest_config: String,

    /// Ignore file block appended when the marker is missing.
    pub ignore_entry: String,

    /// Substring whose presence means the ignore file is already set up.
    pub ignore_marker: String,
}

impl Default for SetupConfig {
    fn default() -> Self {
        let scripts = [
            ("test:unit", "lwc-jest"),
            ("test:unit:debug", "lwc-jest --debug"),
            ("test:unit:watch", "lwc-jest --watch"),
        ]
        .into_iter()
        .map(|(name, command)| (name.to_string(), command.to_string()))
        .collect();

        Self {
            runtime: RuntimeConfig::default(),
            package_manager: PackageManagerConfig::default(),
            dev_dependency: "@salesforce/lwc-jest".to_string(),
            scripts,
            files: FileNames::default(),
            jest_config: DEFAULT_JEST_CONFIG.to_string(),
            ignore_entry: "# LWC Jest tests\n**/__tests__/**\n".to_string(),
            ignore_marker: "**/__tests__/**".to_string(),
        }
    }
}

/// Runtime executable and version floor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RuntimeConfig {
    pub command: String,
    pub version_args: Vec<String>,
    pub minimum_version: String,
    pub version_compare: VersionCompare,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            command: "node".to_string(),
            version_args: vec!["-v".to_string()],
            minimum_version: "8.12.0".to_string(),
            version_compare: VersionCompare::default(),
        }
    }
}

/// Package manager executable and install invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PackageManagerConfig {
    pub command: String,
    pub version_args: Vec<String>,
    /// Arguments placed before the dependency name, e.g. `add --save-dev`.
    pub install_args: Vec<String>,
}

impl Default for PackageManagerConfig {
    fn default() -> Self {
        Self {
            command: "npm".to_string(),
            version_args: vec!["-v".to_string()],
            install_args: vec!["add".to_string(), "--save-dev".to_string()],
        }
    }
}

/// Names of the files `setup` reads or writes, relative to the project root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileNames {
    pub project_marker: String,
    pub manifest: String,
    pub jest_config: String,
    pub ignore_file: String,
}

impl Default for FileNames {
    fn default() -> Self {
        Self {
            project_marker: "sfdx-project.json".to_string(),
            manifest: "package.json".to_string(),
            jest_config: "jest.config.js".to_string(),
            ignore_file: ".forceignore".to_string(),
        }
    }
}

/// How the runtime version is compared against the minimum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VersionCompare {
    /// Compare as semantic versions.
    #[default]
    Semantic,
    /// Plain string comparison. `10.0.0` sorts below `8.12.0` in this mode.
    Lexical,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_scripts_are_the_three_test_entries() {
        let config = SetupConfig::default();
        let names: Vec<&str> = config.scripts.keys().map(String::as_str).collect();
        assert_eq!(names, ["test:unit", "test:unit:debug", "test:unit:watch"]);
        assert_eq!(config.scripts["test:unit:watch"], "lwc-jest --watch");
    }

    #[test]
    fn yaml_scripts_keep_their_written_order() {
        let yaml = "scripts:\n  zeta: \"jest z\"\n  alpha: \"jest a\"\n  mid: \"jest m\"\n";
        let config: SetupConfig = serde_yaml::from_str(yaml).unwrap();

        let names: Vec<&str> = config.scripts.keys().map(String::as_str).collect();
        assert_eq!(names, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn default_ignore_entry_contains_marker() {
        let config = SetupConfig::default();
        assert!(config.ignore_entry.contains(&config.ignore_marker));
    }

    #[test]
    fn partial_yaml_keeps_other_defaults() {
        let yaml = "runtime:\n  minimum_version: \"18.0.0\"\ndev_dependency: \"@salesforce/sfdx-lwc-jest\"\n";
        let config: SetupConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.runtime.minimum_version, "18.0.0");
        assert_eq!(config.runtime.command, "node");
        assert_eq!(config.dev_dependency, "@salesforce/sfdx-lwc-jest");
        assert_eq!(config.files, FileNames::default());
    }

    #[test]
    fn version_compare_parses_snake_case() {
        let yaml = "runtime:\n  version_compare: lexical\n";
        let config: SetupConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.runtime.version_compare, VersionCompare::Lexical);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let yaml = "runtme:\n  command: node\n";
        assert!(serde_yaml::from_str::<SetupConfig>(yaml).is_err());
    }
}
