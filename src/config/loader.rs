//! Configuration file loading.
//!
//! `setup` runs from built-in defaults unless `--config <path>` points at a
//! YAML file, in which case the file's fields override the defaults.

use crate::config::schema::SetupConfig;
use crate::error::{Result, SetupError};
use std::fs;
use std::path::Path;

/// Load the setup configuration, falling back to defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<SetupConfig> {
    match path {
        Some(path) => load_config_file(path),
        None => Ok(SetupConfig::default()),
    }
}

/// Load a single YAML config file.
pub fn load_config_file(path: &Path) -> Result<SetupConfig> {
    let content = fs::read_to_string(path).map_err(|e| SetupError::ConfigLoad {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    // An empty file is valid and means "all defaults".
    if content.trim().is_empty() {
        return Ok(SetupConfig::default());
    }

    let config: SetupConfig =
        serde_yaml::from_str(&content).map_err(|e| SetupError::ConfigLoad {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    tracing::debug!("Loaded config from {}", path.display());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn no_path_uses_defaults() {
        let config = load_config(None).unwrap();
        assert_eq!(config, SetupConfig::default());
    }

    #[test]
    fn loads_overrides_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("lwc-test.yml");
        fs::write(
            &path,
            "package_manager:\n  command: pnpm\n  install_args: [add, -D]\n",
        )
        .unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.package_manager.command, "pnpm");
        assert_eq!(config.package_manager.install_args, ["add", "-D"]);
        assert_eq!(config.package_manager.version_args, ["-v"]);
    }

    #[test]
    fn empty_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("empty.yml");
        fs::write(&path, "\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config, SetupConfig::default());
    }

    #[test]
    fn missing_file_is_config_load_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing.yml");

        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, SetupError::ConfigLoad { .. }));
        assert!(err.to_string().contains("missing.yml"));
    }

    #[test]
    fn invalid_yaml_is_config_load_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bad.yml");
        fs::write(&path, "scripts: [not, a, map]\n").unwrap();

        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, SetupError::ConfigLoad { .. }));
    }
}
