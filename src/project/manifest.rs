//! The project's `package.json`.
//!
//! The manifest is kept as an ordered JSON object so that writing it back
//! leaves existing keys where the user put them.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{Result, SetupError};

/// A parsed package manifest.
#[derive(Debug, Clone)]
pub struct Manifest {
    path: PathBuf,
    root: Map<String, Value>,
}

impl Manifest {
    /// Read and parse the manifest at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(SetupError::ManifestNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = fs::read_to_string(path)?;
        Self::parse(path, &content)
    }

    /// Parse manifest content that was read from `path`.
    pub fn parse(path: &Path, content: &str) -> Result<Self> {
        let parse_error = |message: String| SetupError::ManifestParse {
            path: path.to_path_buf(),
            message,
        };

        let value: Value = serde_json::from_str(content).map_err(|e| parse_error(e.to_string()))?;
        match value {
            Value::Object(root) => Ok(Self {
                path: path.to_path_buf(),
                root,
            }),
            _ => Err(parse_error("top-level value is not an object".to_string())),
        }
    }

    /// Path the manifest was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The `scripts` block, if present and not null.
    pub fn scripts(&self) -> Option<&Value> {
        self.root.get("scripts").filter(|v| !v.is_null())
    }

    /// Replace the `scripts` block, keeping its position if it already exists.
    pub fn set_scripts(&mut self, scripts: Map<String, Value>) {
        self.root.insert("scripts".to_string(), Value::Object(scripts));
    }

    /// Whether the manifest carries a Jest configuration block.
    ///
    /// Follows JavaScript truthiness: `null`, `false`, `0` and `""` count as
    /// absent, while any object or array counts, even an empty one.
    pub fn has_jest_config(&self) -> bool {
        match self.root.get("jest") {
            None | Some(Value::Null) => false,
            Some(Value::Bool(b)) => *b,
            Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
            Some(Value::String(s)) => !s.is_empty(),
            Some(Value::Array(_) | Value::Object(_)) => true,
        }
    }

    /// Serialize with 4-space indentation and a trailing newline.
    pub fn to_json_string(&self) -> Result<String> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.root
            .serialize(&mut serializer)
            .context("Failed to serialize manifest")?;

        let mut out = String::from_utf8(buf).context("Manifest is not valid UTF-8")?;
        out.push('\n');
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn parse(content: &str) -> Manifest {
        Manifest::parse(Path::new("package.json"), content).unwrap()
    }

    #[test]
    fn load_missing_file_is_manifest_not_found() {
        let temp = TempDir::new().unwrap();
        let err = Manifest::load(&temp.path().join("package.json")).unwrap_err();
        assert!(matches!(err, SetupError::ManifestNotFound { .. }));
    }

    #[test]
    fn load_reads_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("package.json");
        fs::write(&path, r#"{"name": "app"}"#).unwrap();

        let manifest = Manifest::load(&path).unwrap();
        assert_eq!(manifest.path(), path);
        assert!(manifest.scripts().is_none());
    }

    #[test]
    fn invalid_json_is_parse_error() {
        let err = Manifest::parse(Path::new("package.json"), "{ name: ").unwrap_err();
        assert!(matches!(err, SetupError::ManifestParse { .. }));
    }

    #[test]
    fn non_object_is_parse_error() {
        let err = Manifest::parse(Path::new("package.json"), "[1, 2]").unwrap_err();
        assert!(err.to_string().contains("not an object"));
    }

    #[test]
    fn jest_block_detection() {
        assert!(parse(r#"{"jest": {"verbose": true}}"#).has_jest_config());
        assert!(!parse(r#"{"jest": null}"#).has_jest_config());
        assert!(!parse(r#"{"jest": false}"#).has_jest_config());
        assert!(!parse(r#"{"name": "app"}"#).has_jest_config());
    }

    #[test]
    fn falsy_jest_values_count_as_absent() {
        assert!(!parse(r#"{"jest": ""}"#).has_jest_config());
        assert!(!parse(r#"{"jest": 0}"#).has_jest_config());
        assert!(!parse(r#"{"jest": -0.0}"#).has_jest_config());
        assert!(parse(r#"{"jest": {}}"#).has_jest_config());
        assert!(parse(r#"{"jest": []}"#).has_jest_config());
        assert!(parse(r#"{"jest": "jest.config.js"}"#).has_jest_config());
        assert!(parse(r#"{"jest": 1}"#).has_jest_config());
        assert!(parse(r#"{"jest": true}"#).has_jest_config());
    }

    #[test]
    fn null_scripts_treated_as_absent() {
        assert!(parse(r#"{"scripts": null}"#).scripts().is_none());
    }

    #[test]
    fn serializes_with_four_space_indent_and_key_order() {
        let manifest = parse(r#"{"name":"app","version":"1.0.0","private":true}"#);
        let out = manifest.to_json_string().unwrap();
        assert_eq!(
            out,
            "{\n    \"name\": \"app\",\n    \"version\": \"1.0.0\",\n    \"private\": true\n}\n"
        );
    }

    #[test]
    fn set_scripts_keeps_position() {
        let mut manifest = parse(r#"{"name":"app","scripts":{},"version":"1.0.0"}"#);
        let mut scripts = Map::new();
        scripts.insert("lint".to_string(), Value::String("eslint".to_string()));
        manifest.set_scripts(scripts);

        let out = manifest.to_json_string().unwrap();
        let name = out.find("\"name\"").unwrap();
        let scripts = out.find("\"scripts\"").unwrap();
        let version = out.find("\"version\"").unwrap();
        assert!(name < scripts && scripts < version);
    }
}
