//! Test script merging for the manifest.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{Result, SetupError};
use crate::project::Manifest;

/// What happens to the manifest's `scripts` block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ScriptsOutcome {
    /// No `scripts` block existed; it is set to the test scripts.
    Set,
    /// Test scripts are added after the existing ones.
    Merge,
    /// Some test scripts already exist; nothing changes.
    Skip { existing: Vec<String> },
}

impl ScriptsOutcome {
    /// Whether the manifest was changed and needs writing.
    pub fn changes_manifest(&self) -> bool {
        !matches!(self, Self::Skip { .. })
    }
}

/// Merge `scripts` into the manifest in memory.
///
/// All-or-nothing: if any of the script names is already defined, the
/// manifest is left untouched.
pub fn plan_scripts(
    manifest: &mut Manifest,
    scripts: &IndexMap<String, String>,
) -> Result<ScriptsOutcome> {
    let additions = || {
        scripts
            .iter()
            .map(|(name, command)| (name.clone(), Value::String(command.clone())))
    };

    let Some(current) = manifest.scripts() else {
        manifest.set_scripts(additions().collect());
        return Ok(ScriptsOutcome::Set);
    };

    let Value::Object(current) = current else {
        return Err(SetupError::ManifestParse {
            path: manifest.path().to_path_buf(),
            message: "\"scripts\" is not an object".to_string(),
        });
    };

    let existing: Vec<String> = scripts
        .keys()
        .filter(|name| current.contains_key(name.as_str()))
        .cloned()
        .collect();
    if !existing.is_empty() {
        return Ok(ScriptsOutcome::Skip { existing });
    }

    let mut merged: Map<String, Value> = current.clone();
    merged.extend(additions());
    manifest.set_scripts(merged);
    Ok(ScriptsOutcome::Merge)
}
