//! Jest config file creation.

use std::path::Path;

use serde::Serialize;

use crate::project::Manifest;
use crate::writer::BatchWriter;

/// What happens to the Jest config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum JestConfigOutcome {
    /// No Jest config anywhere; a new config file is created.
    Create,
    /// The manifest has a `jest` block.
    SkipManifest,
    /// The config file already exists.
    SkipFile,
}

/// Queue the Jest config file unless the project already configures Jest.
///
/// A `jest` block in the manifest takes precedence over an existing file.
pub fn plan_jest_config(
    manifest: &Manifest,
    path: &Path,
    template: &str,
    writer: &mut BatchWriter,
) -> JestConfigOutcome {
    if manifest.has_jest_config() {
        return JestConfigOutcome::SkipManifest;
    }
    if path.exists() {
        return JestConfigOutcome::SkipFile;
    }
    writer.queue_write(path, template);
    JestConfigOutcome::Create
}
