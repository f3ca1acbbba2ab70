//! Ignore file entry for test directories.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::Result;
use crate::writer::BatchWriter;

/// What happens to the ignore file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IgnoreFileOutcome {
    /// The file did not exist and is created with the entry.
    Create,
    /// The marker was missing and the entry is appended.
    Append,
    /// The marker is already present.
    Unchanged,
}

/// Queue the ignore entry unless the file already contains `marker`.
pub fn plan_ignore_file(
    path: &Path,
    entry: &str,
    marker: &str,
    writer: &mut BatchWriter,
) -> Result<IgnoreFileOutcome> {
    if !path.exists() {
        writer.queue_write(path, entry);
        return Ok(IgnoreFileOutcome::Create);
    }

    let content = fs::read_to_string(path)?;
    if content.contains(marker) {
        return Ok(IgnoreFileOutcome::Unchanged);
    }

    let addition = if content.is_empty() || content.ends_with('\n') {
        entry.to_string()
    } else {
        format!("\n{entry}")
    };
    writer.queue_append(path, addition);
    Ok(IgnoreFileOutcome::Append)
}
