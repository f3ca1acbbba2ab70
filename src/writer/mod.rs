//! Deferred file writes.
//!
//! [`BatchWriter`] collects every file mutation `setup` decides on and
//! applies them together once planning has finished. Operations are applied
//! in the order they were queued. Each overwrite is atomic on its own, but
//! there is no transaction across operations: if one fails, the ones before
//! it stay applied and the rest stay queued.
//!
//! # Example
//!
//! ```
//! use lwc_test::writer::BatchWriter;
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! let mut writer = BatchWriter::new();
//! writer.queue_write(temp.path().join("a.txt"), "one\n");
//! writer.queue_append(temp.path().join("a.txt"), "two\n");
//! assert!(!temp.path().join("a.txt").exists());
//!
//! assert_eq!(writer.flush().unwrap(), 2);
//! let content = std::fs::read_to_string(temp.path().join("a.txt")).unwrap();
//! assert_eq!(content, "one\ntwo\n");
//! ```

pub mod atomic;

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{Result, SetupError};

/// How a queued operation changes its file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteMode {
    Overwrite,
    Append,
}

impl fmt::Display for WriteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Overwrite => write!(f, "write"),
            Self::Append => write!(f, "append"),
        }
    }
}

/// A file operation waiting to be flushed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PendingWrite {
    pub path: PathBuf,
    #[serde(skip)]
    pub content: String,
    pub mode: WriteMode,
}

impl PendingWrite {
    fn apply(&self) -> std::io::Result<()> {
        match self.mode {
            WriteMode::Overwrite => atomic::atomic_write(&self.path, self.content.as_bytes()),
            WriteMode::Append => atomic::append(&self.path, self.content.as_bytes()),
        }
    }
}

/// Queue of file operations applied in one pass.
#[derive(Debug, Default)]
pub struct BatchWriter {
    queue: Vec<PendingWrite>,
}

impl BatchWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue replacing the whole file.
    pub fn queue_write(&mut self, path: impl Into<PathBuf>, content: impl Into<String>) {
        self.push(path.into(), content.into(), WriteMode::Overwrite);
    }

    /// Queue appending to the file (created if missing).
    pub fn queue_append(&mut self, path: impl Into<PathBuf>, content: impl Into<String>) {
        self.push(path.into(), content.into(), WriteMode::Append);
    }

    fn push(&mut self, path: PathBuf, content: String, mode: WriteMode) {
        tracing::debug!("Queued {} {}", mode, path.display());
        self.queue.push(PendingWrite {
            path,
            content,
            mode,
        });
    }

    /// Operations not yet applied, in queue order.
    pub fn pending(&self) -> &[PendingWrite] {
        &self.queue
    }

    /// Whether an operation for `path` is queued.
    pub fn is_queued(&self, path: &Path) -> bool {
        self.queue.iter().any(|w| w.path == path)
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Apply all queued operations in order.
    ///
    /// Returns the number applied. On failure the failing operation and
    /// everything after it remain in the queue.
    pub fn flush(&mut self) -> Result<usize> {
        let mut applied = 0;
        let mut failure = None;

        for write in &self.queue {
            if let Err(source) = write.apply() {
                failure = Some(SetupError::WriteFailed {
                    path: write.path.clone(),
                    source,
                });
                break;
            }
            tracing::debug!("Applied {} {}", write.mode, write.path.display());
            applied += 1;
        }

        self.queue.drain(..applied);

        match failure {
            Some(err) => Err(err),
            None => Ok(applied),
        }
    }
}
