//! Project root resolution.
//!
//! A project root is the nearest directory, at or above the starting point,
//! that contains the project marker file (`sfdx-project.json` by default).
//! All files `setup` touches are resolved relative to that root.

pub mod manifest;

pub use manifest::Manifest;

use std::path::{Path, PathBuf};

use crate::config::FileNames;
use crate::error::{Result, SetupError};

/// A resolved project on disk.
#[derive(Debug, Clone)]
pub struct Project {
    root: PathBuf,
    files: FileNames,
}

impl Project {
    /// Find the project containing `start`.
    pub fn resolve(start: &Path, files: &FileNames) -> Result<Self> {
        let not_found = || SetupError::ProjectNotFound {
            start: start.to_path_buf(),
            marker: files.project_marker.clone(),
        };

        let start_abs = start.canonicalize().map_err(|_| not_found())?;

        let root = start_abs
            .ancestors()
            .find(|dir| dir.join(&files.project_marker).is_file())
            .ok_or_else(not_found)?;

        tracing::debug!("Resolved project root: {}", root.display());

        Ok(Self {
            root: root.to_path_buf(),
            files: files.clone(),
        })
    }

    /// Get the project root path.
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.root.join(&self.files.manifest)
    }

    pub fn jest_config_path(&self) -> PathBuf {
        self.root.join(&self.files.jest_config)
    }

    pub fn ignore_file_path(&self) -> PathBuf {
        self.root.join(&self.files.ignore_file)
    }

    /// Load the project's manifest.
    pub fn load_manifest(&self) -> Result<Manifest> {
        Manifest::load(&self.manifest_path())
    }
}
