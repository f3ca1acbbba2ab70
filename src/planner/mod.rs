//! Idempotent mutation planning.
//!
//! The planner looks at the project as it is now and decides which of the
//! three artifacts need changing. Nothing is written here; every change is
//! queued on a [`BatchWriter`] and applied later in one flush. Running the
//! planner against a project that is already set up queues nothing.
//!
//! Queue order is manifest, ignore file, Jest config.

pub mod ignore_file;
pub mod jest_config;
pub mod scripts;

pub use ignore_file::{plan_ignore_file, IgnoreFileOutcome};
pub use jest_config::{plan_jest_config, JestConfigOutcome};
pub use scripts::{plan_scripts, ScriptsOutcome};

use serde::Serialize;

use crate::config::SetupConfig;
use crate::error::Result;
use crate::project::{Manifest, Project};
use crate::writer::BatchWriter;

/// Per-artifact decisions for one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SetupPlan {
    pub scripts: ScriptsOutcome,
    pub ignore_file: IgnoreFileOutcome,
    pub jest_config: JestConfigOutcome,
}

/// Plans the file changes for a project.
pub struct Planner<'a> {
    config: &'a SetupConfig,
}

impl<'a> Planner<'a> {
    pub fn new(config: &'a SetupConfig) -> Self {
        Self { config }
    }

    /// Decide every change and queue the resulting writes.
    pub fn plan(
        &self,
        project: &Project,
        manifest: &mut Manifest,
        writer: &mut BatchWriter,
    ) -> Result<SetupPlan> {
        let scripts = plan_scripts(manifest, &self.config.scripts)?;
        if scripts.changes_manifest() {
            writer.queue_write(manifest.path(), manifest.to_json_string()?);
        }
        tracing::debug!("Scripts: {:?}", scripts);

        let ignore_file = plan_ignore_file(
            &project.ignore_file_path(),
            &self.config.ignore_entry,
            &self.config.ignore_marker,
            writer,
        )?;
        tracing::debug!("Ignore file: {:?}", ignore_file);

        let jest_config = plan_jest_config(
            manifest,
            &project.jest_config_path(),
            &self.config.jest_config,
            writer,
        );
        tracing::debug!("Jest config: {:?}", jest_config);

        Ok(SetupPlan {
            scripts,
            ignore_file,
            jest_config,
        })
    }
}
