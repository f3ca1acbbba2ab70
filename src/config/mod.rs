//! Configuration for the setup command.
//!
//! - Schema definitions and built-in defaults in [`schema`]
//! - Optional YAML override loading in [`loader`]
//!
//! # Example
//!
//! ```
//! use lwc_test::config::{load_config, VersionCompare};
//!
//! let config = load_config(None).unwrap();
//! assert_eq!(config.runtime.command, "node");
//! assert_eq!(config.runtime.version_compare, VersionCompare::Semantic);
//! ```

pub mod loader;
pub mod schema;

pub use loader::{load_config, load_config_file};
pub use schema::{
    FileNames, PackageManagerConfig, RuntimeConfig, SetupConfig, VersionCompare,
    DEFAULT_JEST_CONFIG,
};
