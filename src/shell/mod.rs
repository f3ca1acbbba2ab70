//! External process execution and environment detection.

pub mod command;
pub mod mock;
pub mod platform;

pub use command::{SystemRunner, ToolOutput, ToolRunner};
pub use mock::{MockRunner, RecordedCall};
pub use platform::is_ci;
