//! CLI command handlers. Each command is in its own file.

mod analyze;
mod completions;
mod config_path;
mod normalize;

pub use analyze::run_analyze;
pub use completions::{run_completions, run_man};
pub use config_path::run_config_path;
pub use normalize::run_normalize;
