//! CLI command handlers. Each command is in its own file.

mod completions;
mod enrich;
mod normalize;
mod schema;

pub use completions::{run_completions, run_man};
pub use enrich::run_enrich;
pub use normalize::run_normalize;
pub use schema::run_schema;
