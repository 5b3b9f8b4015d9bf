//! CLI command handlers.

mod extract;

pub use extract::{exit_code, run_extract};
