//! CLI command handlers. Each command is in its own file.

mod check;
mod guess;
mod names;
mod normalize;

pub use check::run_check;
pub use guess::run_guess;
pub use names::run_names;
pub use normalize::run_normalize;

use anyhow::Result;
use serde_json::Value;

/// Print one JSON document on stdout.
fn print_json(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
