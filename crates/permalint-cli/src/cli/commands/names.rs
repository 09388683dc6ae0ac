//! `permalint names <url>` – candidate package names.

use anyhow::Result;
use permalint_core::config::OutputFormat;
use permalint_core::possible_names;
use serde_json::json;

pub fn run_names(url: &str, format: OutputFormat) -> Result<()> {
    let names = possible_names(url);
    match format {
        OutputFormat::Text => {
            for name in &names {
                println!("{name}");
            }
        }
        OutputFormat::Json => super::print_json(&json!(names))?,
    }
    Ok(())
}
