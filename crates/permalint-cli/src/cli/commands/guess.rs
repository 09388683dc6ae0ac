//! `permalint guess <url>...` – the canonical URL the inputs agree on.

use anyhow::Result;
use permalint_core::config::OutputFormat;
use permalint_core::guess_url;
use serde_json::json;

pub fn run_guess(urls: &[String], format: OutputFormat) -> Result<()> {
    let guess = guess_url(urls);
    match format {
        OutputFormat::Text => println!("{}", guess.as_deref().unwrap_or("-")),
        OutputFormat::Json => super::print_json(&json!({ "guess": guess }))?,
    }
    Ok(())
}
