//! `permalint normalize <url>...` – print canonical forms.

use anyhow::Result;
use permalint_core::config::OutputFormat;
use permalint_core::normalize_url;
use serde_json::json;

pub fn run_normalize(urls: &[String], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for url in urls {
                println!("{}", normalize_url(url));
            }
        }
        OutputFormat::Json => {
            let rows: Vec<_> = urls
                .iter()
                .map(|url| json!({ "url": url, "canonical": normalize_url(url) }))
                .collect();
            super::print_json(&json!(rows))?;
        }
    }
    Ok(())
}
