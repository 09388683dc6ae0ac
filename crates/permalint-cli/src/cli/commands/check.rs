//! `permalint check <url>...` – is each URL already canonical?

use anyhow::Result;
use permalint_core::config::OutputFormat;
use permalint_core::is_canonical_url;
use serde_json::json;

/// Returns exit code 1 when any URL is not canonical.
pub fn run_check(urls: &[String], format: OutputFormat) -> Result<i32> {
    let results: Vec<(&str, bool)> = urls
        .iter()
        .map(|url| (url.as_str(), is_canonical_url(url)))
        .collect();

    match format {
        OutputFormat::Text => {
            for (url, canonical) in &results {
                let label = if *canonical { "ok" } else { "not canonical" };
                println!("{:<14} {}", label, url);
            }
        }
        OutputFormat::Json => {
            let rows: Vec<_> = results
                .iter()
                .map(|(url, canonical)| json!({ "url": url, "canonical": canonical }))
                .collect();
            super::print_json(&json!(rows))?;
        }
    }

    Ok(if results.iter().all(|(_, canonical)| *canonical) {
        0
    } else {
        1
    })
}
