//! CLI for the permalint URL canonicalizer.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use permalint_core::config::{self, OutputFormat, PermalintConfig};
use std::path::PathBuf;

use commands::{run_check, run_guess, run_names, run_normalize};

/// Top-level CLI for permalint.
#[derive(Debug, Parser)]
#[command(name = "permalint")]
#[command(about = "Canonicalize package source URLs and suggest package names", long_about = None)]
pub struct Cli {
    /// Print results as JSON.
    #[arg(long, global = true)]
    pub json: bool,

    /// Read configuration from this file instead of the XDG config dir.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the canonical form of each URL.
    Normalize {
        /// URLs to canonicalize.
        #[arg(required = true)]
        urls: Vec<String>,
    },

    /// Report whether each URL is already canonical; exits 1 if any is not.
    Check {
        /// URLs to check.
        #[arg(required = true)]
        urls: Vec<String>,
    },

    /// Print the one canonical URL the inputs agree on, or `-`.
    Guess {
        /// Spellings of the same package source.
        #[arg(required = true)]
        urls: Vec<String>,
    },

    /// Print candidate package names for a URL.
    Names {
        /// Package source URL.
        url: String,
    },
}

impl Cli {
    /// Run the parsed command; returns the process exit code.
    pub fn run(self) -> Result<i32> {
        let cfg = match &self.config {
            Some(path) => config::load_from(path)?,
            None => config::load_or_init()?,
        };
        crate::init_logging(cfg.log_filter.as_deref());
        tracing::debug!("loaded config: {:?}", cfg);

        let format = self.output_format(&cfg);
        match self.command {
            CliCommand::Normalize { urls } => run_normalize(&urls, format)?,
            CliCommand::Check { urls } => return run_check(&urls, format),
            CliCommand::Guess { urls } => run_guess(&urls, format)?,
            CliCommand::Names { url } => run_names(&url, format)?,
        }

        Ok(0)
    }

    fn output_format(&self, cfg: &PermalintConfig) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            cfg.output
        }
    }
}
