//! CLI for the BDL bulk downloader.

mod commands;

use anyhow::Result;
use bdl_core::config;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use commands::{run_fetch, run_scan};

/// Top-level CLI for the BDL bulk downloader.
#[derive(Debug, Parser)]
#[command(name = "bdl")]
#[command(about = "BDL: bulk URL downloader with a fixed worker pool", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Download every URL listed in a file, one per line.
    Fetch {
        /// Path to the file containing URLs.
        #[arg(long, value_name = "PATH")]
        file: Option<PathBuf>,

        /// Number of concurrent download workers (overrides the config value).
        #[arg(long, value_name = "N")]
        workers: Option<usize>,
    },

    /// Scan a config tree for location blocks missing a trailing slash that
    /// also use an alias directive.
    Scan {
        /// Root directory to scan for .conf files.
        dir: PathBuf,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Fetch { file, workers } => run_fetch(&cfg, file.as_deref(), workers)?,
            CliCommand::Scan { dir } => run_scan(&dir)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
