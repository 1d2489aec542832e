//! Logging init: file under the XDG state dir, stderr when that fails.
//!
//! Download progress and failures go to stdout from the CLI layer; this log
//! only carries diagnostics (tracing events from the core).

use anyhow::Result;
use std::fs;
use std::io;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,bdl=debug"))
}

/// Initialize logging, writing to `~/.local/state/bdl/bdl.log` when the
/// state dir is usable and to stderr otherwise. Never fails; a broken state
/// dir must not take the CLI down.
pub fn init() {
    match open_log_file() {
        Ok((file, path)) => {
            let writer = BoxMakeWriter::new(std::sync::Mutex::new(file));
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_writer(writer)
                .with_ansi(false)
                .init();
            tracing::info!("bdl logging initialized at {}", path.display());
        }
        Err(err) => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_writer(io::stderr)
                .with_ansi(false)
                .init();
            tracing::warn!("log file unavailable, logging to stderr: {:#}", err);
        }
    }
}

fn open_log_file() -> Result<(fs::File, std::path::PathBuf)> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("bdl")?;
    let log_dir = xdg_dirs.get_state_home().join("bdl");
    fs::create_dir_all(&log_dir)?;
    let path = log_dir.join("bdl.log");
    let file = fs::OpenOptions::new().create(true).append(true).open(&path)?;
    Ok((file, path))
}
