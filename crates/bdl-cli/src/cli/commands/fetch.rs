//! `bdl fetch` – download every URL in a list file through the worker pool.

use anyhow::{Context, Result};
use bdl_core::batch::run_batch;
use bdl_core::config::BdlConfig;
use bdl_core::fetch::{HttpTransport, TaskOutcome, Transport};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;
use std::thread;

/// Runs a batch download. A missing `--file` prints a hint and returns
/// success (no exit-code distinction for that case); failing to open or read
/// the list is the fatal path.
pub fn run_fetch(cfg: &BdlConfig, file: Option<&Path>, workers: Option<usize>) -> Result<()> {
    let Some(path) = file else {
        println!("Please provide the path to the file containing URLs with --file");
        return Ok(());
    };

    let input = File::open(path)
        .with_context(|| format!("opening URL list {}", path.display()))?;
    let reader = BufReader::new(input);

    let workers = workers.unwrap_or(cfg.workers);
    let root = match &cfg.output_dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().context("resolving working directory")?,
    };
    tracing::info!(workers, root = %root.display(), "starting batch from {}", path.display());

    let transport: Arc<dyn Transport> = Arc::new(HttpTransport::new());
    let (outcome_tx, outcome_rx) = crossbeam_channel::unbounded::<TaskOutcome>();

    // Outcomes stream to stdout in arrival order; no summary tally at the
    // end, callers scan the lines for failures.
    let printer = thread::spawn(move || {
        for outcome in outcome_rx.iter() {
            match &outcome.result {
                Ok(written) => println!(
                    "downloaded {} -> {} ({} bytes)",
                    outcome.url,
                    written.path.display(),
                    written.bytes
                ),
                Err(e) => println!("failed {} [{}]: {}", outcome.url, e.stage(), e),
            }
        }
    });

    let result = run_batch(reader, &root, workers, transport, outcome_tx);

    // run_batch dropped the last outcome sender when its workers exited.
    let _ = printer.join();
    result
}
