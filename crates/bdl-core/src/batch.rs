//! Batch coordinator: streams a line-delimited URL list into the worker pool
//! and blocks until every dispatched task has been attempted.
//!
//! The task channel is a rendezvous channel (capacity zero): each send blocks
//! until a worker is ready to take the URL, so at most `workers` tasks are in
//! flight and the producer never runs ahead of consumption.

use anyhow::{Context, Result};
use crossbeam_channel::Sender;
use std::io::BufRead;
use std::path::Path;
use std::sync::Arc;

use crate::fetch::{TaskOutcome, Transport};
use crate::pool::WorkerPool;

/// Reads URLs line by line from `input` and downloads them under `root` with
/// a pool of `workers` threads, emitting one [`TaskOutcome`] per line on
/// `outcomes`.
///
/// Lines are sent as-is: blank lines are not filtered and fail in derivation
/// like any other malformed URL. Per-task failures are outcomes, not errors;
/// the one fatal condition here is an I/O error from the line source itself,
/// surfaced after the pool has drained and joined.
pub fn run_batch<R: BufRead>(
    input: R,
    root: &Path,
    workers: usize,
    transport: Arc<dyn Transport>,
    outcomes: Sender<TaskOutcome>,
) -> Result<()> {
    let (task_tx, task_rx) = crossbeam_channel::bounded::<String>(0);
    let pool = WorkerPool::spawn(workers, task_rx, root.to_path_buf(), transport, outcomes);

    let mut read_error = None;
    for line in input.lines() {
        match line {
            Ok(url) => {
                // All receivers gone means every worker exited; nothing left
                // to feed.
                if task_tx.send(url).is_err() {
                    break;
                }
            }
            Err(e) => {
                read_error = Some(e);
                break;
            }
        }
    }

    // Closing the channel is the pool's termination signal.
    drop(task_tx);
    pool.join();

    match read_error {
        Some(e) => Err(e).context("reading URL list"),
        None => Ok(()),
    }
}
