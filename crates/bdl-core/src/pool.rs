//! Fixed pool of download workers over a shared task channel.
//!
//! All workers are started before the first URL is sent; a closed and
//! drained channel is the only termination signal. A task failure never
//! stops a worker, it reports the outcome and goes back to receiving.

use crossbeam_channel::{Receiver, Sender};
use std::path::PathBuf;
use std::sync::Arc;
use std::thread::JoinHandle;

use crate::fetch::{run_task, TaskOutcome, Transport};

/// Handle over exactly `n` spawned workers. Pool membership is fixed for the
/// lifetime of the run; there is no scaling and no cancellation.
pub struct WorkerPool {
    handles: Vec<JoinHandle<()>>,
}

impl WorkerPool {
    /// Starts `workers` threads (at least one), each receiving URLs from
    /// `tasks` and emitting a [`TaskOutcome`] per URL on `outcomes`. Any
    /// worker may process any task; completion order is arbitrary.
    pub fn spawn(
        workers: usize,
        tasks: Receiver<String>,
        root: PathBuf,
        transport: Arc<dyn Transport>,
        outcomes: Sender<TaskOutcome>,
    ) -> Self {
        let handles = (0..workers.max(1))
            .map(|_| {
                let tasks = tasks.clone();
                let root = root.clone();
                let transport = Arc::clone(&transport);
                let outcomes = outcomes.clone();
                std::thread::spawn(move || worker_loop(tasks, &root, transport, outcomes))
            })
            .collect();
        Self { handles }
    }

    /// Blocks until every worker has returned (i.e. the task channel is
    /// closed and fully drained).
    pub fn join(self) {
        for handle in self.handles {
            handle
                .join()
                .unwrap_or_else(|e| panic!("download worker panicked: {:?}", e));
        }
    }
}

fn worker_loop(
    tasks: Receiver<String>,
    root: &std::path::Path,
    transport: Arc<dyn Transport>,
    outcomes: Sender<TaskOutcome>,
) {
    for url in tasks.iter() {
        let result = run_task(root, &url, transport.as_ref());
        match &result {
            Ok(written) => {
                tracing::debug!(url = %url, path = %written.path.display(), bytes = written.bytes, "task done")
            }
            Err(e) => tracing::warn!(url = %url, stage = e.stage(), "task failed: {}", e),
        }
        // Nobody listening for outcomes is fine; keep draining the queue.
        let _ = outcomes.send(TaskOutcome { url, result });
    }
}
