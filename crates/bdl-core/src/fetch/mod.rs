//! Fetch-and-store: transport seam, HTTP implementation, and the per-task
//! runner that wires derivation, directory creation, and body streaming
//! together.
//!
//! The [`Transport`] trait is the boundary the worker pool sees; tests swap
//! in an instrumented double, production uses the curl-backed
//! [`HttpTransport`].

mod http;
mod task;

pub use http::HttpTransport;
pub use task::{run_task, TaskError, TaskOutcome, Written};

use std::io;
use thiserror::Error;

/// Error from a single transport-level GET.
///
/// Split from [`TaskError`] so transports stay ignorant of filesystem stages;
/// the task runner maps these onto its own taxonomy.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection or transfer failure before/while talking to the server.
    #[error("request failed: {0}")]
    Request(#[source] curl::Error),
    /// Response completed with a status other than 200. No body bytes were
    /// written to the sink.
    #[error("unexpected HTTP status {0}")]
    NonOkStatus(u32),
    /// The sink failed while the body was streaming; the transfer was
    /// aborted and the sink may hold a partial write.
    #[error("writing response body: {0}")]
    Write(#[source] io::Error),
}

/// Blocking GET transport streaming the response body into a sink.
pub trait Transport: Send + Sync {
    /// Fetches `url` and streams the body into `out` without buffering the
    /// whole response. Returns the number of body bytes written. A non-200
    /// response writes nothing and fails with [`FetchError::NonOkStatus`].
    fn get(&self, url: &str, out: &mut dyn io::Write) -> Result<u64, FetchError>;
}
