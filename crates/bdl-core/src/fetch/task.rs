//! One task end-to-end: derive the directory, create it, create the file,
//! stream the body into it. Exactly one attempt per URL, failure at any
//! stage aborts that task only.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::url_model::{self, InvalidUrlStructure};

use super::{FetchError, Transport};

/// Everything that can go wrong with a single download task, tagged by the
/// stage that failed. All variants are per-task and non-fatal to the batch.
#[derive(Debug, Error)]
pub enum TaskError {
    #[error(transparent)]
    InvalidUrl(#[from] InvalidUrlStructure),
    #[error("creating directory {path}: {source}")]
    DirectoryCreate { path: PathBuf, source: io::Error },
    #[error("creating file {path}: {source}")]
    FileCreate { path: PathBuf, source: io::Error },
    #[error("request failed: {0}")]
    Request(#[source] curl::Error),
    /// The file exists but is empty; no body bytes were streamed.
    #[error("unexpected HTTP status {0}")]
    NonOkStatus(u32),
    /// The file may hold a partial body (no rollback for a batch tool).
    #[error("writing response body: {0}")]
    Write(#[source] io::Error),
}

impl TaskError {
    /// Short stage tag for log and outcome lines.
    pub fn stage(&self) -> &'static str {
        match self {
            TaskError::InvalidUrl(_) => "derive",
            TaskError::DirectoryCreate { .. } => "create-dir",
            TaskError::FileCreate { .. } => "create-file",
            TaskError::Request(_) => "request",
            TaskError::NonOkStatus(_) => "status",
            TaskError::Write(_) => "write",
        }
    }
}

impl From<FetchError> for TaskError {
    fn from(e: FetchError) -> Self {
        match e {
            FetchError::Request(e) => TaskError::Request(e),
            FetchError::NonOkStatus(code) => TaskError::NonOkStatus(code),
            FetchError::Write(e) => TaskError::Write(e),
        }
    }
}

/// Successful download: where it landed and how many body bytes were written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Written {
    pub path: PathBuf,
    pub bytes: u64,
}

/// Result of one task, paired with the URL it was for. Emitted over the
/// outcome channel; presentation is the caller's job.
#[derive(Debug)]
pub struct TaskOutcome {
    pub url: String,
    pub result: Result<Written, TaskError>,
}

/// Runs one task: derives the output directory under `root`, creates it
/// (0755 on unix, parents included), creates/truncates the destination file,
/// and streams the body through `transport`. The file handle is dropped on
/// every path out, including early failure after creation.
pub fn run_task(root: &Path, url: &str, transport: &dyn Transport) -> Result<Written, TaskError> {
    let out_dir = root.join(url_model::derive_output_dir(url)?);
    let out_path = out_dir.join(url_model::filename_from_url(url));

    create_dir_all(&out_dir).map_err(|source| TaskError::DirectoryCreate {
        path: out_dir.clone(),
        source,
    })?;

    let mut file = File::create(&out_path).map_err(|source| TaskError::FileCreate {
        path: out_path.clone(),
        source,
    })?;

    // A failure from here on leaves the created file behind, empty or
    // partially written; callers see the stage in the error.
    let bytes = transport.get(url, &mut file)?;

    Ok(Written {
        path: out_path,
        bytes,
    })
}

#[cfg(unix)]
fn create_dir_all(dir: &Path) -> io::Result<()> {
    use std::os::unix::fs::DirBuilderExt;
    fs::DirBuilder::new().recursive(true).mode(0o755).create(dir)
}

#[cfg(not(unix))]
fn create_dir_all(dir: &Path) -> io::Result<()> {
    fs::DirBuilder::new().recursive(true).create(dir)
}
