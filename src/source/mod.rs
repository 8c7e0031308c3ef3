//! Country data sources and the one-shot background load.
//!
//! This module provides:
//! - HTTP loading from the country API
//! - File loading for offline use
//! - Unified InputSource enum for both
//! - `spawn_load`, which runs the fetch on a worker thread and hands the
//!   outcome back through a [`LoadHandle`]

use crate::model::{AppError, FetchError};
use crate::state::LoadOutcome;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, TryRecvError};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tracing::{debug, warn};

pub mod decode;
pub mod file;
pub mod http;

pub use file::FileSource;
pub use http::{HttpSource, DEFAULT_ENDPOINT};

/// Unified input source for the country list.
///
/// Sum type enforces exactly one variant.
#[derive(Debug, Clone)]
pub enum InputSource {
    /// Live API request.
    Http(HttpSource),
    /// Saved response on disk.
    File(FileSource),
}

impl InputSource {
    /// Fetch and decode the full country list. Blocking.
    ///
    /// # Errors
    ///
    /// See [`FetchError`] for the taxonomy.
    pub fn fetch(&self) -> LoadOutcome {
        match self {
            InputSource::Http(source) => source.fetch(),
            InputSource::File(source) => source.fetch(),
        }
    }

    /// Short human-readable description for logs and the status line.
    pub fn describe(&self) -> String {
        match self {
            InputSource::Http(source) => source.endpoint().to_string(),
            InputSource::File(source) => source.path().display().to_string(),
        }
    }
}

/// Pick the source: a file when `--file` was given, otherwise HTTP.
///
/// # Errors
///
/// Returns `AppError::Input` if the file does not exist, or `AppError::Fetch`
/// if the HTTP client cannot be built.
pub fn detect_input_source(
    file: Option<PathBuf>,
    http: impl FnOnce() -> Result<HttpSource, FetchError>,
) -> Result<InputSource, AppError> {
    match file {
        Some(path) => Ok(InputSource::File(FileSource::new(path)?)),
        None => Ok(InputSource::Http(http()?)),
    }
}

// ===== Background load =====

/// Owner side of an in-flight load.
///
/// Delivers exactly one outcome. Dropping the handle cancels delivery: the
/// worker checks the flag before sending, and a send to a dropped receiver
/// is discarded.
#[derive(Debug)]
pub struct LoadHandle {
    receiver: Receiver<LoadOutcome>,
    cancelled: Arc<AtomicBool>,
    delivered: bool,
}

impl LoadHandle {
    fn from_parts(receiver: Receiver<LoadOutcome>, cancelled: Arc<AtomicBool>) -> Self {
        Self {
            receiver,
            cancelled,
            delivered: false,
        }
    }

    /// Non-blocking poll for the outcome.
    ///
    /// Returns `Some` exactly once. A worker that exits without sending is
    /// reported as a transport error so loading always finishes.
    pub fn try_take(&mut self) -> Option<LoadOutcome> {
        if self.delivered {
            return None;
        }
        match self.receiver.try_recv() {
            Ok(outcome) => self.deliver(outcome),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => self.deliver(Err(worker_gone())),
        }
    }

    /// Blocking poll with a timeout. Same single-delivery rule as `try_take`.
    pub fn wait(&mut self, timeout: Duration) -> Option<LoadOutcome> {
        if self.delivered {
            return None;
        }
        match self.receiver.recv_timeout(timeout) {
            Ok(outcome) => self.deliver(outcome),
            Err(RecvTimeoutError::Timeout) => None,
            Err(RecvTimeoutError::Disconnected) => self.deliver(Err(worker_gone())),
        }
    }

    /// Whether the outcome has been handed out.
    pub fn is_finished(&self) -> bool {
        self.delivered
    }

    /// Stop the worker from delivering its result.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    fn deliver(&mut self, outcome: LoadOutcome) -> Option<LoadOutcome> {
        self.delivered = true;
        Some(outcome)
    }
}

impl Drop for LoadHandle {
    fn drop(&mut self) {
        if !self.delivered {
            debug!("Load handle dropped before completion; cancelling");
        }
        self.cancel();
    }
}

fn worker_gone() -> FetchError {
    FetchError::Transport("loader stopped before producing a result".to_string())
}

/// Start the one-shot load on a worker thread.
pub fn spawn_load(source: InputSource) -> LoadHandle {
    spawn_with(move || source.fetch())
}

/// Run any fetch function on a worker thread with the same delivery rules.
pub fn spawn_with<F>(fetch: F) -> LoadHandle
where
    F: FnOnce() -> LoadOutcome + Send + 'static,
{
    let (sender, receiver) = mpsc::channel();
    let cancelled = Arc::new(AtomicBool::new(false));
    let worker_cancelled = Arc::clone(&cancelled);

    let spawned = thread::Builder::new()
        .name("country-load".to_string())
        .spawn(move || {
            let outcome = fetch();
            if worker_cancelled.load(Ordering::Acquire) {
                debug!("Load finished after cancellation; discarding outcome");
                return;
            }
            // Receiver may already be gone; nothing left to update then.
            let _ = sender.send(outcome);
        });

    if let Err(err) = spawned {
        warn!(error = %err, "Failed to spawn load thread");
        let (sender, receiver) = mpsc::channel();
        let _ = sender.send(Err(FetchError::Transport(format!(
            "failed to start loader: {}",
            err
        ))));
        return LoadHandle::from_parts(receiver, cancelled);
    }

    LoadHandle::from_parts(receiver, cancelled)
}
