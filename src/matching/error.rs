//! Errors surfaced by the parallel counting path.
//!
//! The predicate, the grouping step and the sequential count are infallible; only the
//! fan-out can fail, and only through a defect in a worker.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A worker panicked; no total is reported for the run.
    #[error("worker for length-{len} bucket panicked: {message}")]
    WorkerPanicked { len: usize, message: String },
}

impl Error {
    /// Build a [`Error::WorkerPanicked`] from a `catch_unwind` payload.
    pub fn worker_panicked(len: usize, payload: Box<dyn std::any::Any + Send>) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "non-string panic payload".to_string()
        };
        Self::WorkerPanicked { len, message }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
