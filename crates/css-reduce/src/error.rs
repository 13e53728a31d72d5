//! Reduction error types.
//!
//! Every variant is fatal to the current reduction call: the engine never
//! retries and never returns a partial stylesheet. Retries, if any, belong
//! to the calling layer wrapping a fresh rendering session.

use std::time::Duration;
use thiserror::Error;

/// An error that aborted a reduction.
#[derive(Debug, Error)]
pub enum ReduceError {
    /// The stylesheet could not be parsed even in lenient mode.
    #[error("stylesheet could not be parsed: {0}")]
    MalformedInput(String),

    /// A content source could not be analyzed. Dropping its usage evidence
    /// would silently drop rules, so the whole call fails instead.
    #[error("content source '{label}' could not be analyzed: {message}")]
    Analysis {
        /// The label of the offending source.
        label: String,
        /// What went wrong.
        message: String,
    },

    /// The overall deadline was exceeded.
    #[error("reduction did not finish within {limit:?}")]
    Timeout {
        /// The deadline that was exceeded.
        limit: Duration,
    },

    /// The rendering/fetch collaborator failed to produce an input. The
    /// engine never constructs this; it exists for callers that assemble
    /// the inputs.
    #[error("failed to obtain input: {0}")]
    Resource(String),

    /// A purge task panicked or was cancelled.
    #[error("purge task failed: {0}")]
    TaskFailed(String),
}
