//! Errors surfaced at the worker/client boundary.
//!
//! The engine itself has no fatal errors: missing targets, absent tracked
//! objects, and empty collections are ordinary `Option::None` results. Only
//! the async plumbing around it can fail.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("action channel closed before the session finished")]
    ActionChannelClosed,

    #[error("snapshot channel closed before the session finished")]
    SnapshotChannelClosed,
}
