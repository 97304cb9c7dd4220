//! Error Types
//!
//! Failures of the remote store and of the board operations built on it.

use thiserror::Error;

/// Failures talking to `/api/tasks`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Request never got a response
    #[error("network failure: {0}")]
    Network(String),
    /// Response with a non-2xx status
    #[error("server responded with status {status}")]
    Server { status: u16 },
    /// 2xx response whose body is not a task
    #[error("could not decode response: {0}")]
    Decode(String),
}

/// Errors surfaced by repository and editor operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error(transparent)]
    Store(#[from] StoreError),
    /// Rejected before any request was made; the only error shown to the user
    #[error("{0}")]
    Validation(String),
}

impl BoardError {
    pub fn is_validation(&self) -> bool {
        matches!(self, BoardError::Validation(_))
    }
}

pub type BoardResult<T> = Result<T, BoardError>;
