//! Error Types
//!
//! Nothing here is fatal: read failures degrade to an empty list, write
//! failures leave the in-memory list authoritative, validation failures are
//! silent no-ops.

use thiserror::Error;

/// Failures talking to the durable key-value store
#[derive(Error, Debug)]
pub enum PersistenceError {
    /// Stored value is present but is not a valid item list
    #[error("stored list could not be parsed: {0}")]
    Read(#[source] serde_json::Error),

    /// The list could not be serialized
    #[error("list could not be encoded: {0}")]
    Encode(#[source] serde_json::Error),

    /// The host store is missing or refused access
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// The host store rejected the write (quota, private mode, ...)
    #[error("storage rejected write: {0}")]
    Write(String),
}

pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// Rejected user input
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("item text is empty")]
    EmptyText,
}
