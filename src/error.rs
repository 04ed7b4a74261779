//! Error types for ddns-backend.

use thiserror::Error;

use crate::store::StoreError;

/// Errors that can occur in the backend.
#[derive(Debug, Error)]
pub enum BackendError {
    /// IO error (bind, accept, serve)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Record store failure
    #[error("Record store error: {0}")]
    Store(#[from] StoreError),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Config(String),
}
