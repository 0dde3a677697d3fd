//! Custom error types for the common library
//!
//! This module defines the errors raised by document storage backends.

use thiserror::Error;

/// Custom error type for document storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Error occurred while touching the backing file
    #[error("Document I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error occurred while encoding records as JSON
    #[error("Document serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Backend-specific failure
    #[error("Document backend error: {0}")]
    Backend(String),
}

/// Type alias for Result with StoreError
pub type StoreResult<T> = Result<T, StoreError>;
