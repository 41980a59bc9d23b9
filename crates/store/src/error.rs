//! Error types for the storage layer.

// Error enum variant fields are self-documenting via their #[error(...)] messages
#![allow(missing_docs)]

use thiserror::Error;
use uuid::Uuid;

/// The primary error type for storage operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The requested beer was not found.
    #[error("beer not found: {id}")]
    NotFound { id: Uuid },

    /// A beer with the given ID already exists.
    #[error("beer already exists: {id}")]
    AlreadyExists { id: Uuid },

    /// Backend-specific failure.
    #[error("storage backend error: {message}")]
    Backend { message: String },
}

/// Result type alias for storage operations.
pub type StoreResult<T> = Result<T, StoreError>;
