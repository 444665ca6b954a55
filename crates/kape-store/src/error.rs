//! # Store Error Types
//!
//! Error types for file persistence operations.
//!
//! ## Error Policy
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  READ  a missing or unreadable file                         │
//! │        → degrade to an empty collection, warn! diagnostic   │
//! │                                                             │
//! │  READ  a malformed record within a file                     │
//! │        → skip it, warn! diagnostic, keep the rest           │
//! │                                                             │
//! │  WRITE failure                                              │
//! │        → StoreError to the caller; a sale must never go     │
//! │          unlogged silently                                  │
//! └─────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// File persistence errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Writing the store file failed. Surfaced, never swallowed: the
    /// caller must know the record did not land on disk.
    #[error("failed to write {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Encoding the customer document failed.
    #[error("failed to encode store document: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
