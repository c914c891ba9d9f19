//! Error helpers for reqqueue-store
//!
//! Wraps the core `ExError` with storage-specific constructors

use reqqueue_core::errors::{ExError, ExErrorKind, ReqQueueError};
use std::path::Path;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// The backing file cannot be opened for both reading and writing
pub fn not_accessible(path: &Path) -> ExError {
    ReqQueueError::StorageNotAccessible {
        path: path.display().to_string(),
    }
    .into()
}

/// A file named at runtime does not exist
pub fn file_not_found(path: &Path) -> ExError {
    ExError::from(ReqQueueError::FileNotFound {
        path: path.display().to_string(),
    })
    .with_op("read_records")
}

/// File contents are not a JSON array of records
pub fn malformed(path: &Path, err: serde_json::Error) -> ExError {
    ReqQueueError::MalformedStorage {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
    .into()
}

/// Create an IO error carrying the file it concerns
pub fn io_error(operation: &str, path: &Path, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(operation.to_string())
        .with_path(path.display().to_string())
        .with_message(err.to_string())
}
