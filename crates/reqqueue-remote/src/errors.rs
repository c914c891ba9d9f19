//! Error helpers for reqqueue-remote

use reqqueue_core::errors::{ExError, ReqQueueError};

pub use reqqueue_core::errors::Result;

/// The connection failed while performing `operation`
pub fn transport_error(operation: &str, err: std::io::Error) -> ExError {
    ExError::from(ReqQueueError::Transport {
        reason: err.to_string(),
    })
    .with_op(operation.to_string())
}

/// The peer sent something that does not follow the protocol
pub fn protocol_error(operation: &str, reason: impl Into<String>) -> ExError {
    ExError::from(ReqQueueError::Protocol {
        reason: reason.into(),
    })
    .with_op(operation.to_string())
}
