//! Structured logging facility
//!
//! - Single initialization point via `init(profile)`
//! - Boundary macros (`log_op_start!`, `log_op_end!`, `log_op_error!`)
//! - Test capture mode for deterministic assertions
//!
//! # Usage
//!
//! ```rust
//! use reqqueue_core::logging_facility::{init, Profile};
//!
//! init(Profile::Development);
//! ```
//!
//! Command dispatch and remote requests own the op boundaries. Lower layers
//! (queue, storage) log with `tracing::debug!` only.

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
