//! reqqueue store - file persistence for queued records
//!
//! Provides:
//! - `ArrayStorage`, a file holding one JSON array of records, read and
//!   written wholesale
//! - `QueueStorage`, which rebuilds a `PriorityQueue` from such a file
//! - `read_records`, for one-off reads of files named at runtime (import)
//! - Atomic temp-file-then-rename writes

pub mod array;
pub mod atomic;
pub mod errors;
pub mod queue;

pub use array::{read_records, ArrayStorage};
pub use errors::Result;
pub use queue::QueueStorage;
