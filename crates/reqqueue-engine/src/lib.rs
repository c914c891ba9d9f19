//! reqqueue engine - the queue command set
//!
//! Wires the core queue operations and the file store into the fourteen
//! commands an operator types: clear, add, add_if_max, add_if_min,
//! remove_lower, remove_greater, remove_first, remove_last, remove,
//! remove_all, info, load, save, import.

pub mod commands;

pub use commands::{EmploymentRequestCommands, RecordCommands};
