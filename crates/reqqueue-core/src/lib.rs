//! reqqueue core - priority-ordered request queue and command framework
//!
//! This crate provides the pieces that do not touch the filesystem or the
//! network:
//! - The employment request record and its priority order
//! - `PriorityQueue`, a heap extended with tail access, bulk conditional
//!   removal and conditional insertion
//! - Command descriptors, the three-way `CommandStatus` and the
//!   `QueueCommand` trait every command implements
//! - `CommandRunner`, which dispatches one input line to a command
//! - The completion grammar built from command descriptors
//! - Error and logging facilities shared by the rest of the workspace

pub mod argument_schema;
pub mod command;
pub mod completion;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod queue;
pub mod runner;

// Macros expand to paths under this re-export.
pub use reqqueue_core_types;

pub use argument_schema::{ArgumentSchema, PropertyKind, SchemaProperty};
pub use command::{
    ArgumentKind, CommandDescriptor, CommandList, CommandStatus, QueueCommand,
};
pub use completion::{Completion, Grammar};
pub use errors::{ExError, ExErrorKind, ReqQueueError, Result};
pub use model::{EmploymentRequest, Record, Status};
pub use queue::{Prioritized, PriorityQueue};
pub use runner::{CommandRunner, Evaluator};
