//! Command framework
//!
//! A command is a named operation with a declared argument kind. Executing
//! one against a queue yields a `CommandStatus`. Command sets are explicit
//! ordered lists of boxed `QueueCommand` values.

pub mod argument;
pub mod descriptor;
pub mod status;

pub use argument::parse_json_argument;
pub use descriptor::{ArgumentKind, CommandDescriptor};
pub use status::CommandStatus;

use crate::errors::Result;
use crate::queue::PriorityQueue;

/// One executable command of a command set
pub trait QueueCommand<T> {
    /// Name typed by the user; unique within a command set
    fn name(&self) -> &str;

    /// What the rest of the input line is expected to hold
    fn argument(&self) -> ArgumentKind;

    /// Execute against the live queue
    ///
    /// `args` is the raw text after the command name (possibly empty).
    /// Failures that are the user's to fix (unparsable argument, missing
    /// import file) are returned as `Err` and reported as an `Error`
    /// status by the dispatcher.
    fn run(&self, args: &str, queue: &mut PriorityQueue<T>) -> Result<CommandStatus>;

    fn descriptor(&self) -> CommandDescriptor {
        CommandDescriptor::new(self.name(), self.argument())
    }
}

/// An ordered collection of commands for one record type
pub trait CommandList<T> {
    /// Commands in help/completion order
    fn into_commands(self) -> Vec<Box<dyn QueueCommand<T>>>;
}

impl<T> CommandList<T> for Vec<Box<dyn QueueCommand<T>>> {
    fn into_commands(self) -> Vec<Box<dyn QueueCommand<T>>> {
        self
    }
}
