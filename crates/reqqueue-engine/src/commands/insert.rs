//! Clearing and (conditional) insertion
//!
//! Comparisons against a missing head or tail count as satisfied, so the
//! first record always goes into an empty queue.

use super::{unchanged, STATUS_CLEARED, STATUS_ELEMENT_ADDED};
use reqqueue_core::command::parse_json_argument;
use reqqueue_core::{ArgumentKind, CommandStatus, PriorityQueue, QueueCommand, Record, Result};

/// Parse a record from `args` and insert it iff `predicate` holds
fn add_if<T, F>(args: &str, queue: &mut PriorityQueue<T>, predicate: F) -> Result<CommandStatus>
where
    T: Record,
    F: FnOnce(&T, &PriorityQueue<T>) -> bool,
{
    let record: T = parse_json_argument(args)?;
    let message = format!("{}: {}", STATUS_ELEMENT_ADDED, record);

    if queue.insert_if(record, predicate) {
        Ok(CommandStatus::Success(message))
    } else {
        tracing::debug!("insertion predicate rejected record");
        Ok(unchanged())
    }
}

/// Empty the queue; succeeds even when it already is
pub struct Clear;

impl<T: Record> QueueCommand<T> for Clear {
    fn name(&self) -> &str {
        "clear"
    }

    fn argument(&self) -> ArgumentKind {
        ArgumentKind::None
    }

    fn run(&self, _args: &str, queue: &mut PriorityQueue<T>) -> Result<CommandStatus> {
        queue.clear();
        Ok(CommandStatus::Success(STATUS_CLEARED.to_string()))
    }
}

pub struct Add;

impl<T: Record> QueueCommand<T> for Add {
    fn name(&self) -> &str {
        "add"
    }

    fn argument(&self) -> ArgumentKind {
        ArgumentKind::Structured
    }

    fn run(&self, args: &str, queue: &mut PriorityQueue<T>) -> Result<CommandStatus> {
        add_if(args, queue, |_, _| true)
    }
}

/// Insert iff the record outranks the current head
pub struct AddIfMax;

impl<T: Record> QueueCommand<T> for AddIfMax {
    fn name(&self) -> &str {
        "add_if_max"
    }

    fn argument(&self) -> ArgumentKind {
        ArgumentKind::Structured
    }

    fn run(&self, args: &str, queue: &mut PriorityQueue<T>) -> Result<CommandStatus> {
        add_if(args, queue, |record, q| {
            q.peek_head()
                .map_or(true, |head| record.priority_cmp(head).is_gt())
        })
    }
}

/// Insert iff the current tail outranks the record
pub struct AddIfMin;

impl<T: Record> QueueCommand<T> for AddIfMin {
    fn name(&self) -> &str {
        "add_if_min"
    }

    fn argument(&self) -> ArgumentKind {
        ArgumentKind::Structured
    }

    fn run(&self, args: &str, queue: &mut PriorityQueue<T>) -> Result<CommandStatus> {
        add_if(args, queue, |record, q| {
            q.peek_tail()
                .map_or(true, |tail| record.priority_cmp(&tail).is_lt())
        })
    }
}
