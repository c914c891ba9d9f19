//! Removal commands
//!
//! `remove_lower` and `remove_greater` compare priority only, so the
//! reference record's applicant is irrelevant. `remove` and `remove_all`
//! compare every field.

use super::{removed, unchanged};
use reqqueue_core::command::parse_json_argument;
use reqqueue_core::{ArgumentKind, CommandStatus, PriorityQueue, QueueCommand, Record, Result};

/// Remove every record matching `predicate` and report the count
fn remove_where<T, F>(queue: &mut PriorityQueue<T>, predicate: F) -> CommandStatus
where
    T: Record,
    F: FnMut(&T) -> bool,
{
    let count = queue.remove_where(predicate);
    tracing::debug!(count, "bulk removal");
    removed(count)
}

fn removed_one<T>(record: Option<T>) -> CommandStatus {
    match record {
        Some(_) => removed(1),
        None => unchanged(),
    }
}

/// Remove records with strictly lower priority than the argument
pub struct RemoveLower;

impl<T: Record> QueueCommand<T> for RemoveLower {
    fn name(&self) -> &str {
        "remove_lower"
    }

    fn argument(&self) -> ArgumentKind {
        ArgumentKind::Structured
    }

    fn run(&self, args: &str, queue: &mut PriorityQueue<T>) -> Result<CommandStatus> {
        let reference: T = parse_json_argument(args)?;
        Ok(remove_where(queue, |r| r.priority_cmp(&reference).is_lt()))
    }
}

/// Remove records with strictly higher priority than the argument
pub struct RemoveGreater;

impl<T: Record> QueueCommand<T> for RemoveGreater {
    fn name(&self) -> &str {
        "remove_greater"
    }

    fn argument(&self) -> ArgumentKind {
        ArgumentKind::Structured
    }

    fn run(&self, args: &str, queue: &mut PriorityQueue<T>) -> Result<CommandStatus> {
        let reference: T = parse_json_argument(args)?;
        Ok(remove_where(queue, |r| r.priority_cmp(&reference).is_gt()))
    }
}

pub struct RemoveFirst;

impl<T: Record> QueueCommand<T> for RemoveFirst {
    fn name(&self) -> &str {
        "remove_first"
    }

    fn argument(&self) -> ArgumentKind {
        ArgumentKind::None
    }

    fn run(&self, _args: &str, queue: &mut PriorityQueue<T>) -> Result<CommandStatus> {
        Ok(removed_one(queue.pop_head()))
    }
}

pub struct RemoveLast;

impl<T: Record> QueueCommand<T> for RemoveLast {
    fn name(&self) -> &str {
        "remove_last"
    }

    fn argument(&self) -> ArgumentKind {
        ArgumentKind::None
    }

    fn run(&self, _args: &str, queue: &mut PriorityQueue<T>) -> Result<CommandStatus> {
        Ok(removed_one(queue.pop_tail()))
    }
}

/// Remove one record equal to the argument
pub struct Remove;

impl<T: Record> QueueCommand<T> for Remove {
    fn name(&self) -> &str {
        "remove"
    }

    fn argument(&self) -> ArgumentKind {
        ArgumentKind::Structured
    }

    fn run(&self, args: &str, queue: &mut PriorityQueue<T>) -> Result<CommandStatus> {
        let record: T = parse_json_argument(args)?;
        Ok(if queue.remove_first_equal(&record) {
            removed(1)
        } else {
            unchanged()
        })
    }
}

/// Remove every record equal to the argument
pub struct RemoveAll;

impl<T: Record> QueueCommand<T> for RemoveAll {
    fn name(&self) -> &str {
        "remove_all"
    }

    fn argument(&self) -> ArgumentKind {
        ArgumentKind::Structured
    }

    fn run(&self, args: &str, queue: &mut PriorityQueue<T>) -> Result<CommandStatus> {
        let record: T = parse_json_argument(args)?;
        Ok(remove_where(queue, |r| *r == record))
    }
}
