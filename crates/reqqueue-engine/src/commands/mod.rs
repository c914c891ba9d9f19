//! Command set construction and shared status messages
//!
//! Commands are generic over any `Record`; `RecordCommands` lists them in
//! help order and hands the storage-backed ones a handle to the backing
//! file. Dispatch-level boundary logging lives in the core runner, so the
//! commands here only emit `tracing::debug!` details.

pub mod insert;
pub mod persist;
pub mod remove;
pub mod report;

use chrono::{DateTime, Local};
use reqqueue_core::{CommandList, CommandStatus, EmploymentRequest, QueueCommand, Record};
use reqqueue_store::QueueStorage;

pub const STATUS_CLEARED: &str = "The queue has been cleared";
pub const STATUS_ELEMENT_ADDED: &str = "An element has been added to the queue";
pub const STATUS_UNCHANGED: &str = "The queue has not been changed";
pub const STATUS_ONE_REMOVED: &str = "One element has been removed from the queue";
pub const STATUS_MANY_REMOVED: &str = "elements have been removed from the queue";
pub const STATUS_LOADED: &str = "The queue has been reloaded";
pub const STATUS_SAVED: &str = "The queue has been saved";
pub const STATUS_IMPORTED: &str = "The queue has been imported";

pub(crate) fn unchanged() -> CommandStatus {
    CommandStatus::Neutral(STATUS_UNCHANGED.to_string())
}

/// Status for a removal of `count` records
pub(crate) fn removed(count: usize) -> CommandStatus {
    match count {
        0 => unchanged(),
        1 => CommandStatus::Success(STATUS_ONE_REMOVED.to_string()),
        n => CommandStatus::Success(format!("{} {}", n, STATUS_MANY_REMOVED)),
    }
}

/// The standard command set for records of type `T`
pub struct RecordCommands<T> {
    storage: QueueStorage<T>,
    init_date: DateTime<Local>,
}

/// Command set for employment requests
pub type EmploymentRequestCommands = RecordCommands<EmploymentRequest>;

impl<T: Record> RecordCommands<T> {
    /// Stamp the instantiation time now
    pub fn new(storage: QueueStorage<T>) -> Self {
        Self::with_init_date(storage, Local::now())
    }

    pub fn with_init_date(storage: QueueStorage<T>, init_date: DateTime<Local>) -> Self {
        Self { storage, init_date }
    }
}

impl<T: Record + 'static> CommandList<T> for RecordCommands<T> {
    fn into_commands(self) -> Vec<Box<dyn QueueCommand<T>>> {
        vec![
            Box::new(insert::Clear),
            Box::new(insert::Add),
            Box::new(insert::AddIfMax),
            Box::new(insert::AddIfMin),
            Box::new(remove::RemoveLower),
            Box::new(remove::RemoveGreater),
            Box::new(remove::RemoveFirst),
            Box::new(remove::RemoveLast),
            Box::new(remove::Remove),
            Box::new(remove::RemoveAll),
            Box::new(report::Info::new(self.init_date)),
            Box::new(persist::Load::new(self.storage.clone())),
            Box::new(persist::Save::new(self.storage)),
            Box::new(persist::Import),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removed_message_by_count() {
        assert_eq!(removed(0), unchanged());
        assert_eq!(
            removed(1),
            CommandStatus::Success("One element has been removed from the queue".to_string())
        );
        assert_eq!(
            removed(3),
            CommandStatus::Success("3 elements have been removed from the queue".to_string())
        );
    }
}
