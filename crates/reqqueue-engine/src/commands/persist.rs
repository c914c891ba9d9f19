//! Commands that touch files: load, save, import

use super::{STATUS_IMPORTED, STATUS_LOADED, STATUS_SAVED};
use reqqueue_core::{
    ArgumentKind, CommandStatus, PriorityQueue, QueueCommand, Record, ReqQueueError, Result,
};
use reqqueue_store::{read_records, QueueStorage};
use std::path::Path;

/// Replace the queue with the backing file's contents
pub struct Load<T> {
    storage: QueueStorage<T>,
}

impl<T> Load<T> {
    pub fn new(storage: QueueStorage<T>) -> Self {
        Self { storage }
    }
}

impl<T: Record> QueueCommand<T> for Load<T> {
    fn name(&self) -> &str {
        "load"
    }

    fn argument(&self) -> ArgumentKind {
        ArgumentKind::None
    }

    fn run(&self, _args: &str, queue: &mut PriorityQueue<T>) -> Result<CommandStatus> {
        *queue = self.storage.read()?;
        tracing::debug!(path = %self.storage.path().display(), len = queue.len(), "queue loaded");
        Ok(CommandStatus::Success(STATUS_LOADED.to_string()))
    }
}

/// Overwrite the backing file with the queue
pub struct Save<T> {
    storage: QueueStorage<T>,
}

impl<T> Save<T> {
    pub fn new(storage: QueueStorage<T>) -> Self {
        Self { storage }
    }
}

impl<T: Record> QueueCommand<T> for Save<T> {
    fn name(&self) -> &str {
        "save"
    }

    fn argument(&self) -> ArgumentKind {
        ArgumentKind::None
    }

    fn run(&self, _args: &str, queue: &mut PriorityQueue<T>) -> Result<CommandStatus> {
        self.storage.write(queue)?;
        Ok(CommandStatus::Success(STATUS_SAVED.to_string()))
    }
}

/// Append the records of another file to the queue
pub struct Import;

impl<T: Record> QueueCommand<T> for Import {
    fn name(&self) -> &str {
        "import"
    }

    fn argument(&self) -> ArgumentKind {
        ArgumentKind::FilePath
    }

    fn run(&self, args: &str, queue: &mut PriorityQueue<T>) -> Result<CommandStatus> {
        let path = args.trim();
        if path.is_empty() {
            return Err(ReqQueueError::InvalidArgument {
                reason: "a file path is required".to_string(),
            }
            .into());
        }

        let records: Vec<T> = read_records(Path::new(path))?;
        tracing::debug!(path, count = records.len(), "records imported");
        queue.extend(records);
        Ok(CommandStatus::Success(STATUS_IMPORTED.to_string()))
    }
}
