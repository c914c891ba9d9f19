//! Queue persistence
//!
//! Disk order never constrains memory order: reading inserts every stored
//! record into a fresh queue under the record's own priority.

use crate::array::ArrayStorage;
use crate::errors::Result;
use reqqueue_core::{PriorityQueue, Record};
use std::path::{Path, PathBuf};

/// Backing file for a queue of `T`
#[derive(Debug, Clone)]
pub struct QueueStorage<T> {
    array: ArrayStorage<T>,
}

impl<T: Record> QueueStorage<T> {
    /// Bind to `path`, creating an empty file if none exists
    ///
    /// # Errors
    ///
    /// `ERR_NOT_ACCESSIBLE` if the file cannot be read and written.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        Ok(Self {
            array: ArrayStorage::open(path)?,
        })
    }

    pub fn path(&self) -> &Path {
        self.array.path()
    }

    /// Rebuild a queue from the file
    ///
    /// # Errors
    ///
    /// Propagates read and parse failures of the backing file.
    pub fn read(&self) -> Result<PriorityQueue<T>> {
        Ok(self.array.read()?.into_iter().collect())
    }

    /// Overwrite the file with the queue contents, head first
    ///
    /// # Errors
    ///
    /// Propagates serialization and write failures.
    pub fn write(&self, queue: &PriorityQueue<T>) -> Result<()> {
        self.array.write(&queue.to_sorted_vec())
    }
}
