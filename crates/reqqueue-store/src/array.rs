//! Whole-file JSON array storage
//!
//! A storage file holds exactly one JSON array. Every read parses the whole
//! file and every write replaces it. No handle is kept open between calls.
//! An empty file is the same as `[]`.

use crate::atomic::atomic_write;
use crate::errors::{file_not_found, io_error, malformed, not_accessible, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::{self, OpenOptions};
use std::io::ErrorKind;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

/// Backing file for an array of `T`
#[derive(Debug, Clone)]
pub struct ArrayStorage<T> {
    path: PathBuf,
    _records: PhantomData<fn() -> T>,
}

impl<T> ArrayStorage<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Bind to `path`, creating an empty file if none exists
    ///
    /// # Errors
    ///
    /// `ERR_NOT_ACCESSIBLE` if the path cannot be opened for both reading
    /// and writing (missing permissions, a directory, a bad parent).
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let accessible = !path.is_dir()
            && OpenOptions::new()
                .read(true)
                .write(true)
                .create(true)
                .truncate(false)
                .open(&path)
                .is_ok();
        if !accessible {
            return Err(not_accessible(&path));
        }

        tracing::debug!(path = %path.display(), "storage opened");
        Ok(Self {
            path,
            _records: PhantomData,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All records in file order
    ///
    /// A file removed since `open` reads as empty.
    ///
    /// # Errors
    ///
    /// `ERR_IO` if the file cannot be read, `ERR_SERIALIZATION` if it is
    /// not an array of records.
    pub fn read(&self) -> Result<Vec<T>> {
        match fs::read_to_string(&self.path) {
            Ok(text) => parse_array(&self.path, &text),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(io_error("read_storage", &self.path, e)),
        }
    }

    /// Replace the file contents with `records`
    ///
    /// # Errors
    ///
    /// `ERR_SERIALIZATION` or `ERR_IO` if the array cannot be produced or
    /// written.
    pub fn write(&self, records: &[T]) -> Result<()> {
        let json = serde_json::to_vec_pretty(records)
            .map_err(|e| malformed(&self.path, e).with_op("write_storage"))?;
        atomic_write(&self.path, &json)?;
        tracing::debug!(path = %self.path.display(), records = records.len(), "storage written");
        Ok(())
    }
}

/// Read a record array from a file named at runtime
///
/// Unlike the backing file, a missing file here is an error.
///
/// # Errors
///
/// `ERR_NOT_FOUND` if `path` does not exist, `ERR_IO` if it cannot be
/// read, `ERR_SERIALIZATION` if it is not an array of records.
pub fn read_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    match fs::read_to_string(path) {
        Ok(text) => parse_array(path, &text),
        Err(e) if e.kind() == ErrorKind::NotFound => Err(file_not_found(path)),
        Err(e) => Err(io_error("read_records", path, e)),
    }
}

fn parse_array<T: DeserializeOwned>(path: &Path, text: &str) -> Result<Vec<T>> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }
    let records: Vec<T> = serde_json::from_str(text).map_err(|e| malformed(path, e))?;
    tracing::debug!(path = %path.display(), records = records.len(), "storage read");
    Ok(records)
}
