//! Atomic write primitives
//!
//! Uses temp→rename so a crash mid-save never leaves a truncated array

use crate::errors::{io_error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Sibling path used while writing `target`
fn temp_path(target: &Path) -> PathBuf {
    let mut name = target
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    target.with_file_name(name)
}

/// Atomically replace the contents of a file
pub fn atomic_write(target_path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = target_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| io_error("create_dir", parent, e))?;
        }
    }

    let temp = temp_path(target_path);
    fs::write(&temp, content).map_err(|e| io_error("write_temp", &temp, e))?;
    fs::rename(&temp, target_path).map_err(|e| io_error("rename_temp", target_path, e))?;

    Ok(())
}
