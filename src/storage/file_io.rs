//! Atomic JSON file I/O
//!
//! All durable state lives in small JSON files. Writes go to a temp file
//! in the same directory followed by a rename, so a reader never observes
//! a partially written file.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::OutlayError;

/// Read JSON from a file, returning `T::default()` when the file is missing
///
/// A file that exists but fails to parse is an error; callers decide
/// whether that is fatal.
pub fn read_json<T, P>(path: P) -> Result<T, OutlayError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(T::default());
    }

    let file = File::open(path)
        .map_err(|e| OutlayError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;
    serde_json::from_reader(BufReader::new(file))
        .map_err(|e| OutlayError::Storage(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Write JSON to a file atomically (temp file + rename)
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), OutlayError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            OutlayError::Storage(format!("Failed to create {}: {}", parent.display(), e))
        })?;
    }

    // Temp file must live in the same directory for the rename to be atomic
    let temp_path = path.with_extension("json.tmp");

    let file = File::create(&temp_path)
        .map_err(|e| OutlayError::Storage(format!("Failed to create temp file: {}", e)))?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| OutlayError::Storage(format!("Failed to serialize: {}", e)))?;
    writer
        .flush()
        .map_err(|e| OutlayError::Storage(format!("Failed to flush: {}", e)))?;
    writer
        .get_ref()
        .sync_all()
        .map_err(|e| OutlayError::Storage(format!("Failed to sync: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        OutlayError::Storage(format!("Failed to rename temp file: {}", e))
    })
}
