//! Diagnostic log
//!
//! Append-only, line-delimited JSON log for conditions that are recovered
//! from silently, such as a failed persistence write. Each line is one
//! entry, flushed immediately.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{OutlayError, OutlayResult};

/// Severity of a diagnostic entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagLevel {
    Info,
    Warning,
    Error,
}

/// One diagnostic log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagEntry {
    pub timestamp: DateTime<Utc>,
    pub level: DiagLevel,
    pub message: String,
}

impl DiagEntry {
    pub fn new(level: DiagLevel, message: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            level,
            message: message.into(),
        }
    }
}

/// Writes diagnostic entries to the diag log file
pub struct DiagLogger {
    log_path: PathBuf,
}

impl DiagLogger {
    /// Create a logger that appends to the given path
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append one entry and flush
    pub fn log(&self, level: DiagLevel, message: impl Into<String>) -> OutlayResult<()> {
        let entry = DiagEntry::new(level, message);

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| OutlayError::Io(format!("Failed to open diag log: {}", e)))?;

        let json = serde_json::to_string(&entry)
            .map_err(|e| OutlayError::Json(format!("Failed to serialize diag entry: {}", e)))?;
        writeln!(file, "{}", json)
            .map_err(|e| OutlayError::Io(format!("Failed to write diag entry: {}", e)))?;
        file.flush()
            .map_err(|e| OutlayError::Io(format!("Failed to flush diag log: {}", e)))?;

        Ok(())
    }

    /// Append an error-level entry
    pub fn error(&self, message: impl Into<String>) -> OutlayResult<()> {
        self.log(DiagLevel::Error, message)
    }

    /// Read all entries, oldest first
    pub fn read_all(&self) -> OutlayResult<Vec<DiagEntry>> {
        if !self.log_path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.log_path)
            .map_err(|e| OutlayError::Io(format!("Failed to open diag log: {}", e)))?;
        let reader = BufReader::new(file);

        let mut entries = Vec::new();
        for (line_num, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| {
                OutlayError::Io(format!("Failed to read diag log line {}: {}", line_num + 1, e))
            })?;
            if line.trim().is_empty() {
                continue;
            }
            let entry: DiagEntry = serde_json::from_str(&line).map_err(|e| {
                OutlayError::Json(format!(
                    "Failed to parse diag entry at line {}: {}",
                    line_num + 1,
                    e
                ))
            })?;
            entries.push(entry);
        }

        Ok(entries)
    }
}
