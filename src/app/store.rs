// LogCard - app/store.rs
//
// The JSON event log: a single pretty-printed array of `LogEntry` objects.
//
// Design principles:
// - Display reads are forgiving. A missing, empty, oversized, or malformed
//   file loads as an empty log and the problem is logged, never surfaced.
// - Read-modify-write is strict about size: an oversized or unreadable log
//   is refused, never overwritten. Missing and malformed logs start fresh.
// - Writes are atomic (write→temp, rename→final) so a crash mid-write
//   never corrupts the previous good log.
// - The parent directory is created on first write.

use crate::core::model::LogEntry;
use crate::util::constants::{
    MAX_STORE_ENTRIES, MAX_STORE_FILE_SIZE, STORE_FILE_NAME, STORE_JSON_INDENT,
    STORE_TEMP_EXTENSION,
};
use crate::util::error::StoreError;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Resolve the default event log path inside the platform data directory.
pub fn store_path(data_dir: &Path) -> PathBuf {
    data_dir.join(STORE_FILE_NAME)
}

/// Handle to an event log file. Holds no cached state: every call reads or
/// writes the file so external edits are always picked up.
///
/// `append` is an unlocked read-modify-write. Two processes appending to the
/// same log at once can lose one of the entries.
#[derive(Debug, Clone)]
pub struct LogStore {
    path: PathBuf,
    max_file_size: u64,
    max_entries: usize,
}

impl LogStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            max_file_size: MAX_STORE_FILE_SIZE,
            max_entries: MAX_STORE_ENTRIES,
        }
    }

    /// Override the size and entry limits (defaults in util::constants).
    pub fn with_limits(mut self, max_file_size: u64, max_entries: usize) -> Self {
        self.max_file_size = max_file_size;
        self.max_entries = max_entries;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every entry. Returns an empty list when the log is unusable.
    pub fn load(&self) -> Vec<LogEntry> {
        match self.load_for_write() {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(error = %e, "Event log unusable; treating as empty");
                Vec::new()
            }
        }
    }

    /// Load every entry ahead of a rewrite.
    ///
    /// Missing, empty, and malformed logs come back empty (they are replaced
    /// on the next write). Oversized or unreadable logs are errors so their
    /// content is never overwritten.
    fn load_for_write(&self) -> Result<Vec<LogEntry>, StoreError> {
        let path = &self.path;

        match std::fs::metadata(path) {
            Ok(meta) if meta.len() > self.max_file_size => {
                return Err(StoreError::TooLarge {
                    path: path.clone(),
                    size: meta.len(),
                    max: self.max_file_size,
                });
            }
            Ok(_) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(StoreError::Io {
                    path: path.clone(),
                    source: e,
                })
            }
        }

        let content = std::fs::read_to_string(path).map_err(|e| StoreError::Io {
            path: path.clone(),
            source: e,
        })?;

        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        match serde_json::from_str::<Vec<LogEntry>>(&content) {
            Ok(entries) => {
                tracing::debug!(path = %path.display(), entries = entries.len(), "Event log loaded");
                Ok(entries)
            }
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Event log is malformed; treating as empty"
                );
                Ok(Vec::new())
            }
        }
    }

    /// Append one entry and rewrite the log.
    pub fn append(&self, entry: LogEntry) -> Result<(), StoreError> {
        let mut entries = self.load_for_write()?;
        if entries.len() >= self.max_entries {
            return Err(StoreError::TooManyEntries {
                count: entries.len(),
                max: self.max_entries,
            });
        }
        entries.push(entry);
        self.write(&entries)
    }

    /// Replace the log with an empty array.
    pub fn clear(&self) -> Result<(), StoreError> {
        self.write(&[])
    }

    fn write(&self, entries: &[LogEntry]) -> Result<(), StoreError> {
        let path = &self.path;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| StoreError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(STORE_JSON_INDENT);
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        entries.serialize(&mut ser).map_err(|e| StoreError::Json {
            path: path.clone(),
            source: e,
        })?;

        // A crash between write and rename loses the new entry but never the
        // previous log.
        let tmp = path.with_extension(STORE_TEMP_EXTENSION);
        std::fs::write(&tmp, &buf).map_err(|e| StoreError::Io {
            path: tmp.clone(),
            source: e,
        })?;

        std::fs::rename(&tmp, path).map_err(|e| {
            let _ = std::fs::remove_file(&tmp);
            StoreError::Io {
                path: path.clone(),
                source: e,
            }
        })?;

        tracing::debug!(path = %path.display(), entries = entries.len(), "Event log written");
        Ok(())
    }
}

// =============================================================================
// Unit tests
// =============================================================================
