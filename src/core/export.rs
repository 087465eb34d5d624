// LogCard - core/export.rs
//
// CSV and JSON export of event log entries.
// Core layer: writes to any Write trait object.

use crate::core::model::LogEntry;
use crate::util::constants::MAX_EXPORT_ENTRIES;
use crate::util::error::ExportError;
use std::io::Write;
use std::path::Path;

fn check_limit(count: usize, max: usize) -> Result<(), ExportError> {
    if count > max {
        return Err(ExportError::TooManyEntries { count, max });
    }
    Ok(())
}

/// Export entries to CSV format.
///
/// Writes: title, time, message. Markup in title/message is exported as-is.
pub fn export_csv<W: Write>(
    entries: &[LogEntry],
    writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    check_limit(entries.len(), MAX_EXPORT_ENTRIES)?;
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["title", "time", "message"])
        .map_err(|e| ExportError::Csv {
            path: export_path.to_path_buf(),
            source: e,
        })?;

    let mut count = 0;
    for entry in entries {
        csv_writer
            .write_record([&entry.title, &entry.time, &entry.message])
            .map_err(|e| ExportError::Csv {
                path: export_path.to_path_buf(),
                source: e,
            })?;
        count += 1;
    }

    csv_writer.flush().map_err(|e| ExportError::Io {
        path: export_path.to_path_buf(),
        source: e,
    })?;

    tracing::debug!(count, path = %export_path.display(), "CSV export written");
    Ok(count)
}

/// Export entries to JSON format (array of objects).
pub fn export_json<W: Write>(
    entries: &[LogEntry],
    mut writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    check_limit(entries.len(), MAX_EXPORT_ENTRIES)?;
    serde_json::to_writer_pretty(&mut writer, entries).map_err(|e| ExportError::Json {
        path: export_path.to_path_buf(),
        source: e,
    })?;

    // Buffered writers only report their final write here.
    writer.flush().map_err(|e| ExportError::Io {
        path: export_path.to_path_buf(),
        source: e,
    })?;
    tracing::debug!(count = entries.len(), path = %export_path.display(), "JSON export written");
    Ok(entries.len())
}
