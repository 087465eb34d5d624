// LogCard - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// Card building itself is infallible; these cover the store, export,
// and configuration layers around it.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all LogCard operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum LogCardError {
    /// Event log read or write failed.
    Store(StoreError),

    /// Export operation failed.
    Export(ExportError),

    /// I/O error with path context.
    Io {
        path: PathBuf,
        operation: &'static str,
        source: io::Error,
    },
}

impl fmt::Display for LogCardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Store(e) => write!(f, "Event log error: {e}"),
            Self::Export(e) => write!(f, "Export error: {e}"),
            Self::Io {
                path,
                operation,
                source,
            } => write!(
                f,
                "I/O error during {operation} on '{}': {source}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for LogCardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Store(e) => Some(e),
            Self::Export(e) => Some(e),
            Self::Io { source, .. } => Some(source),
        }
    }
}

// ---------------------------------------------------------------------------
// Store errors
// ---------------------------------------------------------------------------

/// Errors related to the JSON event log.
#[derive(Debug)]
pub enum StoreError {
    /// I/O error reading or writing the event log.
    Io { path: PathBuf, source: io::Error },

    /// JSON serialisation of the event log failed.
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The event log is larger than the configured maximum and was left as-is.
    TooLarge { path: PathBuf, size: u64, max: u64 },

    /// Appending would push the event log past its entry limit.
    TooManyEntries { count: usize, max: usize },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Event log I/O error '{}': {source}", path.display())
            }
            Self::Json { path, source } => {
                write!(
                    f,
                    "Event log serialisation error '{}': {source}",
                    path.display()
                )
            }
            Self::TooLarge { path, size, max } => write!(
                f,
                "Event log '{}' is {size} bytes, exceeds maximum of {max} bytes. \
                 Archive or clear it before recording more events.",
                path.display()
            ),
            Self::TooManyEntries { count, max } => write!(
                f,
                "Event log holds {count} entries, maximum is {max}. \
                 Clear the log before recording more events."
            ),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<StoreError> for LogCardError {
    fn from(e: StoreError) -> Self {
        Self::Store(e)
    }
}

// ---------------------------------------------------------------------------
// Export errors
// ---------------------------------------------------------------------------

/// Errors related to export operations.
#[derive(Debug)]
pub enum ExportError {
    /// I/O error writing the export file.
    Io { path: PathBuf, source: io::Error },

    /// CSV serialisation error.
    Csv { path: PathBuf, source: csv::Error },

    /// JSON serialisation error.
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Export would exceed maximum entry count.
    TooManyEntries { count: usize, max: usize },
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Export I/O error '{}': {source}", path.display())
            }
            Self::Csv { path, source } => {
                write!(f, "CSV export error '{}': {source}", path.display())
            }
            Self::Json { path, source } => {
                write!(f, "JSON export error '{}': {source}", path.display())
            }
            Self::TooManyEntries { count, max } => write!(
                f,
                "Export of {count} entries exceeds maximum of {max}."
            ),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Csv { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ExportError> for LogCardError {
    fn from(e: ExportError) -> Self {
        Self::Export(e)
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Problems found while loading configuration.
///
/// Never fatal: the loader reports these as warnings and falls back to
/// defaults, so there is no conversion into `LogCardError`.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A config value is out of the allowed range.
    ValueOutOfRange {
        field: String,
        value: String,
        expected: String,
    },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::ValueOutOfRange {
                field,
                value,
                expected,
            } => write!(
                f,
                "Config '{field}' = '{value}' is out of range. Expected: {expected}"
            ),
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for LogCard results.
pub type Result<T> = std::result::Result<T, LogCardError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_store_error_chains_io_source() {
        let err: LogCardError = StoreError::Io {
            path: PathBuf::from("stage_logs.json"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        }
        .into();

        let msg = err.to_string();
        assert!(msg.starts_with("Event log error:"), "got: {msg}");
        assert!(msg.contains("stage_logs.json"));

        let inner = err.source().expect("top-level error must expose its cause");
        assert!(inner.source().is_some(), "io::Error must stay in the chain");
    }

    #[test]
    fn test_too_many_entries_has_no_source() {
        let err = ExportError::TooManyEntries { count: 10, max: 5 };
        assert!(err.source().is_none());
        assert!(err.to_string().contains("10"));
    }
}
