// LogCard - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.
// Card class strings live here too so the rendered structure is reviewable
// in one place.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "LogCard";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "LogCard";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Card structure
// =============================================================================

/// Outer card container.
pub const CARD_CONTAINER_CLASSES: &str = "bg-white overflow-hidden shadow sm:rounded-lg relative";

/// Padded flex row holding the title row, message wrapper, and time.
pub const CARD_CONTENT_CLASSES: &str = "px-4 py-5 sm:p-6 flex items-center";

/// Row holding the title heading (and, by default, the message).
pub const CARD_TITLE_ROW_CLASSES: &str = "flex items-center justify-between";

/// Title heading.
pub const CARD_TITLE_CLASSES: &str = "text-lg font-medium text-gray-900";

/// Separate message wrapper below the title row.
pub const CARD_MESSAGE_WRAPPER_CLASSES: &str = "mt-4";

/// Message paragraph.
pub const CARD_MESSAGE_CLASSES: &str = "text-sm text-gray-500";

/// Right-aligned time paragraph.
pub const CARD_TIME_CLASSES: &str = "text-sm font-medium text-gray-500 ml-auto";

/// Horizontal divider after the content wrapper.
pub const CARD_DIVIDER_CLASSES: &str = "border-t border-gray-200";

/// Markup appended to every title. Two non-breaking spaces keep the message
/// visually separated from the colon.
pub const CARD_TITLE_SUFFIX: &str = ":&nbsp;&nbsp;";

// =============================================================================
// Page rendering
// =============================================================================

/// `id` of the list container that holds rendered cards.
pub const LOG_LIST_ID: &str = "logs";

/// Classes on the list container.
pub const LOG_LIST_CLASSES: &str = "space-y-4";

/// Default `<title>` for a rendered page.
pub const DEFAULT_PAGE_TITLE: &str = "Event Log";

/// Maximum length of a configured page title, in characters.
pub const MAX_PAGE_TITLE_LEN: usize = 200;

/// Tailwind Play CDN script so standalone pages render with the card styles.
pub const TAILWIND_CDN_URL: &str = "https://cdn.tailwindcss.com";

// =============================================================================
// Event log store
// =============================================================================

/// Default event log file name.
pub const STORE_FILE_NAME: &str = "stage_logs.json";

/// Extension appended to the store path for the temp file during atomic writes.
pub const STORE_TEMP_EXTENSION: &str = "json.tmp";

/// Maximum event log file size in bytes. Larger files are treated as corrupt
/// rather than loaded into memory.
pub const MAX_STORE_FILE_SIZE: u64 = 64 * 1024 * 1024; // 64 MB

/// Maximum number of entries the event log may hold.
pub const MAX_STORE_ENTRIES: usize = 100_000;

/// Indent width used when pretty-printing the event log.
pub const STORE_JSON_INDENT: &[u8] = b"    ";

// =============================================================================
// Events
// =============================================================================

/// `chrono` format for event timestamps, e.g. `Jun 01, 2025 08:05:09 PM`.
pub const EVENT_TIMESTAMP_FORMAT: &str = "%b %d, %Y %I:%M:%S %p";

/// Title of the record emitted when the event log is cleared.
pub const CLEARED_EVENT_TITLE: &str = "Logs Cleared";

/// Message of the record emitted when the event log is cleared.
pub const CLEARED_EVENT_MESSAGE: &str = "All logs have been cleared.";

// =============================================================================
// Export
// =============================================================================

/// Absolute maximum entries in a single export operation.
pub const MAX_EXPORT_ENTRIES: usize = 1_000_000;

// =============================================================================
// Logging
// =============================================================================

/// Default log level when no override is configured.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Log levels accepted in `[logging] level`.
pub const VALID_LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

// =============================================================================
// File names
// =============================================================================

/// Config file name within the config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";
