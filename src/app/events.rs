// LogCard - app/events.rs
//
// Recording events into the event log. Each recorded event is stamped with
// the fixed display format, traced, and appended to the store.

use crate::app::store::LogStore;
use crate::core::model::LogEntry;
use crate::util::constants::{CLEARED_EVENT_MESSAGE, CLEARED_EVENT_TITLE, EVENT_TIMESTAMP_FORMAT};
use crate::util::error::StoreError;
use chrono::{DateTime, TimeZone};
use std::fmt;

/// Format `now` as an event timestamp, e.g. `Jun 01, 2025 08:05:09 PM`.
pub fn timestamp<Tz>(now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    now.format(EVENT_TIMESTAMP_FORMAT).to_string()
}

/// Stamp, trace, and persist one event. Returns the stored entry.
pub fn record_event<Tz>(
    store: &LogStore,
    title: &str,
    message: &str,
    now: &DateTime<Tz>,
) -> Result<LogEntry, StoreError>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let entry = LogEntry::new(title, timestamp(now), message);
    tracing::info!(title, message, time = %entry.time, "Event recorded");
    store.append(entry.clone())?;
    Ok(entry)
}

/// Empty the event log and report it.
///
/// The returned "Logs Cleared" record is traced but not persisted, so the
/// log is genuinely empty afterwards.
pub fn clear_events<Tz>(store: &LogStore, now: &DateTime<Tz>) -> Result<LogEntry, StoreError>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    store.clear()?;
    let record = LogEntry::new(CLEARED_EVENT_TITLE, timestamp(now), CLEARED_EVENT_MESSAGE);
    tracing::info!(
        title = %record.title,
        time = %record.time,
        message = %record.message,
        path = %store.path().display(),
        "Event log cleared"
    );
    Ok(record)
}
