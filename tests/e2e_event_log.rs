// LogCard - tests/e2e_event_log.rs
//
// End-to-end tests for the event log pipeline: a JSON log on disk, loaded
// through the real store, rendered to cards and pages, recorded into and
// cleared, and exported. Real filesystem, real chrono, no mocks.

use chrono::{TimeZone, Utc};
use logcard::app::events::{clear_events, record_event};
use logcard::app::store::LogStore;
use logcard::core::card;
use logcard::core::export::{export_csv, export_json};
use logcard::core::model::{LogEntry, MessagePlacement};
use logcard::core::page::{render_document, render_list};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// =============================================================================
// Helpers
// =============================================================================

/// Absolute path to an on-disk fixture file.
fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Copy the fixture event log into a temp dir so tests may write to it.
fn writable_fixture_store(dir: &TempDir) -> LogStore {
    let path = dir.path().join("stage_logs.json");
    fs::copy(fixture("stage_logs.json"), &path).unwrap();
    LogStore::new(path)
}

// =============================================================================
// Card E2E
// =============================================================================

/// The canonical example: title row holds "Error:&nbsp;&nbsp;" then the
/// message, and the time sits beside it as a right-aligned sibling.
#[test]
fn e2e_error_card_structure() {
    let card = card::build("Error", "10:00:00", "Disk full");

    let row = card.title_row().unwrap().render();
    let title_at = row.find("Error:&nbsp;&nbsp;").expect("title with suffix");
    let message_at = row.find("Disk full").expect("message inside title row");
    assert!(title_at < message_at);

    let content = card.content().unwrap();
    let time = content.child_element(2).unwrap();
    assert!(time.has_class("ml-auto"));
    assert_eq!(time.text_content(), "10:00:00");
    assert_eq!(card.divider().unwrap().tag(), "hr");
}

/// Markup in title/message is trusted; markup in time is not.
#[test]
fn e2e_markup_and_text_modes() {
    let html = card::build("<b>X</b>", "<script>alert(1)</script>", "<i>y</i>").render();
    assert!(html.contains("<h3 class=\"text-lg font-medium text-gray-900\"><b>X</b>:&nbsp;&nbsp;</h3>"));
    assert!(html.contains("<p class=\"text-sm text-gray-500\"><i>y</i></p>"));
    assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    assert!(!html.contains("<script>"));
}

// =============================================================================
// Store + page E2E
// =============================================================================

/// The fixture log loads in order and renders one card per entry.
#[test]
fn e2e_fixture_renders_as_card_list() {
    let store = LogStore::new(fixture("stage_logs.json"));
    let entries = store.load();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].title, "Create Sample Files");

    let html = render_list(&entries, MessagePlacement::TitleRow);
    assert_eq!(html.matches("<hr class=\"border-t border-gray-200\">").count(), 3);
    assert!(html.contains("<code>/tmp/sample_files/sample_2.txt</code>"));
    assert_eq!(html.matches("<div class=\"mt-4\"></div>").count(), 3);
}

/// Recording events appends to an existing log and the page reflects them.
#[test]
fn e2e_record_then_render_document() {
    let dir = TempDir::new().unwrap();
    let store = writable_fixture_store(&dir);
    let now = Utc.with_ymd_and_hms(2025, 6, 1, 20, 5, 9).unwrap();

    record_event(&store, "Update Sample Files Completed", "Sample files updated", &now).unwrap();

    let entries = store.load();
    assert_eq!(entries.len(), 4);
    assert_eq!(
        entries[3],
        LogEntry::new(
            "Update Sample Files Completed",
            "Jun 01, 2025 08:05:09 PM",
            "Sample files updated"
        )
    );

    let doc = render_document(&entries, MessagePlacement::Wrapper, "Stage Logs");
    assert!(doc.contains("<title>Stage Logs</title>"));
    assert!(doc.contains("Jun 01, 2025 08:05:09 PM"));
    assert!(doc.contains("<div class=\"mt-4\"><p class=\"text-sm text-gray-500\">Sample files updated</p></div>"));
}

/// Clearing leaves a literal empty array and an empty rendered list.
#[test]
fn e2e_clear_empties_log() {
    let dir = TempDir::new().unwrap();
    let store = writable_fixture_store(&dir);
    let now = Utc.with_ymd_and_hms(2025, 6, 2, 9, 0, 0).unwrap();

    let record = clear_events(&store, &now).unwrap();
    assert_eq!(record.time, "Jun 02, 2025 09:00:00 AM");
    assert_eq!(fs::read_to_string(store.path()).unwrap(), "[]");
    assert_eq!(
        render_list(&store.load(), MessagePlacement::TitleRow),
        "<div id=\"logs\" class=\"space-y-4\"></div>"
    );
}

// =============================================================================
// Export E2E
// =============================================================================

#[test]
fn e2e_export_fixture_to_files() {
    let dir = TempDir::new().unwrap();
    let entries = LogStore::new(fixture("stage_logs.json")).load();

    let csv_path = dir.path().join("events.csv");
    let count = export_csv(&entries, fs::File::create(&csv_path).unwrap(), &csv_path).unwrap();
    assert_eq!(count, 3);
    let csv = fs::read_to_string(&csv_path).unwrap();
    assert_eq!(csv.lines().count(), 4);
    assert!(csv.starts_with("title,time,message\n"));

    let json_path = dir.path().join("events.json");
    export_json(&entries, fs::File::create(&json_path).unwrap(), &json_path).unwrap();
    let round: Vec<LogEntry> =
        serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(round, entries);
}

/// A missing log is a normal first run, not an error.
#[test]
fn e2e_missing_log_renders_empty_page() {
    let store = LogStore::new(Path::new("/nonexistent/logcard-e2e/stage_logs.json"));
    let doc = render_document(&store.load(), MessagePlacement::TitleRow, "Empty");
    assert!(doc.contains("<div id=\"logs\" class=\"space-y-4\"></div>"));
}
