// LogCard - core/model.rs
//
// Core data model types. Pure data definitions with no I/O and no
// platform dependencies.
//
// These types are the shared vocabulary across all layers.

use serde::{Deserialize, Serialize};

// =============================================================================
// Log Entry
// =============================================================================

/// A single recorded event, as stored in the event log and rendered as a card.
///
/// `title` and `message` are trusted markup: they are emitted into the card
/// unescaped, so callers must sanitise anything user-supplied before it gets
/// here. `time` is always rendered as escaped text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Short heading, rendered as markup followed by `:&nbsp;&nbsp;`.
    pub title: String,

    /// Pre-formatted timestamp, rendered as literal text.
    pub time: String,

    /// Event body, rendered as markup.
    pub message: String,
}

impl LogEntry {
    pub fn new(
        title: impl Into<String>,
        time: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            time: time.into(),
            message: message.into(),
        }
    }
}

// =============================================================================
// Message placement
// =============================================================================

/// Where a card's message paragraph is attached.
///
/// `TitleRow` reproduces the established card layout: the message sits next to
/// the title inside the title row and the `mt-4` wrapper stays empty.
/// `Wrapper` moves the message into that wrapper so it renders below the title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MessagePlacement {
    #[default]
    TitleRow,
    Wrapper,
}

impl MessagePlacement {
    /// Parse a config/CLI value (`"title_row"` or `"wrapper"`, case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "title_row" | "title-row" => Some(Self::TitleRow),
            "wrapper" => Some(Self::Wrapper),
            _ => None,
        }
    }

    /// Config-file spelling of this placement.
    pub fn name(&self) -> &'static str {
        match self {
            Self::TitleRow => "title_row",
            Self::Wrapper => "wrapper",
        }
    }
}

impl std::fmt::Display for MessagePlacement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_json_shape_matches_event_log() {
        let entry = LogEntry::new("File Created", "Jun 01, 2025 08:05:09 PM", "Created file");
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["title"], "File Created");
        assert_eq!(value["time"], "Jun 01, 2025 08:05:09 PM");
        assert_eq!(value["message"], "Created file");
        assert_eq!(value.as_object().unwrap().len(), 3);
    }

    #[test]
    fn test_placement_names() {
        assert_eq!(MessagePlacement::from_name("title_row"), Some(MessagePlacement::TitleRow));
        assert_eq!(MessagePlacement::from_name("WRAPPER"), Some(MessagePlacement::Wrapper));
        assert_eq!(MessagePlacement::from_name("below"), None);
        assert_eq!(MessagePlacement::default(), MessagePlacement::TitleRow);
        assert_eq!(MessagePlacement::Wrapper.to_string(), "wrapper");
    }
}
