// LogCard - platform/config.rs
//
// Platform directory resolution and config.toml loading with startup
// validation. Invalid values never abort startup: each one produces an
// actionable warning and falls back to its default.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::core::model::MessagePlacement;
use crate::util::constants;
use crate::util::error::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved platform paths for LogCard data and configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/logcard/ or %APPDATA%\LogCard\config\)
    pub config_dir: PathBuf,

    /// Data directory holding the default event log.
    pub data_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to current directory if platform dirs cannot be determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            let config_dir = proj_dirs.config_dir().to_path_buf();
            let data_dir = proj_dirs.data_dir().to_path_buf();

            tracing::debug!(
                config = %config_dir.display(),
                data = %data_dir.display(),
                "Platform paths resolved"
            );

            Self {
                config_dir,
                data_dir,
            }
        } else {
            tracing::warn!("Could not determine platform directories, using current directory");
            let fallback = PathBuf::from(".");
            Self {
                config_dir: fallback.clone(),
                data_dir: fallback,
            }
        }
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[store]` section.
    pub store: StoreSection,
    /// `[render]` section.
    pub render: RenderSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[store]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct StoreSection {
    /// Event log file path (empty = platform data directory default).
    pub path: Option<String>,
}

/// `[render]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RenderSection {
    /// "title_row" or "wrapper".
    pub message_placement: Option<String>,
    /// `<title>` of rendered pages.
    pub page_title: Option<String>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
    /// Log file path (empty = stderr only).
    pub file: Option<String>,
}

/// Validated application configuration derived from `config.toml`.
#[derive(Debug, Clone)]
pub struct AppConfig {
    // -- Store --
    /// Event log path override. `None` = platform default.
    pub store_path: Option<PathBuf>,

    // -- Render --
    pub message_placement: MessagePlacement,
    pub page_title: String,

    // -- Logging --
    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,
    /// Log file path.
    pub log_file: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            store_path: None,
            message_placement: MessagePlacement::default(),
            page_title: constants::DEFAULT_PAGE_TITLE.to_string(),
            log_level: None,
            log_file: None,
        }
    }
}

/// Path of `config.toml` inside `config_dir`.
pub fn config_path(config_dir: &Path) -> PathBuf {
    config_dir.join(constants::CONFIG_FILE_NAME)
}

/// Load and validate `config.toml` from the given config directory.
///
/// Returns `AppConfig` with validated values and the non-fatal problems found.
/// If the file does not exist, returns defaults with no warnings (first-run).
/// If the file is unreadable or unparseable, returns defaults and that error.
///
/// Runs before logging is initialised (the config chooses the log level),
/// so callers should report the returned warnings once tracing is up.
pub fn load_config(config_dir: &Path) -> (AppConfig, Vec<ConfigError>) {
    let config_path = config_path(config_dir);
    let mut warnings: Vec<ConfigError> = Vec::new();

    if !config_path.exists() {
        return (AppConfig::default(), warnings);
    }

    let content = match std::fs::read_to_string(&config_path) {
        Ok(c) => c,
        Err(e) => {
            warnings.push(ConfigError::Io {
                path: config_path,
                source: e,
            });
            return (AppConfig::default(), warnings);
        }
    };

    match toml::from_str::<RawConfig>(&content) {
        Ok(raw) => (validate(raw, &mut warnings), warnings),
        Err(e) => {
            warnings.push(ConfigError::TomlParse {
                path: config_path,
                source: e,
            });
            (AppConfig::default(), warnings)
        }
    }
}

/// Validate each field, accumulating every problem rather than stopping at the first.
fn validate(raw: RawConfig, warnings: &mut Vec<ConfigError>) -> AppConfig {
    let mut config = AppConfig::default();

    // -- Store: path --
    if let Some(path) = raw.store.path {
        if !path.trim().is_empty() {
            config.store_path = Some(PathBuf::from(path));
        }
    }

    // -- Render: message_placement --
    if let Some(ref name) = raw.render.message_placement {
        match MessagePlacement::from_name(name) {
            Some(placement) => config.message_placement = placement,
            None => warnings.push(ConfigError::ValueOutOfRange {
                field: "render.message_placement".to_string(),
                value: name.clone(),
                expected: format!(
                    "\"title_row\" or \"wrapper\"; using default ({})",
                    MessagePlacement::default()
                ),
            }),
        }
    }

    // -- Render: page_title --
    if let Some(title) = raw.render.page_title {
        let len = title.chars().count();
        if len == 0 || len > constants::MAX_PAGE_TITLE_LEN {
            warnings.push(ConfigError::ValueOutOfRange {
                field: "render.page_title".to_string(),
                value: format!("{len} characters"),
                expected: format!(
                    "1-{} characters; using default (\"{}\")",
                    constants::MAX_PAGE_TITLE_LEN,
                    constants::DEFAULT_PAGE_TITLE,
                ),
            });
        } else {
            config.page_title = title;
        }
    }

    // -- Logging: level --
    if let Some(ref level) = raw.logging.level {
        if constants::VALID_LOG_LEVELS.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level.to_lowercase());
        } else {
            warnings.push(ConfigError::ValueOutOfRange {
                field: "logging.level".to_string(),
                value: level.clone(),
                expected: format!(
                    "one of {}; using default ({})",
                    constants::VALID_LOG_LEVELS.join(", "),
                    constants::DEFAULT_LOG_LEVEL,
                ),
            });
        }
    }

    // -- Logging: file --
    if let Some(file) = raw.logging.file {
        if !file.is_empty() {
            config.log_file = Some(file);
        }
    }

    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, body: &str) {
        std::fs::write(dir.path().join(constants::CONFIG_FILE_NAME), body).unwrap();
    }

    #[test]
    fn test_missing_config_gives_defaults_without_warnings() {
        let dir = TempDir::new().unwrap();
        let (config, warnings) = load_config(dir.path());
        assert!(warnings.is_empty());
        assert_eq!(config.message_placement, MessagePlacement::TitleRow);
        assert_eq!(config.page_title, constants::DEFAULT_PAGE_TITLE);
        assert!(config.store_path.is_none());
    }

    #[test]
    fn test_valid_config_is_applied() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir,
            r#"
[store]
path = "/srv/logs/stage_logs.json"

[render]
message_placement = "wrapper"
page_title = "Stage Logs"

[logging]
level = "DEBUG"
file = "/tmp/logcard.log"

[unknown]
ignored = true
"#,
        );
        let (config, warnings) = load_config(dir.path());
        assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");
        assert_eq!(config.store_path, Some(PathBuf::from("/srv/logs/stage_logs.json")));
        assert_eq!(config.message_placement, MessagePlacement::Wrapper);
        assert_eq!(config.page_title, "Stage Logs");
        assert_eq!(config.log_level.as_deref(), Some("debug"));
        assert_eq!(config.log_file.as_deref(), Some("/tmp/logcard.log"));
    }

    #[test]
    fn test_invalid_values_warn_and_fall_back() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir,
            r#"
[render]
message_placement = "sideways"
page_title = ""

[logging]
level = "loud"
"#,
        );
        let (config, warnings) = load_config(dir.path());
        assert_eq!(warnings.len(), 3, "got: {warnings:?}");
        assert!(warnings
            .iter()
            .all(|w| matches!(w, ConfigError::ValueOutOfRange { .. })));
        assert!(warnings[0].to_string().contains("sideways"));
        assert_eq!(config.message_placement, MessagePlacement::TitleRow);
        assert_eq!(config.page_title, constants::DEFAULT_PAGE_TITLE);
        assert!(config.log_level.is_none());
    }

    #[test]
    fn test_unparseable_config_gives_defaults_with_warning() {
        let dir = TempDir::new().unwrap();
        write_config(&dir, "[render\nmessage_placement = ");
        let (config, warnings) = load_config(dir.path());
        assert_eq!(warnings.len(), 1);
        assert!(matches!(warnings[0], ConfigError::TomlParse { .. }));
        assert_eq!(config.message_placement, MessagePlacement::TitleRow);
    }
}
