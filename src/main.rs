// LogCard - main.rs
//
// CLI entry point. Handles:
// 1. CLI argument parsing
// 2. config.toml loading (before logging, since it selects the level)
// 3. Logging initialisation (debug mode support)
// 4. Dispatch to render / log / clear / page / export

use clap::{Parser, Subcommand, ValueEnum};
use logcard::app::{events, store};
use logcard::core::model::{LogEntry, MessagePlacement};
use logcard::core::{card, export, page};
use logcard::platform::config::{self, AppConfig, PlatformPaths};
use logcard::util;
use logcard::util::error::{LogCardError, Result};
use std::io::Write;
use std::path::{Path, PathBuf};

/// LogCard - render event-log entries as styled HTML cards.
#[derive(Parser, Debug)]
#[command(name = "logcard", version, about)]
struct Cli {
    /// Event log file (overrides [store] path and the platform default).
    #[arg(short = 's', long = "store", global = true)]
    store: Option<PathBuf>,

    /// Directory containing config.toml.
    #[arg(short = 'c', long = "config-dir", global = true)]
    config_dir: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug", global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print a single card fragment to stdout.
    Render {
        /// Card title (trusted markup).
        #[arg(long)]
        title: String,
        /// Timestamp text (always escaped).
        #[arg(long)]
        time: String,
        /// Card message (trusted markup).
        #[arg(long)]
        message: String,
        /// Where the message paragraph is attached.
        #[arg(long, value_enum)]
        placement: Option<PlacementArg>,
    },

    /// Record an event in the event log, stamped with the current local time.
    Log {
        title: String,
        message: String,
    },

    /// Empty the event log.
    Clear,

    /// Render the whole event log as HTML.
    Page {
        /// Output file (stdout if omitted).
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Emit only the card list container, not a full document.
        #[arg(long)]
        fragment: bool,
        #[arg(long, value_enum)]
        placement: Option<PlacementArg>,
    },

    /// Export the event log as CSV or JSON.
    Export {
        #[arg(short, long, value_enum, default_value_t = ExportFormat::Csv)]
        format: ExportFormat,
        /// Output file (stdout if omitted).
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum PlacementArg {
    TitleRow,
    Wrapper,
}

impl From<PlacementArg> for MessagePlacement {
    fn from(arg: PlacementArg) -> Self {
        match arg {
            PlacementArg::TitleRow => MessagePlacement::TitleRow,
            PlacementArg::Wrapper => MessagePlacement::Wrapper,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ExportFormat {
    Csv,
    Json,
}

fn main() {
    let cli = Cli::parse();

    let platform_paths = PlatformPaths::resolve();
    let config_dir = cli
        .config_dir
        .clone()
        .unwrap_or_else(|| platform_paths.config_dir.clone());
    let (app_config, config_warnings) = config::load_config(&config_dir);

    util::logging::init(
        cli.debug,
        app_config.log_level.as_deref(),
        app_config.log_file.as_deref(),
    );

    tracing::debug!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        "LogCard starting"
    );

    for warning in &config_warnings {
        tracing::warn!(warning = %warning, "Configuration warning");
    }

    let store_path = cli
        .store
        .clone()
        .or_else(|| app_config.store_path.clone())
        .unwrap_or_else(|| store::store_path(&platform_paths.data_dir));

    if let Err(e) = run(cli.command, &app_config, &store_path) {
        tracing::error!(error = %e, "Command failed");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(command: Command, config: &AppConfig, store_path: &Path) -> Result<()> {
    let log_store = store::LogStore::new(store_path);

    match command {
        Command::Render {
            title,
            time,
            message,
            placement,
        } => {
            let placement = placement.map_or(config.message_placement, Into::into);
            let entry = LogEntry::new(title, time, message);
            let html = card::build_with(&entry, placement).render();
            write_output(None, &html)
        }
        Command::Log { title, message } => {
            let entry = events::record_event(&log_store, &title, &message, &chrono::Local::now())?;
            println!("{}", entry.time);
            Ok(())
        }
        Command::Clear => {
            events::clear_events(&log_store, &chrono::Local::now())?;
            Ok(())
        }
        Command::Page {
            output,
            fragment,
            placement,
        } => {
            let placement = placement.map_or(config.message_placement, Into::into);
            let entries = log_store.load();
            let html = if fragment {
                page::render_list(&entries, placement)
            } else {
                page::render_document(&entries, placement, &config.page_title)
            };
            tracing::info!(entries = entries.len(), "Event log rendered");
            write_output(output.as_deref(), &html)
        }
        Command::Export { format, output } => {
            let entries = log_store.load();
            let label = output.clone().unwrap_or_else(|| PathBuf::from("-"));
            let count = match output {
                Some(ref path) => {
                    let file = std::fs::File::create(path).map_err(|e| LogCardError::Io {
                        path: path.clone(),
                        operation: "create export file",
                        source: e,
                    })?;
                    export_to(format, &entries, std::io::BufWriter::new(file), &label)?
                }
                None => export_to(format, &entries, std::io::stdout().lock(), &label)?,
            };
            tracing::info!(count, path = %label.display(), "Export complete");
            Ok(())
        }
    }
}

fn export_to<W: Write>(
    format: ExportFormat,
    entries: &[LogEntry],
    writer: W,
    label: &Path,
) -> Result<usize> {
    let count = match format {
        ExportFormat::Csv => export::export_csv(entries, writer, label)?,
        ExportFormat::Json => export::export_json(entries, writer, label)?,
    };
    Ok(count)
}

fn write_output(path: Option<&Path>, html: &str) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, html).map_err(|e| LogCardError::Io {
            path: path.to_path_buf(),
            operation: "write output",
            source: e,
        }),
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{html}").map_err(|e| LogCardError::Io {
                path: PathBuf::from("-"),
                operation: "write stdout",
                source: e,
            })
        }
    }
}
