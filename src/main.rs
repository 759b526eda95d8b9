// The Oracle - terminal client for a document question-answering service
//
// Collects a question, sends it to the answer service over HTTP and types the
// answer out with its sources. Falls back to a local demonstration answer
// when the service cannot be reached.
//
// Architecture:
// - Oracle core: request lifecycle controller, presenter, typewriter, demo
//   responder, notifications (UI-agnostic, behind Surface/AnswerService)
// - TUI (ratatui): draws the shared response region and screen model
// - Headless: `oracle ask` drives the same controller from the command line

mod cli;
mod config;
mod headless;
mod logging;
mod oracle;
mod startup;
mod tui;

use anyhow::Result;
use cli::Mode;
use config::{Config, LogRotation, LoggingConfig};
use logging::{LogBuffer, TuiLogLayer};
use oracle::Outcome;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Handle CLI commands first (config --show, --reset, --edit, --path)
    // If a command was handled, exit early
    let Some(mode) = cli::handle_cli() else {
        return Ok(());
    };

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    let config = Config::from_env();

    // Create log buffer for TUI mode
    let log_buffer = LogBuffer::new();
    let enable_tui = mode == Mode::Tui;

    // The guard must be kept alive for the duration of the program to ensure logs flush
    let _file_guard = init_logging(&config.logging, enable_tui.then(|| log_buffer.clone()));

    match mode {
        Mode::Tui => {
            startup::log_startup(&config);
            tui::run_tui(config, log_buffer).await
        }
        Mode::Ask(question) => {
            startup::print_startup(&config);
            match headless::run_ask(config, question).await? {
                // Validation message was already printed
                Outcome::Rejected(_) => std::process::exit(2),
                _ => Ok(()),
            }
        }
    }
}

/// Initialize tracing with conditional output
///
/// - TUI mode: capture logs to the buffer (prevents garbling the display)
/// - Headless mode: human-readable logs on stderr
/// - File logging: optionally JSON to rotating log files (in addition to above)
///
/// Precedence: RUST_LOG env var > config file > default "info"
fn init_logging(logging: &LoggingConfig, tui_buffer: Option<LogBuffer>) -> Option<WorkerGuard> {
    let default_filter = format!("oracle={}", logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    let tui_layer = tui_buffer.clone().map(TuiLogLayer::new);
    let stderr_layer = tui_buffer
        .is_none()
        .then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    // Set up file logging if enabled (non-blocking writer with rotation)
    let (file_layer, guard) = if logging.file_enabled {
        match std::fs::create_dir_all(&logging.file_dir) {
            Ok(()) => {
                // Create rolling file appender based on configured rotation
                let file_appender = match logging.file_rotation {
                    LogRotation::Hourly => {
                        tracing_appender::rolling::hourly(&logging.file_dir, &logging.file_prefix)
                    }
                    LogRotation::Daily => {
                        tracing_appender::rolling::daily(&logging.file_dir, &logging.file_prefix)
                    }
                    LogRotation::Never => {
                        tracing_appender::rolling::never(&logging.file_dir, &logging.file_prefix)
                    }
                };

                // Wrap in non-blocking writer (writes happen in background thread)
                let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

                // File layer uses JSON format for structured log parsing
                let layer = tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(non_blocking)
                    .with_ansi(false);
                (Some(layer), Some(guard))
            }
            Err(e) => {
                // Fall back to non-file logging
                eprintln!(
                    "Warning: Could not create log directory {:?}: {}",
                    logging.file_dir, e
                );
                (None, None)
            }
        }
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tui_layer)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    guard
}
