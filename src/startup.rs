// Startup module - banner and startup log lines
//
// Headless mode prints a short banner to stderr (stdout carries the answer).
// TUI mode logs the same information so it shows up in the logs strip.

use crate::config::{Config, VERSION};

/// ANSI color codes for terminal output
mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const GREEN: &str = "\x1b[32m";
    pub const MAGENTA: &str = "\x1b[35m";
}

/// Describe where the config came from
fn config_source() -> String {
    match Config::config_path() {
        Some(path) if path.exists() => path.display().to_string(),
        _ => "defaults (no config file)".to_string(),
    }
}

/// Print the startup banner before a headless run
pub fn print_startup(config: &Config) {
    use colors::*;

    eprintln!();
    eprintln!("  {BOLD}{MAGENTA}The Oracle{RESET} {DIM}v{VERSION}{RESET}");
    eprintln!("  {DIM}Ask questions about your documents{RESET}");
    eprintln!();
    eprintln!("  {DIM}Config:{RESET} {GREEN}✓{RESET} {}", config_source());
    eprintln!("  {DIM}Service:{RESET} {BOLD}{}{RESET}", config.api.ask_url());
    eprintln!();
}

/// Print startup messages to the TUI logs strip
pub fn log_startup(config: &Config) {
    tracing::info!("🔮 The Oracle v{}", VERSION);
    tracing::info!("Config: {}", config_source());
    tracing::info!(
        "Service: {} (timeout {} ms)",
        config.api.ask_url(),
        config.api.timeout_ms
    );
    if !config.api.headers.is_empty() {
        let names: Vec<&str> = config.api.headers.keys().map(String::as_str).collect();
        tracing::debug!("Extra headers: {}", names.join(", "));
    }
}
