//! Configuration tests
//!
//! Guards that everything `to_toml` writes can be read back, and that the
//! layering (env > file > defaults) holds.

use super::*;

// ─────────────────────────────────────────────────────────────────────────────
// Round-trip tests
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_config_roundtrip_default() {
    let config = Config::default();
    let toml_str = config.to_toml();

    let parsed = Config::parse_file_config(&toml_str);
    assert!(
        parsed.is_ok(),
        "Default config should round-trip.\nTOML:\n{}\nError: {:?}",
        toml_str,
        parsed.err()
    );

    let reloaded = Config::from_file_config(parsed.unwrap(), None, None);
    assert_eq!(reloaded.api, config.api);
    assert_eq!(reloaded.ui, config.ui);
    assert_eq!(reloaded.logging.level, config.logging.level);
    assert_eq!(reloaded.logging.file_rotation, config.logging.file_rotation);
}

#[test]
fn test_config_roundtrip_with_headers_and_options() {
    let mut config = Config::default();
    config.api.base_url = "https://abc123.ngrok.io/".to_string();
    config.api.headers.insert(
        "Authorization".to_string(),
        "Bearer \"quoted\" token".to_string(),
    );
    config.api.headers.insert("X-Client".to_string(), "oracle".to_string());
    config.api.options.temperature = 1.0;
    config.api.options.include_sources = false;
    config.logging.file_rotation = LogRotation::Never;

    let toml_str = config.to_toml();
    let parsed = Config::parse_file_config(&toml_str).unwrap_or_else(|e| {
        panic!("Config should round-trip.\nTOML:\n{}\nError: {}", toml_str, e)
    });
    let reloaded = Config::from_file_config(parsed, None, None);

    assert_eq!(reloaded.api, config.api);
    assert_eq!(reloaded.logging.file_rotation, LogRotation::Never);
}

#[test]
fn test_config_roundtrip_with_control_characters() {
    let mut config = Config::default();
    config
        .api
        .headers
        .insert("X-Tag".to_string(), "esc\u{1b}[0m\ttab".to_string());
    config.logging.file_prefix = "oracle\\log".to_string();

    let toml_str = config.to_toml();
    let parsed = Config::parse_file_config(&toml_str).unwrap_or_else(|e| {
        panic!("Config should round-trip.\nTOML:\n{}\nError: {}", toml_str, e)
    });
    let reloaded = Config::from_file_config(parsed, None, None);

    assert_eq!(reloaded.api.headers["X-Tag"], "esc\u{1b}[0m\ttab");
    assert_eq!(reloaded.logging.file_prefix, "oracle\\log");
}

// ─────────────────────────────────────────────────────────────────────────────
// Defaults and layering
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_defaults() {
    let config = Config::default();
    assert_eq!(config.api.timeout_ms, 30_000);
    assert_eq!(config.api.health_timeout_ms, 5_000);
    assert_eq!(config.api.options, GenerationOptions::default());
    assert_eq!(config.api.options.max_tokens, 500);
    assert!(config.api.options.include_sources);
    assert_eq!(config.ui.typewriter_interval_ms, 30);
    assert_eq!(config.ui.notification_dwell_ms, 4000);
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let file = Config::parse_file_config(
        r#"
[api]
base_url = "https://colab.example"

[api.options]
max_tokens = 64
"#,
    )
    .unwrap();
    let config = Config::from_file_config(file, None, None);

    assert_eq!(config.api.base_url, "https://colab.example");
    assert_eq!(config.api.endpoint, "/api/consulta");
    assert_eq!(config.api.options.max_tokens, 64);
    assert_eq!(config.api.options.temperature, 0.7);
    assert_eq!(config.ui, UiConfig::default());
}

#[test]
fn test_env_overrides_win_over_file() {
    let file = Config::parse_file_config(
        r#"
[api]
base_url = "https://from-file.example"
timeout_ms = 1000
"#,
    )
    .unwrap();
    let config = Config::from_file_config(
        file,
        Some("https://from-env.example".to_string()),
        Some(2500),
    );

    assert_eq!(config.api.base_url, "https://from-env.example");
    assert_eq!(config.api.timeout_ms, 2500);
}

#[test]
fn test_invalid_file_is_an_error() {
    assert!(Config::parse_file_config("[api\nbase_url = ").is_err());
    assert!(Config::parse_file_config("[api]\ntimeout_ms = \"soon\"").is_err());
}

#[test]
fn test_url_joining() {
    let mut api = ApiConfig::default();
    api.base_url = "https://abc123.ngrok.io/".to_string();
    assert_eq!(api.ask_url(), "https://abc123.ngrok.io/api/consulta");
    assert_eq!(api.health_url(), "https://abc123.ngrok.io/health");

    api.endpoint = "ask".to_string();
    assert_eq!(api.ask_url(), "https://abc123.ngrok.io/ask");
}

#[test]
fn test_log_rotation_parse() {
    assert_eq!(LogRotation::parse("HOURLY"), LogRotation::Hourly);
    assert_eq!(LogRotation::parse("never"), LogRotation::Never);
    assert_eq!(LogRotation::parse("weekly"), LogRotation::Daily);
}
