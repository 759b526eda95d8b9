//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;

/// A TOML basic string, escaped by the toml crate
fn toml_str(s: &str) -> String {
    toml::Value::String(s.to_string()).to_string()
}

impl Config {
    /// Serialize extra request headers as an `[api.headers]` table
    fn headers_to_toml(&self) -> String {
        if self.api.headers.is_empty() {
            // Show example comments when no headers configured
            return r#"
# Extra request headers (Content-Type/Accept are always JSON)
# [api.headers]
# Authorization = "Bearer your-token-here"
"#
            .to_string();
        }

        let mut output = String::from("\n[api.headers]\n");
        // BTreeMap keeps keys sorted for deterministic output
        for (name, value) in &self.api.headers {
            output.push_str(&format!("{} = {}\n", toml_str(name), toml_str(value)));
        }
        output
    }

    /// Serialize config to TOML string
    pub fn to_toml(&self) -> String {
        let api = &self.api;
        let ui = &self.ui;
        let logging = &self.logging;

        format!(
            r#"# Oracle configuration
# Environment overrides: ORACLE_API_URL, ORACLE_TIMEOUT_MS, RUST_LOG

# Answer service
[api]
base_url = {base_url}
endpoint = {endpoint}
timeout_ms = {timeout_ms}
health_timeout_ms = {health_timeout_ms}
{headers}
# Generation options sent with every question
[api.options]
max_tokens = {max_tokens}
temperature = {temperature:?}
include_sources = {include_sources}

# Presentation
[ui]
theme = {theme}            # neon, dark, light
typewriter_interval_ms = {interval}
notification_dwell_ms = {dwell}

# Logging configuration (RUST_LOG env var overrides level)
[logging]
level = {level}
file_enabled = {file_enabled}
file_dir = {file_dir}
file_rotation = {rotation}    # hourly, daily, never
file_prefix = {prefix}
"#,
            base_url = toml_str(&api.base_url),
            endpoint = toml_str(&api.endpoint),
            timeout_ms = api.timeout_ms,
            health_timeout_ms = api.health_timeout_ms,
            headers = self.headers_to_toml(),
            max_tokens = api.options.max_tokens,
            temperature = api.options.temperature,
            include_sources = api.options.include_sources,
            theme = toml_str(&ui.theme),
            interval = ui.typewriter_interval_ms,
            dwell = ui.notification_dwell_ms,
            level = toml_str(&logging.level),
            file_enabled = logging.file_enabled,
            file_dir = toml_str(&logging.file_dir.display().to_string()),
            rotation = toml_str(logging.file_rotation.as_str()),
            prefix = toml_str(&logging.file_prefix),
        )
    }
}
