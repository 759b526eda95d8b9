//! Answer service configuration
//!
//! Where questions are sent, how long to wait, which headers to send and the
//! generation options forwarded with every question. Built once at startup
//! and shared read-only behind an `Arc`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_ENDPOINT: &str = "/api/consulta";
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;
pub const DEFAULT_HEALTH_TIMEOUT_MS: u64 = 5_000;

/// Options forwarded to the answer service with every question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationOptions {
    pub max_tokens: u32,
    pub temperature: f32,
    pub include_sources: bool,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            max_tokens: 500,
            temperature: 0.7,
            include_sources: true,
        }
    }
}

/// Request configuration for the answer service
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    /// Service root, e.g. "https://abc123.ngrok.io"
    pub base_url: String,
    /// Path of the question endpoint, appended to `base_url`
    pub endpoint: String,
    /// Timeout for one question
    pub timeout_ms: u64,
    /// Timeout for the startup health probe
    pub health_timeout_ms: u64,
    /// Extra headers (e.g. Authorization); JSON content headers are always sent
    pub headers: BTreeMap<String, String>,
    pub options: GenerationOptions,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            health_timeout_ms: DEFAULT_HEALTH_TIMEOUT_MS,
            headers: BTreeMap::new(),
            options: GenerationOptions::default(),
        }
    }
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn health_timeout(&self) -> Duration {
        Duration::from_millis(self.health_timeout_ms)
    }

    /// Full URL of the question endpoint
    pub fn ask_url(&self) -> String {
        self.join(&self.endpoint)
    }

    /// Full URL of the health probe
    pub fn health_url(&self) -> String {
        self.join("/health")
    }

    fn join(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        if path.starts_with('/') {
            format!("{}{}", base, path)
        } else {
            format!("{}/{}", base, path)
        }
    }
}

/// Generation options as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileGenerationOptions {
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
    pub include_sources: Option<bool>,
}

/// API settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileApi {
    pub base_url: Option<String>,
    pub endpoint: Option<String>,
    pub timeout_ms: Option<u64>,
    pub health_timeout_ms: Option<u64>,
    pub headers: Option<BTreeMap<String, String>>,
    pub options: Option<FileGenerationOptions>,
}

impl ApiConfig {
    /// Create from file config with defaults; env overrides win over both
    pub fn from_file(
        file: Option<FileApi>,
        base_url_override: Option<String>,
        timeout_override: Option<u64>,
    ) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();
        let file_options = file.options.unwrap_or_default();

        Self {
            base_url: base_url_override
                .or(file.base_url)
                .unwrap_or(defaults.base_url),
            endpoint: file.endpoint.unwrap_or(defaults.endpoint),
            timeout_ms: timeout_override
                .or(file.timeout_ms)
                .unwrap_or(defaults.timeout_ms),
            health_timeout_ms: file
                .health_timeout_ms
                .unwrap_or(defaults.health_timeout_ms),
            headers: file.headers.unwrap_or_default(),
            options: GenerationOptions {
                max_tokens: file_options
                    .max_tokens
                    .unwrap_or(defaults.options.max_tokens),
                temperature: file_options
                    .temperature
                    .unwrap_or(defaults.options.temperature),
                include_sources: file_options
                    .include_sources
                    .unwrap_or(defaults.options.include_sources),
            },
        }
    }
}
