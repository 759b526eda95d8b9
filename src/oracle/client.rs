//! Answer service client
//!
//! [`AnswerService`] is the seam between the request lifecycle and the
//! network. [`HttpAnswerService`] is the real implementation: one JSON POST
//! per question and a GET health probe, both with fixed timeouts.

use super::error::OracleError;
use super::payload::AnswerPayload;
use super::question::Question;
use crate::config::{ApiConfig, GenerationOptions};
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE};
use serde::Serialize;
use std::sync::Arc;

/// Body of one question POST
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionRequest {
    pub question: String,
    /// Submission time, RFC 3339 / ISO-8601 in UTC
    pub timestamp: String,
    pub options: GenerationOptions,
}

impl QuestionRequest {
    pub fn new(question: &Question, options: GenerationOptions) -> Self {
        Self {
            question: question.as_str().to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            options,
        }
    }
}

/// Something that can answer questions
#[async_trait]
pub trait AnswerService: Send + Sync + 'static {
    /// Send one question. Non-success statuses and timeouts are transport
    /// failures; an unparsable body is a malformed response.
    async fn ask(&self, request: &QuestionRequest) -> Result<AnswerPayload, OracleError>;

    /// Check that the service is reachable
    async fn health(&self) -> Result<(), OracleError>;
}

/// HTTP implementation backed by `reqwest`
#[derive(Debug, Clone)]
pub struct HttpAnswerService {
    client: reqwest::Client,
    config: Arc<ApiConfig>,
}

impl HttpAnswerService {
    pub fn new(config: Arc<ApiConfig>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        for (name, value) in &config.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .with_context(|| format!("Invalid header name in [api.headers]: {}", name))?;
            let value = HeaderValue::from_str(value)
                .with_context(|| format!("Invalid value for header {}", name))?;
            headers.insert(name, value);
        }

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { client, config })
    }
}

#[async_trait]
impl AnswerService for HttpAnswerService {
    async fn ask(&self, request: &QuestionRequest) -> Result<AnswerPayload, OracleError> {
        let url = self.config.ask_url();
        tracing::debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .timeout(self.config.timeout())
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(OracleError::Transport(format!("HTTP {}", status)));
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| OracleError::MalformedResponse(e.to_string()))
    }

    async fn health(&self) -> Result<(), OracleError> {
        let response = self
            .client
            .get(self.config.health_url())
            .timeout(self.config.health_timeout())
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(OracleError::Transport(format!("HTTP {}", status)))
        }
    }
}
