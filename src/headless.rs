//! Headless `oracle ask` mode
//!
//! Same controller as the TUI, with a surface that prints notifications to
//! stderr. The answer and its sources go to stdout once the cycle settles.

use crate::config::Config;
use crate::oracle::{
    AnswerService, Controller, HttpAnswerService, Notification, Outcome, RegionView, Severity,
    Surface,
};
use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;

const RESET: &str = "\x1b[0m";
const DIM: &str = "\x1b[2m";

fn severity_color(severity: Severity) -> &'static str {
    match severity {
        Severity::Success => "\x1b[32m",
        Severity::Error => "\x1b[31m",
        Severity::Warning => "\x1b[33m",
        Severity::Info => "\x1b[36m",
    }
}

/// Prints notifications to stderr
#[derive(Debug, Clone, Default)]
pub struct ConsoleSurface;

impl Surface for ConsoleSurface {
    fn set_busy(&self, busy: bool) {
        tracing::debug!("busy = {}", busy);
    }

    fn set_overlay(&self, message: Option<&str>) {
        if let Some(message) = message {
            eprintln!("  {DIM}{}{RESET}", message);
        }
    }

    fn notify(&self, notification: Notification) {
        let color = severity_color(notification.severity);
        eprintln!(
            "  {color}{}{RESET} {}",
            notification.severity.icon(),
            notification.message
        );
    }
}

/// Answer text followed by a numbered source list
pub fn format_answer(text: &str, sources: &[String]) -> String {
    let mut out = text.to_string();
    if !sources.is_empty() {
        out.push_str("\n\nSources:");
        for (i, source) in sources.iter().enumerate() {
            out.push_str(&format!("\n  {}. {}", i + 1, source));
        }
    }
    out
}

/// Run one question against the configured service
pub async fn run_ask(config: Config, question: String) -> Result<Outcome> {
    let service = HttpAnswerService::new(Arc::new(config.api.clone()))?;
    // Nothing to animate on a plain stream
    let controller = Controller::new(
        service,
        ConsoleSurface,
        config.api.options.clone(),
        Duration::ZERO,
    );
    ask(controller, question).await
}

async fn ask<S: AnswerService>(
    controller: Controller<S, ConsoleSurface>,
    question: String,
) -> Result<Outcome> {
    controller.probe_health().await;

    // Ctrl+C aborts the in-flight request like a clear action
    let on_interrupt = controller.clone();
    let interrupt = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            on_interrupt.clear();
        }
    });

    let outcome = controller.submit(&question).await;
    interrupt.abort();

    if let RegionView::Answer(snapshot) = controller.region().view() {
        println!();
        println!("{}", format_answer(&snapshot.text, &snapshot.sources));
    }

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GenerationOptions;
    use crate::oracle::demo::DemoResponder;
    use crate::oracle::payload::AnswerPayload;
    use crate::oracle::{OracleError, QuestionRequest};
    use async_trait::async_trait;

    struct Offline;

    #[async_trait]
    impl AnswerService for Offline {
        async fn ask(&self, _request: &QuestionRequest) -> Result<AnswerPayload, OracleError> {
            Err(OracleError::Transport("connection refused".into()))
        }

        async fn health(&self) -> Result<(), OracleError> {
            Err(OracleError::Transport("connection refused".into()))
        }
    }

    #[test]
    fn test_format_answer() {
        assert_eq!(format_answer("Paris.", &[]), "Paris.");
        assert_eq!(
            format_answer("Paris.", &["geo.pdf".to_string(), "atlas.txt".to_string()]),
            "Paris.\n\nSources:\n  1. geo.pdf\n  2. atlas.txt"
        );
    }

    #[tokio::test]
    async fn test_offline_ask_falls_back() {
        let controller = Controller::with_demo(
            Offline,
            ConsoleSurface,
            GenerationOptions::default(),
            Duration::ZERO,
            DemoResponder::pinned(1),
        );
        let outcome = ask(controller, "What is the capital of France?".to_string())
            .await
            .unwrap();
        assert_eq!(outcome, Outcome::Fallback);
    }
}
