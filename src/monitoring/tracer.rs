/*!
 * Structured Tracing
 * Subscriber setup and per-step spans using the tracing crate
 */

use crate::core::limits::{DEFAULT_LOG_FILTER, ENV_TRACE_JSON};
use std::time::Instant;
use tracing::{debug, span, warn, Level};
use tracing_subscriber::{fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize structured tracing
///
/// Logs go to stderr so they never interleave with the report on stdout.
///
/// Environment variables:
/// - RUST_LOG: Set log level (default: warn)
/// - MMU_TRACE_JSON: Enable JSON output (default: false)
pub fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let use_json = std::env::var(ENV_TRACE_JSON)
        .map(|v| v == "1" || v == "true")
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(env_filter);

    if use_json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_line_number(true)
                    .with_file(true)
                    .with_current_span(true)
                    .with_span_list(true)
                    .with_span_events(FmtSpan::CLOSE),
            )
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_line_number(true)
                    .with_span_events(FmtSpan::CLOSE)
                    .compact(),
            )
            .init();
    }
    debug!(json = use_json, "Structured tracing initialized");
}

/// Span covering one simulation step
///
/// Records the outcome when the step finishes; failed steps are logged at
/// warn level on drop.
pub struct StepSpan {
    span: tracing::Span,
    start: Instant,
    index: usize,
    failed: bool,
}

impl StepSpan {
    pub fn new(index: usize, operation: &str) -> Self {
        let span = span!(
            Level::DEBUG,
            "step",
            index,
            operation,
            result = tracing::field::Empty,
            duration_us = tracing::field::Empty,
        );

        Self {
            span,
            start: Instant::now(),
            index,
            failed: false,
        }
    }

    /// Enter the span context for the duration of the step
    pub fn enter(&self) -> tracing::span::Entered<'_> {
        self.span.enter()
    }

    pub fn record_success(&self) {
        self.span.record("result", "ok");
    }

    pub fn record_error(&mut self, error: &str) {
        self.span.record("result", error);
        self.failed = true;
    }
}

impl Drop for StepSpan {
    fn drop(&mut self) {
        let duration = self.start.elapsed();
        self.span.record("duration_us", duration.as_micros() as u64);

        let _entered = self.span.enter();
        if self.failed {
            warn!(step = self.index, "step completed with a recoverable error");
        } else {
            debug!(step = self.index, duration_us = duration.as_micros() as u64, "step completed");
        }
    }
}
