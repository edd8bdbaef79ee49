//! Access log sink - outcome reporting for every REST call
//!
//! The sink is injected when routes are registered. Reporting is best effort:
//! a sink failure is logged and dropped, the response is never changed.

use axum::{
    extract::{MatchedPath, Request, State},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

/// One reported request outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessLogEntry {
    pub method: String,
    pub route: String,
    pub message: String,
    pub status: u16,
}

/// Receiver of request outcomes
pub trait AccessLogSink: Send + Sync {
    fn record(&self, entry: &AccessLogEntry) -> anyhow::Result<()>;
}

/// Sink writing structured `tracing` events
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingAccessLog;

impl AccessLogSink for TracingAccessLog {
    fn record(&self, entry: &AccessLogEntry) -> anyhow::Result<()> {
        match entry.status {
            500..=u16::MAX => tracing::error!(
                method = %entry.method,
                route = %entry.route,
                status = entry.status,
                "{}",
                entry.message
            ),
            400..=499 => tracing::warn!(
                method = %entry.method,
                route = %entry.route,
                status = entry.status,
                "{}",
                entry.message
            ),
            _ => tracing::info!(
                method = %entry.method,
                route = %entry.route,
                status = entry.status,
                "{}",
                entry.message
            ),
        }
        Ok(())
    }
}

/// Response extension carrying the message to report for this outcome
#[derive(Debug, Clone)]
pub struct OutcomeMessage(pub String);

/// Middleware reporting method, route, message and status to the sink
pub async fn report_outcome(
    State(sink): State<Arc<dyn AccessLogSink>>,
    request: Request,
    next: Next,
) -> Response {
    let method = request.method().to_string();
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(|path| path.as_str().to_owned())
        .unwrap_or_else(|| request.uri().path().to_owned());

    let response = next.run(request).await;

    let status = response.status();
    let message = response
        .extensions()
        .get::<OutcomeMessage>()
        .map(|outcome| outcome.0.clone())
        .unwrap_or_else(|| status.canonical_reason().unwrap_or_default().to_owned());

    let entry = AccessLogEntry {
        method,
        route,
        message,
        status: status.as_u16(),
    };

    if let Err(e) = sink.record(&entry) {
        tracing::warn!(error = %e, ?entry, "access log sink failed, entry dropped");
    }

    response
}
