//! Axum router assembly.

use std::time::Duration;

use axum::Router;
use axum::http::StatusCode;
use axum::response::Response;
use axum::routing::get;
use tower_http::trace::TraceLayer;
use tracing::{Level, Span};

use hotelhub_app::ports::{AuditSink, Authenticator, LogRepository, RoomRepository};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Nests API routes under `/api` and includes a [`TraceLayer`]. Request spans
/// stay at `DEBUG`; each response is logged at a level chosen by its status
/// (see [`response_level`]).
pub fn build<RR, LR, AS, AU>(state: AppState<RR, LR, AS, AU>) -> Router
where
    RR: RoomRepository + Send + Sync + 'static,
    LR: LogRepository + Send + Sync + 'static,
    AS: AuditSink + Send + Sync + 'static,
    AU: Authenticator + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .nest("/api", crate::api::routes())
        .layer(TraceLayer::new_for_http().on_response(log_response))
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

/// `ERROR` for 5xx, `WARN` for 4xx, `INFO` otherwise.
fn response_level(status: StatusCode) -> Level {
    if status.is_server_error() {
        Level::ERROR
    } else if status.is_client_error() {
        Level::WARN
    } else {
        Level::INFO
    }
}

fn log_response(response: &Response, latency: Duration, _span: &Span) {
    let status = response.status().as_u16();
    match response_level(response.status()) {
        Level::ERROR => tracing::error!(status, ?latency, "request failed"),
        Level::WARN => tracing::warn!(status, ?latency, "request rejected"),
        _ => tracing::info!(status, ?latency, "request completed"),
    }
}
