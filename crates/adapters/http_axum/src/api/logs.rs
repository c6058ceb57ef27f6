//! JSON REST handlers for client-reported logs.

use std::str::FromStr;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use hotelhub_app::ports::{AuditSink, Authenticator, LogRepository, RoomRepository};
use hotelhub_domain::id::LogId;
use hotelhub_domain::log_entry::{LogEntry, NewLogEntry};

use super::PageParams;
use crate::error::ApiError;
use crate::extract::AdminUser;
use crate::response::{Envelope, PagedEnvelope};
use crate::state::AppState;

/// Log listings default to a larger page than room listings.
const LOG_PAGE_SIZE: u32 = 20;

/// Request body for the report endpoint.
#[derive(Debug, Deserialize)]
pub struct ReportRequest {
    pub logs: Vec<NewLogEntry>,
}

#[derive(Debug, Serialize)]
pub struct ReportSummary {
    pub count: usize,
}

/// Possible responses from the log endpoints.
pub enum LogResponse {
    Reported(ReportSummary),
    Page(PagedEnvelope<LogEntry>),
    Ok(LogEntry),
    Deleted,
}

impl IntoResponse for LogResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Reported(summary) => {
                Json(Envelope::with_message(summary, "logs reported")).into_response()
            }
            Self::Page(page) => Json(page).into_response(),
            Self::Ok(entry) => Json(Envelope::data(entry)).into_response(),
            Self::Deleted => Json(Envelope::message("log deleted")).into_response(),
        }
    }
}

/// `POST /api/logs/report`
pub async fn report<RR, LR, AS, AU>(
    State(state): State<AppState<RR, LR, AS, AU>>,
    payload: Result<Json<ReportRequest>, JsonRejection>,
) -> Result<LogResponse, ApiError>
where
    RR: RoomRepository + Send + Sync + 'static,
    LR: LogRepository + Send + Sync + 'static,
    AS: AuditSink + Send + Sync + 'static,
    AU: Authenticator + Send + Sync + 'static,
{
    let Json(request) = payload?;
    let count = state.log_service.report_logs(request.logs).await?;
    Ok(LogResponse::Reported(ReportSummary { count }))
}

/// `GET /api/admin/logs`
pub async fn list<RR, LR, AS, AU>(
    State(state): State<AppState<RR, LR, AS, AU>>,
    _admin: AdminUser,
    Query(params): Query<PageParams>,
) -> Result<LogResponse, ApiError>
where
    RR: RoomRepository + Send + Sync + 'static,
    LR: LogRepository + Send + Sync + 'static,
    AS: AuditSink + Send + Sync + 'static,
    AU: Authenticator + Send + Sync + 'static,
{
    let request = params.to_request(LOG_PAGE_SIZE);
    let page = state.log_service.list_logs(request).await?;
    Ok(LogResponse::Page(PagedEnvelope::new(page, request)))
}

/// `GET /api/admin/logs/{id}`
pub async fn get<RR, LR, AS, AU>(
    State(state): State<AppState<RR, LR, AS, AU>>,
    _admin: AdminUser,
    Path(id): Path<String>,
) -> Result<LogResponse, ApiError>
where
    RR: RoomRepository + Send + Sync + 'static,
    LR: LogRepository + Send + Sync + 'static,
    AS: AuditSink + Send + Sync + 'static,
    AU: Authenticator + Send + Sync + 'static,
{
    let log_id = LogId::from_str(&id)?;
    let entry = state.log_service.get_log(log_id).await?;
    Ok(LogResponse::Ok(entry))
}

/// `DELETE /api/admin/logs/{id}`
pub async fn delete<RR, LR, AS, AU>(
    State(state): State<AppState<RR, LR, AS, AU>>,
    AdminUser(admin): AdminUser,
    Path(id): Path<String>,
) -> Result<LogResponse, ApiError>
where
    RR: RoomRepository + Send + Sync + 'static,
    LR: LogRepository + Send + Sync + 'static,
    AS: AuditSink + Send + Sync + 'static,
    AU: Authenticator + Send + Sync + 'static,
{
    let log_id = LogId::from_str(&id)?;
    state.log_service.delete_log(log_id).await?;
    tracing::info!(actor = %admin.username, id = %log_id, "log deleted");
    Ok(LogResponse::Deleted)
}
