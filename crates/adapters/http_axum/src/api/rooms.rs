//! JSON REST handlers for rooms.

use std::str::FromStr;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use hotelhub_app::ports::{AuditSink, Authenticator, LogRepository, RoomRepository};
use hotelhub_domain::id::RoomId;
use hotelhub_domain::page::PageRequest;
use hotelhub_domain::room::{BatchReport, NewRoom, Room, RoomPatch};

use super::PageParams;
use crate::error::ApiError;
use crate::extract::AdminUser;
use crate::response::{Envelope, PagedEnvelope};
use crate::state::AppState;

/// Request body for creating several rooms at once.
#[derive(Debug, Deserialize)]
pub struct BatchCreateRequest {
    pub rooms: Vec<NewRoom>,
}

/// Request body for changing a room's status.
#[derive(Debug, Deserialize)]
pub struct StatusRequest {
    pub status: String,
}

/// Query for the type search endpoint.
#[derive(Debug, Deserialize)]
pub struct TypeQuery {
    room_type: Option<String>,
}

/// Query for the price search endpoint.
#[derive(Debug, Deserialize)]
pub struct PriceQuery {
    min_price: Option<String>,
    max_price: Option<String>,
}

/// Possible responses carrying a single room.
pub enum RoomResponse {
    Ok(Room),
    Created(Room),
    Updated(Room),
}

impl IntoResponse for RoomResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(room) => Json(Envelope::data(room)).into_response(),
            Self::Created(room) => (
                StatusCode::CREATED,
                Json(Envelope::with_message(room, "room created")),
            )
                .into_response(),
            Self::Updated(room) => {
                Json(Envelope::with_message(room, "room updated")).into_response()
            }
        }
    }
}

/// Possible responses from the paged list endpoints.
pub enum ListResponse {
    Ok(PagedEnvelope<Room>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(page) => Json(page).into_response(),
        }
    }
}

/// Possible responses from the batch endpoint.
pub enum BatchResponse {
    Ok(BatchReport),
}

impl IntoResponse for BatchResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(report) => {
                Json(Envelope::with_message(report, "batch creation finished")).into_response()
            }
        }
    }
}

/// Possible responses from endpoints that return no data.
pub enum AckResponse {
    Deleted,
    StatusUpdated,
}

impl IntoResponse for AckResponse {
    fn into_response(self) -> Response {
        let message = match self {
            Self::Deleted => "room deleted",
            Self::StatusUpdated => "room status updated",
        };
        Json(Envelope::message(message)).into_response()
    }
}

fn parse_price(name: &str, value: Option<&str>) -> Result<f64, ApiError> {
    let value = value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ApiError::BadRequest(format!("{name} is required")))?;
    value
        .parse::<f64>()
        .ok()
        .filter(|price| price.is_finite())
        .ok_or_else(|| ApiError::BadRequest(format!("{name} must be a number")))
}

/// `GET /api/rooms`
pub async fn list<RR, LR, AS, AU>(
    State(state): State<AppState<RR, LR, AS, AU>>,
    Query(params): Query<PageParams>,
) -> Result<ListResponse, ApiError>
where
    RR: RoomRepository + Send + Sync + 'static,
    LR: LogRepository + Send + Sync + 'static,
    AS: AuditSink + Send + Sync + 'static,
    AU: Authenticator + Send + Sync + 'static,
{
    let request = PageRequest::from(&params);
    let page = state.room_service.list_rooms(request).await?;
    Ok(ListResponse::Ok(PagedEnvelope::new(page, request)))
}

/// `GET /api/rooms/available`
pub async fn list_available<RR, LR, AS, AU>(
    State(state): State<AppState<RR, LR, AS, AU>>,
    Query(params): Query<PageParams>,
) -> Result<ListResponse, ApiError>
where
    RR: RoomRepository + Send + Sync + 'static,
    LR: LogRepository + Send + Sync + 'static,
    AS: AuditSink + Send + Sync + 'static,
    AU: Authenticator + Send + Sync + 'static,
{
    let request = PageRequest::from(&params);
    let page = state.room_service.list_available_rooms(request).await?;
    Ok(ListResponse::Ok(PagedEnvelope::new(page, request)))
}

/// `GET /api/rooms/search/type?room_type=`
pub async fn search_by_type<RR, LR, AS, AU>(
    State(state): State<AppState<RR, LR, AS, AU>>,
    Query(params): Query<PageParams>,
    Query(query): Query<TypeQuery>,
) -> Result<ListResponse, ApiError>
where
    RR: RoomRepository + Send + Sync + 'static,
    LR: LogRepository + Send + Sync + 'static,
    AS: AuditSink + Send + Sync + 'static,
    AU: Authenticator + Send + Sync + 'static,
{
    let room_type = query
        .room_type
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| ApiError::BadRequest("room_type is required".to_string()))?;
    let request = PageRequest::from(&params);
    let page = state
        .room_service
        .search_rooms_by_type(&room_type, request)
        .await?;
    Ok(ListResponse::Ok(PagedEnvelope::new(page, request)))
}

/// `GET /api/rooms/search/price?min_price=&max_price=`
pub async fn search_by_price<RR, LR, AS, AU>(
    State(state): State<AppState<RR, LR, AS, AU>>,
    Query(params): Query<PageParams>,
    Query(query): Query<PriceQuery>,
) -> Result<ListResponse, ApiError>
where
    RR: RoomRepository + Send + Sync + 'static,
    LR: LogRepository + Send + Sync + 'static,
    AS: AuditSink + Send + Sync + 'static,
    AU: Authenticator + Send + Sync + 'static,
{
    let min_price = parse_price("min_price", query.min_price.as_deref())?;
    let max_price = parse_price("max_price", query.max_price.as_deref())?;
    let request = PageRequest::from(&params);
    let page = state
        .room_service
        .search_rooms_by_price(min_price, max_price, request)
        .await?;
    Ok(ListResponse::Ok(PagedEnvelope::new(page, request)))
}

/// `GET /api/rooms/floor/{floor}`
pub async fn list_by_floor<RR, LR, AS, AU>(
    State(state): State<AppState<RR, LR, AS, AU>>,
    Path(floor): Path<String>,
    Query(params): Query<PageParams>,
) -> Result<ListResponse, ApiError>
where
    RR: RoomRepository + Send + Sync + 'static,
    LR: LogRepository + Send + Sync + 'static,
    AS: AuditSink + Send + Sync + 'static,
    AU: Authenticator + Send + Sync + 'static,
{
    let floor: i32 = floor
        .parse()
        .map_err(|_| ApiError::BadRequest(format!("invalid floor: {floor:?}")))?;
    let request = PageRequest::from(&params);
    let page = state
        .room_service
        .list_rooms_by_floor(floor, request)
        .await?;
    Ok(ListResponse::Ok(PagedEnvelope::new(page, request)))
}

/// `GET /api/rooms/{id}`
pub async fn get<RR, LR, AS, AU>(
    State(state): State<AppState<RR, LR, AS, AU>>,
    Path(id): Path<String>,
) -> Result<RoomResponse, ApiError>
where
    RR: RoomRepository + Send + Sync + 'static,
    LR: LogRepository + Send + Sync + 'static,
    AS: AuditSink + Send + Sync + 'static,
    AU: Authenticator + Send + Sync + 'static,
{
    let room_id = RoomId::from_str(&id)?;
    let room = state.room_service.get_room(room_id).await?;
    Ok(RoomResponse::Ok(room))
}

/// `POST /api/admin/rooms`
pub async fn create<RR, LR, AS, AU>(
    State(state): State<AppState<RR, LR, AS, AU>>,
    AdminUser(admin): AdminUser,
    payload: Result<Json<NewRoom>, JsonRejection>,
) -> Result<RoomResponse, ApiError>
where
    RR: RoomRepository + Send + Sync + 'static,
    LR: LogRepository + Send + Sync + 'static,
    AS: AuditSink + Send + Sync + 'static,
    AU: Authenticator + Send + Sync + 'static,
{
    let Json(room) = payload?;
    let created = state.room_service.create_room(room).await?;
    tracing::info!(actor = %admin.username, id = %created.id, "room created");
    Ok(RoomResponse::Created(created))
}

/// `POST /api/admin/rooms/batch`
pub async fn batch_create<RR, LR, AS, AU>(
    State(state): State<AppState<RR, LR, AS, AU>>,
    AdminUser(admin): AdminUser,
    payload: Result<Json<BatchCreateRequest>, JsonRejection>,
) -> Result<BatchResponse, ApiError>
where
    RR: RoomRepository + Send + Sync + 'static,
    LR: LogRepository + Send + Sync + 'static,
    AS: AuditSink + Send + Sync + 'static,
    AU: Authenticator + Send + Sync + 'static,
{
    let Json(request) = payload?;
    let report = state.room_service.batch_create_rooms(request.rooms).await?;
    tracing::info!(
        actor = %admin.username,
        created = report.success_count,
        failed = report.failed_count,
        "rooms batch created"
    );
    Ok(BatchResponse::Ok(report))
}

/// `PUT /api/admin/rooms/{id}`
pub async fn update<RR, LR, AS, AU>(
    State(state): State<AppState<RR, LR, AS, AU>>,
    AdminUser(admin): AdminUser,
    Path(id): Path<String>,
    payload: Result<Json<RoomPatch>, JsonRejection>,
) -> Result<RoomResponse, ApiError>
where
    RR: RoomRepository + Send + Sync + 'static,
    LR: LogRepository + Send + Sync + 'static,
    AS: AuditSink + Send + Sync + 'static,
    AU: Authenticator + Send + Sync + 'static,
{
    let room_id = RoomId::from_str(&id)?;
    let Json(patch) = payload?;
    let updated = state.room_service.update_room(room_id, patch).await?;
    tracing::info!(actor = %admin.username, id = %room_id, "room updated");
    Ok(RoomResponse::Updated(updated))
}

/// `DELETE /api/admin/rooms/{id}`
pub async fn delete<RR, LR, AS, AU>(
    State(state): State<AppState<RR, LR, AS, AU>>,
    AdminUser(admin): AdminUser,
    Path(id): Path<String>,
) -> Result<AckResponse, ApiError>
where
    RR: RoomRepository + Send + Sync + 'static,
    LR: LogRepository + Send + Sync + 'static,
    AS: AuditSink + Send + Sync + 'static,
    AU: Authenticator + Send + Sync + 'static,
{
    let room_id = RoomId::from_str(&id)?;
    state.room_service.delete_room(room_id).await?;
    tracing::info!(actor = %admin.username, id = %room_id, "room deleted");
    Ok(AckResponse::Deleted)
}

/// `PUT /api/admin/rooms/{id}/status`
pub async fn update_status<RR, LR, AS, AU>(
    State(state): State<AppState<RR, LR, AS, AU>>,
    AdminUser(admin): AdminUser,
    Path(id): Path<String>,
    payload: Result<Json<StatusRequest>, JsonRejection>,
) -> Result<AckResponse, ApiError>
where
    RR: RoomRepository + Send + Sync + 'static,
    LR: LogRepository + Send + Sync + 'static,
    AS: AuditSink + Send + Sync + 'static,
    AU: Authenticator + Send + Sync + 'static,
{
    let room_id = RoomId::from_str(&id)?;
    let Json(request) = payload?;
    state
        .room_service
        .update_room_status(room_id, &request.status)
        .await?;
    tracing::info!(
        actor = %admin.username,
        id = %room_id,
        status = %request.status,
        "room status updated"
    );
    Ok(AckResponse::StatusUpdated)
}
