//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod logs;
#[allow(clippy::missing_errors_doc)]
pub mod rooms;

use axum::Router;
use axum::routing::{get, post, put};
use serde::Deserialize;

use hotelhub_app::ports::{AuditSink, Authenticator, LogRepository, RoomRepository};
use hotelhub_domain::page::{DEFAULT_PAGE_SIZE, PageRequest};

use crate::state::AppState;

/// `page` and `page_size` query parameters.
///
/// Values that are missing or not integers fall back to the defaults, then
/// [`PageRequest::new`] clamps whatever is left.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    page: Option<String>,
    page_size: Option<String>,
}

impl PageParams {
    #[must_use]
    pub fn to_request(&self, default_page_size: u32) -> PageRequest {
        PageRequest::new(
            lenient_int(self.page.as_deref()).unwrap_or(1),
            lenient_int(self.page_size.as_deref()).unwrap_or(i64::from(default_page_size)),
        )
    }
}

impl From<&PageParams> for PageRequest {
    fn from(params: &PageParams) -> Self {
        params.to_request(DEFAULT_PAGE_SIZE)
    }
}

fn lenient_int(value: Option<&str>) -> Option<i64> {
    value.and_then(|v| v.trim().parse().ok())
}

/// Build the `/api` sub-router.
pub fn routes<RR, LR, AS, AU>() -> Router<AppState<RR, LR, AS, AU>>
where
    RR: RoomRepository + Send + Sync + 'static,
    LR: LogRepository + Send + Sync + 'static,
    AS: AuditSink + Send + Sync + 'static,
    AU: Authenticator + Send + Sync + 'static,
{
    Router::new()
        // Public room queries
        .route("/rooms", get(rooms::list::<RR, LR, AS, AU>))
        .route(
            "/rooms/available",
            get(rooms::list_available::<RR, LR, AS, AU>),
        )
        .route(
            "/rooms/search/type",
            get(rooms::search_by_type::<RR, LR, AS, AU>),
        )
        .route(
            "/rooms/search/price",
            get(rooms::search_by_price::<RR, LR, AS, AU>),
        )
        .route(
            "/rooms/floor/{floor}",
            get(rooms::list_by_floor::<RR, LR, AS, AU>),
        )
        .route("/rooms/{id}", get(rooms::get::<RR, LR, AS, AU>))
        // Room administration
        .route("/admin/rooms", post(rooms::create::<RR, LR, AS, AU>))
        .route(
            "/admin/rooms/batch",
            post(rooms::batch_create::<RR, LR, AS, AU>),
        )
        .route(
            "/admin/rooms/{id}",
            put(rooms::update::<RR, LR, AS, AU>).delete(rooms::delete::<RR, LR, AS, AU>),
        )
        .route(
            "/admin/rooms/{id}/status",
            put(rooms::update_status::<RR, LR, AS, AU>),
        )
        // Client logs
        .route("/logs/report", post(logs::report::<RR, LR, AS, AU>))
        .route("/admin/logs", get(logs::list::<RR, LR, AS, AU>))
        .route(
            "/admin/logs/{id}",
            get(logs::get::<RR, LR, AS, AU>).delete(logs::delete::<RR, LR, AS, AU>),
        )
}
