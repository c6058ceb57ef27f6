//! Shared application state for axum handlers.

use std::sync::Arc;

use hotelhub_app::ports::{AuditSink, Authenticator, LogRepository, RoomRepository};
use hotelhub_app::services::log_service::LogService;
use hotelhub_app::services::room_service::RoomService;

/// Application state shared across all axum handlers.
///
/// Generic over the room repository, log repository, audit sink and
/// authenticator to avoid dynamic dispatch. `Clone` is implemented manually
/// so the underlying types themselves do not need to be `Clone`, only the
/// `Arc` wrappers are cloned.
pub struct AppState<RR, LR, AS, AU> {
    /// Room lifecycle and batch provisioning.
    pub room_service: Arc<RoomService<RR, AS>>,
    /// Client log intake and review.
    pub log_service: Arc<LogService<LR, AS>>,
    /// Bearer token verification.
    pub authenticator: Arc<AU>,
}

impl<RR, LR, AS, AU> Clone for AppState<RR, LR, AS, AU> {
    fn clone(&self) -> Self {
        Self {
            room_service: Arc::clone(&self.room_service),
            log_service: Arc::clone(&self.log_service),
            authenticator: Arc::clone(&self.authenticator),
        }
    }
}

impl<RR, LR, AS, AU> AppState<RR, LR, AS, AU>
where
    RR: RoomRepository + Send + Sync + 'static,
    LR: LogRepository + Send + Sync + 'static,
    AS: AuditSink + Send + Sync + 'static,
    AU: Authenticator + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(
        room_service: RoomService<RR, AS>,
        log_service: LogService<LR, AS>,
        authenticator: AU,
    ) -> Self {
        Self {
            room_service: Arc::new(room_service),
            log_service: Arc::new(log_service),
            authenticator: Arc::new(authenticator),
        }
    }
}
