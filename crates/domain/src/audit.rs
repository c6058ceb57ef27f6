//! Audit events emitted after successful inventory mutations.

use serde::Serialize;

use crate::id::{LogId, RoomId};
use crate::room::RoomStatus;

/// A structured record of something that changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum AuditEvent {
    RoomCreated { id: RoomId, room_number: String },
    RoomUpdated { id: RoomId },
    RoomDeleted { id: RoomId },
    RoomStatusChanged { id: RoomId, status: RoomStatus },
    RoomsBatchCreated { created: usize, failed: usize },
    LogsReported { count: usize },
    LogDeleted { id: LogId },
}

impl AuditEvent {
    /// Short machine-readable name of the action.
    #[must_use]
    pub fn action(&self) -> &'static str {
        match self {
            Self::RoomCreated { .. } => "room_created",
            Self::RoomUpdated { .. } => "room_updated",
            Self::RoomDeleted { .. } => "room_deleted",
            Self::RoomStatusChanged { .. } => "room_status_changed",
            Self::RoomsBatchCreated { .. } => "rooms_batch_created",
            Self::LogsReported { .. } => "logs_reported",
            Self::LogDeleted { .. } => "log_deleted",
        }
    }
}
