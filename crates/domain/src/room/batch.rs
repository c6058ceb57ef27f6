//! Batch provisioning: classify creation intents before a single bulk insert.
//!
//! Classification walks the intents in input order. An in-request duplicate
//! is detected before a store duplicate, and a room number joins the "seen"
//! set only once it is accepted, so the first acceptable occurrence wins.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::{NewRoom, Room};

/// Upper bound on intents per batch call.
pub const MAX_BATCH_SIZE: usize = 100;

/// Why an intent was not created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FailureReason {
    #[serde(rename = "duplicate within request")]
    DuplicateWithinRequest,
    #[serde(rename = "room number already exists")]
    AlreadyExists,
}

impl std::fmt::Display for FailureReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateWithinRequest => f.write_str("duplicate within request"),
            Self::AlreadyExists => f.write_str("room number already exists"),
        }
    }
}

/// An intent that was rejected during classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailedRoom {
    pub room_number: String,
    pub reason: FailureReason,
}

/// Outcome of a batch creation call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchReport {
    pub success_count: usize,
    pub failed_count: usize,
    pub created_rooms: Vec<Room>,
    pub failed_rooms: Vec<FailedRoom>,
}

impl BatchReport {
    #[must_use]
    pub fn new(created_rooms: Vec<Room>, failed_rooms: Vec<FailedRoom>) -> Self {
        Self {
            success_count: created_rooms.len(),
            failed_count: failed_rooms.len(),
            created_rooms,
            failed_rooms,
        }
    }
}

/// Split `intents` into the rooms to insert and the intents that failed.
///
/// `existing` holds the room numbers the store already knows about.
#[must_use]
pub fn classify_batch(
    intents: Vec<NewRoom>,
    existing: &HashSet<String>,
) -> (Vec<NewRoom>, Vec<FailedRoom>) {
    let mut seen: HashSet<String> = HashSet::with_capacity(intents.len());
    let mut to_create = Vec::with_capacity(intents.len());
    let mut failed = Vec::new();

    for intent in intents {
        let reason = if seen.contains(&intent.room_number) {
            Some(FailureReason::DuplicateWithinRequest)
        } else if existing.contains(&intent.room_number) {
            Some(FailureReason::AlreadyExists)
        } else {
            None
        };

        match reason {
            Some(reason) => failed.push(FailedRoom {
                room_number: intent.room_number,
                reason,
            }),
            None => {
                seen.insert(intent.room_number.clone());
                to_create.push(intent);
            }
        }
    }

    (to_create, failed)
}
