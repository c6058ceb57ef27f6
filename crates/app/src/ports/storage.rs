//! Storage port: repository traits for persistence.
//!
//! Every method is a single round trip and atomic on its own. No method
//! spans a transaction across calls.

use std::future::Future;

use hotelhub_domain::error::HotelError;
use hotelhub_domain::id::{LogId, RoomId};
use hotelhub_domain::log_entry::{LogEntry, ValidLogEntry};
use hotelhub_domain::page::{Page, PageRequest};
use hotelhub_domain::room::{NewRoom, Room, RoomStatus};

/// Predicate applied by [`RoomRepository::find_page`].
#[derive(Debug, Clone, PartialEq)]
pub enum RoomFilter {
    /// Every room.
    All,
    /// Rooms whose status equals the given value.
    Status(RoomStatus),
    /// Exact match on `room_type`.
    RoomType(String),
    /// Exact match on `floor`.
    Floor(i32),
    /// `min <= price <= max`.
    PriceRange { min: f64, max: f64 },
}

impl RoomFilter {
    /// Whether `room` satisfies the filter.
    #[must_use]
    pub fn matches(&self, room: &Room) -> bool {
        match self {
            Self::All => true,
            Self::Status(status) => room.status == *status,
            Self::RoomType(room_type) => room.room_type == *room_type,
            Self::Floor(floor) => room.floor == *floor,
            Self::PriceRange { min, max } => room.price >= *min && room.price <= *max,
        }
    }
}

/// Repository for persisting and querying [`Room`]s.
pub trait RoomRepository {
    /// Insert one room. The store assigns identity, status and timestamps.
    fn insert(&self, room: NewRoom) -> impl Future<Output = Result<Room, HotelError>> + Send;

    /// Insert every room or none of them.
    fn insert_many(
        &self,
        rooms: Vec<NewRoom>,
    ) -> impl Future<Output = Result<Vec<Room>, HotelError>> + Send;

    /// Get a room by its key.
    fn get_by_id(&self, id: RoomId)
    -> impl Future<Output = Result<Option<Room>, HotelError>> + Send;

    /// Whether a room with this number exists.
    fn exists_by_room_number(
        &self,
        room_number: &str,
    ) -> impl Future<Output = Result<bool, HotelError>> + Send;

    /// The subset of `room_numbers` already present in the store.
    fn find_existing_room_numbers(
        &self,
        room_numbers: &[String],
    ) -> impl Future<Output = Result<Vec<String>, HotelError>> + Send;

    /// One page of rooms matching `filter`, plus the total match count.
    fn find_page(
        &self,
        filter: RoomFilter,
        page: PageRequest,
    ) -> impl Future<Output = Result<Page<Room>, HotelError>> + Send;

    /// Overwrite every mutable column of an existing room.
    ///
    /// Resolves to `None` when no row matched `room.id`.
    fn update(&self, room: Room)
    -> impl Future<Output = Result<Option<Room>, HotelError>> + Send;

    /// Set the status only. Resolves to `false` when no row matched `id`.
    fn update_status(
        &self,
        id: RoomId,
        status: RoomStatus,
    ) -> impl Future<Output = Result<bool, HotelError>> + Send;

    /// Remove a room permanently.
    fn delete(&self, id: RoomId) -> impl Future<Output = Result<(), HotelError>> + Send;
}

/// Repository for append-only [`LogEntry`] records.
pub trait LogRepository {
    /// Insert every entry or none of them, returning how many were stored.
    fn insert_many(
        &self,
        entries: Vec<ValidLogEntry>,
    ) -> impl Future<Output = Result<usize, HotelError>> + Send;

    /// Get an entry by its key.
    fn get_by_id(
        &self,
        id: LogId,
    ) -> impl Future<Output = Result<Option<LogEntry>, HotelError>> + Send;

    /// One page of entries, newest first.
    fn find_page(
        &self,
        page: PageRequest,
    ) -> impl Future<Output = Result<Page<LogEntry>, HotelError>> + Send;

    /// Remove an entry. Resolves to `false` when nothing was deleted.
    fn delete(&self, id: LogId) -> impl Future<Output = Result<bool, HotelError>> + Send;
}
