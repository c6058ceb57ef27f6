//! Partial update of a room.
//!
//! Every field is optional, so "not supplied" is explicit. Supplied values
//! still pass through a policy filter: `floor`, `price` and `capacity` ignore
//! non-positive values, `room_type` ignores empty strings, and `area` and
//! `original_price` ignore negatives.

use serde::{Deserialize, Serialize};

use super::Room;

/// Fields a caller may change on an existing room.
///
/// `room_number` is immutable and `status` has its own operation, so neither
/// appears here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoomPatch {
    pub room_type: Option<String>,
    pub floor: Option<i32>,
    pub price: Option<f64>,
    pub original_price: Option<f64>,
    pub capacity: Option<i32>,
    pub area: Option<f64>,
    pub bed_type: Option<String>,
    pub description: Option<String>,
    pub facilities: Option<String>,
    pub images: Option<String>,
    pub left: Option<i32>,
    pub top: Option<i32>,
    pub width: Option<i32>,
    pub height: Option<i32>,
}

impl RoomPatch {
    /// Merge the accepted fields into `room`. Returns whether anything changed.
    pub fn apply_to(self, room: &mut Room) -> bool {
        let before = room.clone();

        // Blank counts as absent, the same test `NewRoom::validate` applies.
        if let Some(room_type) = self.room_type.filter(|v| !v.trim().is_empty()) {
            room.room_type = room_type;
        }
        if let Some(floor) = self.floor.filter(|v| *v > 0) {
            room.floor = floor;
        }
        if let Some(price) = self.price.filter(|v| *v > 0.0) {
            room.price = price;
        }
        if let Some(original_price) = self.original_price.filter(|v| *v >= 0.0) {
            room.original_price = original_price;
        }
        if let Some(capacity) = self.capacity.filter(|v| *v > 0) {
            room.capacity = capacity;
        }
        if let Some(area) = self.area.filter(|v| *v >= 0.0) {
            room.area = area;
        }
        if let Some(bed_type) = self.bed_type {
            room.bed_type = bed_type;
        }
        if let Some(description) = self.description {
            room.description = description;
        }
        if let Some(facilities) = self.facilities {
            room.facilities = facilities;
        }
        if let Some(images) = self.images {
            room.images = images;
        }
        if self.left.is_some() {
            room.left = self.left;
        }
        if self.top.is_some() {
            room.top = self.top;
        }
        if self.width.is_some() {
            room.width = self.width;
        }
        if self.height.is_some() {
            room.height = self.height;
        }

        *room != before
    }
}
