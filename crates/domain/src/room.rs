//! Room: the unit of hotel inventory.
//!
//! A [`NewRoom`] is a creation intent supplied by a caller. It becomes a
//! [`Room`] once the store has assigned an identity and timestamps. Status is
//! never part of the intent: every room starts [`RoomStatus::Available`].

mod batch;
mod patch;
mod status;

pub use batch::{BatchReport, FailedRoom, FailureReason, MAX_BATCH_SIZE, classify_batch};
pub use patch::RoomPatch;
pub use status::RoomStatus;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::id::RoomId;
use crate::time::Timestamp;

/// A persisted room record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub room_number: String,
    pub room_type: String,
    pub floor: i32,
    pub price: f64,
    pub original_price: f64,
    pub capacity: i32,
    pub area: f64,
    pub bed_type: String,
    pub description: String,
    pub facilities: String,
    pub images: String,
    pub status: RoomStatus,
    pub left: Option<i32>,
    pub top: Option<i32>,
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Caller-supplied description of a room to create.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewRoom {
    pub room_number: String,
    pub room_type: String,
    pub floor: i32,
    pub price: f64,
    #[serde(default)]
    pub original_price: f64,
    pub capacity: i32,
    #[serde(default)]
    pub area: f64,
    #[serde(default)]
    pub bed_type: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub facilities: String,
    #[serde(default)]
    pub images: String,
    #[serde(default)]
    pub left: Option<i32>,
    #[serde(default)]
    pub top: Option<i32>,
    #[serde(default)]
    pub width: Option<i32>,
    #[serde(default)]
    pub height: Option<i32>,
}

impl NewRoom {
    /// Create a builder for constructing a [`NewRoom`].
    #[must_use]
    pub fn builder() -> NewRoomBuilder {
        NewRoomBuilder::default()
    }

    /// Check structural constraints. Touches nothing outside `self`.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] found, checking required text
    /// fields first and then numeric bounds.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.room_number.trim().is_empty() {
            return Err(ValidationError::EmptyRoomNumber);
        }
        if self.room_type.trim().is_empty() {
            return Err(ValidationError::EmptyRoomType);
        }
        if self.floor <= 0 {
            return Err(ValidationError::NonPositiveFloor);
        }
        if self.price.is_nan() || self.price <= 0.0 {
            return Err(ValidationError::NonPositivePrice);
        }
        if self.capacity <= 0 {
            return Err(ValidationError::NonPositiveCapacity);
        }
        if self.original_price.is_nan() || self.original_price < 0.0 {
            return Err(ValidationError::NegativeOriginalPrice);
        }
        if self.area.is_nan() || self.area < 0.0 {
            return Err(ValidationError::NegativeArea);
        }
        Ok(())
    }

    /// Turn the intent into a room with the identity and time the store assigned.
    #[must_use]
    pub fn into_room(self, id: RoomId, at: Timestamp) -> Room {
        Room {
            id,
            room_number: self.room_number,
            room_type: self.room_type,
            floor: self.floor,
            price: self.price,
            original_price: self.original_price,
            capacity: self.capacity,
            area: self.area,
            bed_type: self.bed_type,
            description: self.description,
            facilities: self.facilities,
            images: self.images,
            status: RoomStatus::Available,
            left: self.left,
            top: self.top,
            width: self.width,
            height: self.height,
            created_at: at,
            updated_at: at,
        }
    }
}

/// Step-by-step builder for [`NewRoom`].
#[derive(Debug, Default)]
pub struct NewRoomBuilder {
    inner: NewRoomParts,
}

#[derive(Debug, Default)]
struct NewRoomParts {
    room_number: String,
    room_type: String,
    floor: i32,
    price: f64,
    original_price: f64,
    capacity: i32,
    area: f64,
    bed_type: String,
    description: String,
    facilities: String,
    images: String,
    layout: Option<(i32, i32, i32, i32)>,
}

impl NewRoomBuilder {
    #[must_use]
    pub fn room_number(mut self, room_number: impl Into<String>) -> Self {
        self.inner.room_number = room_number.into();
        self
    }

    #[must_use]
    pub fn room_type(mut self, room_type: impl Into<String>) -> Self {
        self.inner.room_type = room_type.into();
        self
    }

    #[must_use]
    pub fn floor(mut self, floor: i32) -> Self {
        self.inner.floor = floor;
        self
    }

    #[must_use]
    pub fn price(mut self, price: f64) -> Self {
        self.inner.price = price;
        self
    }

    #[must_use]
    pub fn original_price(mut self, original_price: f64) -> Self {
        self.inner.original_price = original_price;
        self
    }

    #[must_use]
    pub fn capacity(mut self, capacity: i32) -> Self {
        self.inner.capacity = capacity;
        self
    }

    #[must_use]
    pub fn area(mut self, area: f64) -> Self {
        self.inner.area = area;
        self
    }

    #[must_use]
    pub fn bed_type(mut self, bed_type: impl Into<String>) -> Self {
        self.inner.bed_type = bed_type.into();
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.inner.description = description.into();
        self
    }

    #[must_use]
    pub fn facilities(mut self, facilities: impl Into<String>) -> Self {
        self.inner.facilities = facilities.into();
        self
    }

    #[must_use]
    pub fn images(mut self, images: impl Into<String>) -> Self {
        self.inner.images = images.into();
        self
    }

    /// Floor-plan position as `(left, top, width, height)`.
    #[must_use]
    pub fn layout(mut self, left: i32, top: i32, width: i32, height: i32) -> Self {
        self.inner.layout = Some((left, top, width, height));
        self
    }

    /// Consume the builder, validate, and return a [`NewRoom`].
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if any structural constraint fails.
    pub fn build(self) -> Result<NewRoom, ValidationError> {
        let parts = self.inner;
        let (left, top, width, height) = match parts.layout {
            Some((l, t, w, h)) => (Some(l), Some(t), Some(w), Some(h)),
            None => (None, None, None, None),
        };
        let room = NewRoom {
            room_number: parts.room_number,
            room_type: parts.room_type,
            floor: parts.floor,
            price: parts.price,
            original_price: parts.original_price,
            capacity: parts.capacity,
            area: parts.area,
            bed_type: parts.bed_type,
            description: parts.description,
            facilities: parts.facilities,
            images: parts.images,
            left,
            top,
            width,
            height,
        };
        room.validate()?;
        Ok(room)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> NewRoomBuilder {
        NewRoom::builder()
            .room_number("101")
            .room_type("Deluxe")
            .floor(1)
            .price(100.0)
            .capacity(2)
    }

    #[test]
    fn should_build_valid_room_when_required_fields_provided() {
        let room = valid().bed_type("King").build().unwrap();
        assert_eq!(room.room_number, "101");
        assert_eq!(room.bed_type, "King");
        assert!(room.left.is_none());
    }

    #[test]
    fn should_reject_blank_room_number() {
        let result = valid().room_number("   ").build();
        assert_eq!(result, Err(ValidationError::EmptyRoomNumber));
    }

    #[test]
    fn should_reject_zero_price() {
        let result = valid().price(0.0).build();
        assert_eq!(result, Err(ValidationError::NonPositivePrice));
    }

    #[test]
    fn should_reject_nan_price() {
        let result = valid().price(f64::NAN).build();
        assert_eq!(result, Err(ValidationError::NonPositivePrice));
    }

    #[test]
    fn should_reject_zero_capacity() {
        let result = valid().capacity(0).build();
        assert_eq!(result, Err(ValidationError::NonPositiveCapacity));
    }

    #[test]
    fn should_reject_non_positive_floor() {
        let result = valid().floor(0).build();
        assert_eq!(result, Err(ValidationError::NonPositiveFloor));
    }

    #[test]
    fn should_reject_negative_area() {
        let result = valid().area(-1.5).build();
        assert_eq!(result, Err(ValidationError::NegativeArea));
    }

    #[test]
    fn should_force_available_status_when_converted_into_room() {
        let at = crate::time::now();
        let room = valid()
            .layout(10, 20, 80, 60)
            .build()
            .unwrap()
            .into_room(RoomId::new(9), at);
        assert_eq!(room.id, RoomId::new(9));
        assert_eq!(room.status, RoomStatus::Available);
        assert_eq!(room.width, Some(80));
        assert_eq!(room.created_at, room.updated_at);
    }

    #[test]
    fn should_deserialize_intent_with_optional_fields_omitted() {
        let json =
            r#"{"room_number":"201","room_type":"Suite","floor":2,"price":320.5,"capacity":3}"#;
        let room: NewRoom = serde_json::from_str(json).unwrap();
        assert_eq!(room.original_price, 0.0);
        assert!(room.description.is_empty());
        assert!(room.validate().is_ok());
    }
}
