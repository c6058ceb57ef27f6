//! `SQLite` implementation of [`RoomRepository`].

use std::str::FromStr;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, QueryBuilder, Row, Sqlite, SqlitePool};

use hotelhub_app::ports::{RoomFilter, RoomRepository};
use hotelhub_domain::error::{ConflictError, HotelError};
use hotelhub_domain::id::RoomId;
use hotelhub_domain::page::{Page, PageRequest};
use hotelhub_domain::room::{NewRoom, Room, RoomStatus};
use hotelhub_domain::time::Timestamp;

use crate::error::{StorageError, is_unique_violation};
use crate::timestamp::{self, now};

/// Wrapper for converting database rows into domain [`Room`].
struct Wrapper(Room);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Room> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let status: String = row.try_get("status")?;
        let created_at: String = row.try_get("created_at")?;
        let updated_at: String = row.try_get("updated_at")?;

        let status =
            RoomStatus::from_str(&status).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;

        Ok(Self(Room {
            id: RoomId::new(id),
            room_number: row.try_get("room_number")?,
            room_type: row.try_get("room_type")?,
            floor: row.try_get("floor")?,
            price: row.try_get("price")?,
            original_price: row.try_get("original_price")?,
            capacity: row.try_get("capacity")?,
            area: row.try_get("area")?,
            bed_type: row.try_get("bed_type")?,
            description: row.try_get("description")?,
            facilities: row.try_get("facilities")?,
            images: row.try_get("images")?,
            status,
            left: row.try_get("layout_left")?,
            top: row.try_get("layout_top")?,
            width: row.try_get("layout_width")?,
            height: row.try_get("layout_height")?,
            created_at: timestamp::decode(&created_at)?,
            updated_at: timestamp::decode(&updated_at)?,
        }))
    }
}

const INSERT: &str = r"
    INSERT INTO rooms (
        room_number, room_type, floor, price, original_price, capacity, area,
        bed_type, description, facilities, images, status,
        layout_left, layout_top, layout_width, layout_height,
        created_at, updated_at
    )
    VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
";
const SELECT_BY_ID: &str = "SELECT * FROM rooms WHERE id = ?";
const EXISTS_BY_ROOM_NUMBER: &str = "SELECT EXISTS(SELECT 1 FROM rooms WHERE room_number = ?)";
const UPDATE: &str = r"
    UPDATE rooms SET
        room_type = ?, floor = ?, price = ?, original_price = ?, capacity = ?, area = ?,
        bed_type = ?, description = ?, facilities = ?, images = ?,
        layout_left = ?, layout_top = ?, layout_width = ?, layout_height = ?,
        updated_at = ?
    WHERE id = ?
";
const UPDATE_STATUS: &str = "UPDATE rooms SET status = ?, updated_at = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM rooms WHERE id = ?";

async fn insert_one<'e, E>(executor: E, room: NewRoom, at: Timestamp) -> Result<Room, sqlx::Error>
where
    E: sqlx::Executor<'e, Database = Sqlite>,
{
    let stamp = timestamp::encode(at);
    let result = sqlx::query(INSERT)
        .bind(&room.room_number)
        .bind(&room.room_type)
        .bind(room.floor)
        .bind(room.price)
        .bind(room.original_price)
        .bind(room.capacity)
        .bind(room.area)
        .bind(&room.bed_type)
        .bind(&room.description)
        .bind(&room.facilities)
        .bind(&room.images)
        .bind(RoomStatus::Available.as_str())
        .bind(room.left)
        .bind(room.top)
        .bind(room.width)
        .bind(room.height)
        .bind(&stamp)
        .bind(&stamp)
        .execute(executor)
        .await?;

    Ok(room.into_room(RoomId::new(result.last_insert_rowid()), at))
}

fn push_filter(query: &mut QueryBuilder<'_, Sqlite>, filter: &RoomFilter) {
    match filter {
        RoomFilter::All => {}
        RoomFilter::Status(status) => {
            query.push(" WHERE status = ").push_bind(status.as_str());
        }
        RoomFilter::RoomType(room_type) => {
            query.push(" WHERE room_type = ").push_bind(room_type.clone());
        }
        RoomFilter::Floor(floor) => {
            query.push(" WHERE floor = ").push_bind(*floor);
        }
        RoomFilter::PriceRange { min, max } => {
            query
                .push(" WHERE price >= ")
                .push_bind(*min)
                .push(" AND price <= ")
                .push_bind(*max);
        }
    }
}

/// `SQLite`-backed room repository.
pub struct SqliteRoomRepository {
    pool: SqlitePool,
}

impl SqliteRoomRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl RoomRepository for SqliteRoomRepository {
    async fn insert(&self, room: NewRoom) -> Result<Room, HotelError> {
        let room_number = room.room_number.clone();
        insert_one(&self.pool, room, now()).await.map_err(|err| {
            if is_unique_violation(&err) {
                ConflictError { room_number }.into()
            } else {
                StorageError::from(err).into()
            }
        })
    }

    async fn insert_many(&self, rooms: Vec<NewRoom>) -> Result<Vec<Room>, HotelError> {
        let at = now();
        let mut tx = self.pool.begin().await.map_err(StorageError::from)?;

        let mut created = Vec::with_capacity(rooms.len());
        for room in rooms {
            let room = insert_one(&mut *tx, room, at)
                .await
                .map_err(StorageError::from)?;
            created.push(room);
        }

        tx.commit().await.map_err(StorageError::from)?;
        tracing::debug!(count = created.len(), "rooms inserted");
        Ok(created)
    }

    async fn get_by_id(&self, id: RoomId) -> Result<Option<Room>, HotelError> {
        let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
            .bind(id.get())
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(Wrapper::maybe(row))
    }

    async fn exists_by_room_number(&self, room_number: &str) -> Result<bool, HotelError> {
        let exists: bool = sqlx::query_scalar(EXISTS_BY_ROOM_NUMBER)
            .bind(room_number)
            .fetch_one(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(exists)
    }

    async fn find_existing_room_numbers(
        &self,
        room_numbers: &[String],
    ) -> Result<Vec<String>, HotelError> {
        if room_numbers.is_empty() {
            return Ok(Vec::new());
        }

        let mut query = QueryBuilder::<Sqlite>::new(
            "SELECT room_number FROM rooms WHERE room_number IN (",
        );
        let mut values = query.separated(", ");
        for room_number in room_numbers {
            values.push_bind(room_number.as_str());
        }
        values.push_unseparated(")");

        let existing: Vec<String> = query
            .build_query_scalar()
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(existing)
    }

    async fn find_page(
        &self,
        filter: RoomFilter,
        page: PageRequest,
    ) -> Result<Page<Room>, HotelError> {
        let mut count = QueryBuilder::<Sqlite>::new("SELECT COUNT(*) FROM rooms");
        push_filter(&mut count, &filter);
        let total: i64 = count
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(StorageError::from)?;

        let mut select = QueryBuilder::<Sqlite>::new("SELECT * FROM rooms");
        push_filter(&mut select, &filter);
        select
            .push(" ORDER BY id ASC LIMIT ")
            .push_bind(i64::try_from(page.limit()).unwrap_or(i64::MAX))
            .push(" OFFSET ")
            .push_bind(i64::try_from(page.offset()).unwrap_or(i64::MAX));
        let rows: Vec<Wrapper> = select
            .build_query_as()
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(Page::new(
            rows.into_iter().map(|w| w.0).collect(),
            u64::try_from(total).unwrap_or_default(),
        ))
    }

    async fn update(&self, room: Room) -> Result<Option<Room>, HotelError> {
        let mut room = room;
        room.updated_at = now();

        let result = sqlx::query(UPDATE)
            .bind(&room.room_type)
            .bind(room.floor)
            .bind(room.price)
            .bind(room.original_price)
            .bind(room.capacity)
            .bind(room.area)
            .bind(&room.bed_type)
            .bind(&room.description)
            .bind(&room.facilities)
            .bind(&room.images)
            .bind(room.left)
            .bind(room.top)
            .bind(room.width)
            .bind(room.height)
            .bind(timestamp::encode(room.updated_at))
            .bind(room.id.get())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok((result.rows_affected() > 0).then_some(room))
    }

    async fn update_status(&self, id: RoomId, status: RoomStatus) -> Result<bool, HotelError> {
        let result = sqlx::query(UPDATE_STATUS)
            .bind(status.as_str())
            .bind(timestamp::encode(now()))
            .bind(id.get())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: RoomId) -> Result<(), HotelError> {
        sqlx::query(DELETE_BY_ID)
            .bind(id.get())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(())
    }
}
