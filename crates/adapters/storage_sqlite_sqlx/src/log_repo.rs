//! `SQLite` implementation of [`LogRepository`].

use std::str::FromStr;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use hotelhub_app::ports::LogRepository;
use hotelhub_domain::error::HotelError;
use hotelhub_domain::id::LogId;
use hotelhub_domain::log_entry::{LogEntry, LogLevel, ValidLogEntry};
use hotelhub_domain::page::{Page, PageRequest};

use crate::error::StorageError;
use crate::timestamp::{self, now};

struct Wrapper(LogEntry);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let level: String = row.try_get("level")?;
        let created_at: String = row.try_get("created_at")?;
        let updated_at: String = row.try_get("updated_at")?;

        let level =
            LogLevel::from_str(&level).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;

        Ok(Self(LogEntry {
            id: LogId::new(id),
            level,
            message: row.try_get("message")?,
            created_at: timestamp::decode(&created_at)?,
            updated_at: timestamp::decode(&updated_at)?,
        }))
    }
}

const INSERT: &str =
    "INSERT INTO logs (level, message, created_at, updated_at) VALUES (?, ?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM logs WHERE id = ?";
const COUNT_ALL: &str = "SELECT COUNT(*) FROM logs";
const SELECT_PAGE: &str = r"
    SELECT * FROM logs
    ORDER BY created_at DESC, id DESC
    LIMIT ? OFFSET ?
";
const DELETE_BY_ID: &str = "DELETE FROM logs WHERE id = ?";

/// `SQLite`-backed log repository.
pub struct SqliteLogRepository {
    pool: SqlitePool,
}

impl SqliteLogRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl LogRepository for SqliteLogRepository {
    async fn insert_many(&self, entries: Vec<ValidLogEntry>) -> Result<usize, HotelError> {
        let stamp = timestamp::encode(now());
        let mut tx = self.pool.begin().await.map_err(StorageError::from)?;

        for entry in &entries {
            sqlx::query(INSERT)
                .bind(entry.level.as_str())
                .bind(&entry.message)
                .bind(&stamp)
                .bind(&stamp)
                .execute(&mut *tx)
                .await
                .map_err(StorageError::from)?;
        }

        tx.commit().await.map_err(StorageError::from)?;
        Ok(entries.len())
    }

    async fn get_by_id(&self, id: LogId) -> Result<Option<LogEntry>, HotelError> {
        let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
            .bind(id.get())
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(row.map(|w| w.0))
    }

    async fn find_page(&self, page: PageRequest) -> Result<Page<LogEntry>, HotelError> {
        let total: i64 = sqlx::query_scalar(COUNT_ALL)
            .fetch_one(&self.pool)
            .await
            .map_err(StorageError::from)?;

        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_PAGE)
            .bind(i64::try_from(page.limit()).unwrap_or(i64::MAX))
            .bind(i64::try_from(page.offset()).unwrap_or(i64::MAX))
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(Page::new(
            rows.into_iter().map(|w| w.0).collect(),
            u64::try_from(total).unwrap_or_default(),
        ))
    }

    async fn delete(&self, id: LogId) -> Result<bool, HotelError> {
        let result = sqlx::query(DELETE_BY_ID)
            .bind(id.get())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(result.rows_affected() > 0)
    }
}
