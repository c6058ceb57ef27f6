//! # hotelhub-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `hotelhub-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `hotelhub-app` (for port traits) and `hotelhub-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod error;
mod log_repo;
mod pool;
mod room_repo;
mod timestamp;

pub use error::StorageError;
pub use log_repo::SqliteLogRepository;
pub use pool::{Config, Database};
pub use room_repo::SqliteRoomRepository;
