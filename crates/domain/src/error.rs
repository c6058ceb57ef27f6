//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`HotelError`]
//! via `#[from]`. The HTTP adapter maps every variant to a stable code.

use std::error::Error as StdError;

use crate::principal::Role;

/// Boxed, thread-safe error source carried by [`DatabaseError`].
pub type BoxError = Box<dyn StdError + Send + Sync>;

/// Top-level error for every use-case in the workspace.
#[derive(Debug, thiserror::Error)]
pub enum HotelError {
    /// The input broke a structural or policy rule. Never retried.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A uniqueness rule was violated.
    #[error(transparent)]
    Conflict(#[from] ConflictError),

    /// The requested record does not exist.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// The store collaborator failed.
    #[error(transparent)]
    Database(#[from] DatabaseError),

    /// The caller could not be authenticated or lacks the required role.
    #[error(transparent)]
    Auth(#[from] AuthError),
}

impl HotelError {
    /// Tag a database failure with the operation that was running.
    ///
    /// Domain errors pass through untouched.
    #[must_use]
    pub fn during(self, operation: &'static str) -> Self {
        match self {
            Self::Database(err) => Self::Database(DatabaseError {
                operation,
                source: err.source,
            }),
            other => other,
        }
    }
}

/// Structural and policy violations detected before any store call.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("room number must not be empty")]
    EmptyRoomNumber,

    #[error("room type must not be empty")]
    EmptyRoomType,

    #[error("floor must be greater than zero")]
    NonPositiveFloor,

    #[error("price must be greater than zero")]
    NonPositivePrice,

    #[error("capacity must be greater than zero")]
    NonPositiveCapacity,

    #[error("original price must not be negative")]
    NegativeOriginalPrice,

    #[error("area must not be negative")]
    NegativeArea,

    #[error("invalid room status: {0:?}")]
    InvalidStatus(String),

    #[error("invalid log level: {0:?}")]
    InvalidLogLevel(String),

    #[error("log message must not be empty")]
    EmptyLogMessage,

    #[error("at least one log entry is required")]
    EmptyLogReport,

    #[error("room list must not be empty")]
    EmptyBatch,

    #[error("at most {max} rooms can be created at once, got {actual}")]
    BatchTooLarge { max: usize, actual: usize },

    #[error("room at index {index} is invalid: {reason}")]
    InvalidBatchItem {
        index: usize,
        reason: Box<ValidationError>,
    },

    #[error("invalid identifier: {0:?}")]
    InvalidId(String),
}

/// A uniqueness rule was violated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("room number {room_number:?} already exists")]
pub struct ConflictError {
    pub room_number: String,
}

/// A lookup by key found nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

/// A store call failed. The source is kept for logs, never for callers.
#[derive(Debug, thiserror::Error)]
#[error("database error during {operation}")]
pub struct DatabaseError {
    pub operation: &'static str,
    #[source]
    pub source: BoxError,
}

impl DatabaseError {
    /// Wrap an infrastructure failure that has not been tagged yet.
    pub fn new(source: impl Into<BoxError>) -> Self {
        Self {
            operation: "store call",
            source: source.into(),
        }
    }
}

/// Outcomes of the authentication collaborator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("missing authorization header")]
    MissingCredentials,

    #[error("authorization header must be of the form: Bearer <token>")]
    MalformedCredentials,

    #[error("token is invalid or expired")]
    InvalidToken,

    #[error("operation requires the {required} role")]
    Forbidden { required: Role },
}
