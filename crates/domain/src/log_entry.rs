//! Log entries reported by clients and read back by administrators.
//!
//! Entries are append-only: they can be listed, fetched and deleted, never edited.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::id::LogId;
use crate::time::Timestamp;

/// Severity of a [`LogEntry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            other => Err(ValidationError::InvalidLogLevel(other.to_owned())),
        }
    }
}

/// A persisted log record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: LogId,
    pub level: LogLevel,
    pub message: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A log record as reported by a client.
///
/// `level` stays a string until [`NewLogEntry::validate`] so an unknown level
/// surfaces as a validation error rather than a decoding failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewLogEntry {
    pub level: String,
    pub message: String,
}

/// A [`NewLogEntry`] that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidLogEntry {
    pub level: LogLevel,
    pub message: String,
}

impl ValidLogEntry {
    /// Attach the identity and time assigned by the store.
    #[must_use]
    pub fn into_entry(self, id: LogId, at: Timestamp) -> LogEntry {
        LogEntry {
            id,
            level: self.level,
            message: self.message,
            created_at: at,
            updated_at: at,
        }
    }
}

impl NewLogEntry {
    /// Check level membership and message presence.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidLogLevel`] or
    /// [`ValidationError::EmptyLogMessage`].
    pub fn validate(self) -> Result<ValidLogEntry, ValidationError> {
        let level = self.level.parse()?;
        if self.message.trim().is_empty() {
            return Err(ValidationError::EmptyLogMessage);
        }
        Ok(ValidLogEntry {
            level,
            message: self.message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(level: &str, message: &str) -> NewLogEntry {
        NewLogEntry {
            level: level.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn should_accept_known_level_with_message() {
        let valid = entry("warn", "disk almost full").validate().unwrap();
        assert_eq!(valid.level, LogLevel::Warn);
    }

    #[test]
    fn should_reject_unknown_level() {
        let result = entry("fatal", "boom").validate();
        assert_eq!(
            result,
            Err(ValidationError::InvalidLogLevel("fatal".to_string()))
        );
    }

    #[test]
    fn should_reject_blank_message() {
        let result = entry("info", "  ").validate();
        assert_eq!(result, Err(ValidationError::EmptyLogMessage));
    }

    #[test]
    fn should_display_lowercase_level() {
        assert_eq!(LogLevel::Error.to_string(), "error");
    }
}
