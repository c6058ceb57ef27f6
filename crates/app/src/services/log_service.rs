//! Log service: client-reported log intake and administrator review.

use hotelhub_domain::audit::AuditEvent;
use hotelhub_domain::error::{HotelError, NotFoundError, ValidationError};
use hotelhub_domain::id::LogId;
use hotelhub_domain::log_entry::{LogEntry, NewLogEntry, ValidLogEntry};
use hotelhub_domain::page::{Page, PageRequest};

use crate::ports::{AuditSink, LogRepository};

/// Application service for [`LogEntry`] records.
pub struct LogService<L, A> {
    repo: L,
    audit: A,
}

fn log_not_found(id: LogId) -> HotelError {
    NotFoundError {
        entity: "Log",
        id: id.to_string(),
    }
    .into()
}

impl<L: LogRepository, A: AuditSink> LogService<L, A> {
    /// Create a new service backed by the given repository and audit sink.
    pub fn new(repo: L, audit: A) -> Self {
        Self { repo, audit }
    }

    /// Validate and store a batch of reported entries.
    ///
    /// Either every entry is stored or none is.
    ///
    /// # Errors
    ///
    /// Returns [`HotelError::Validation`] when the report is empty or any
    /// entry is malformed, or a database error.
    pub async fn report_logs(&self, entries: Vec<NewLogEntry>) -> Result<usize, HotelError> {
        if entries.is_empty() {
            return Err(ValidationError::EmptyLogReport.into());
        }
        let entries = entries
            .into_iter()
            .map(NewLogEntry::validate)
            .collect::<Result<Vec<ValidLogEntry>, _>>()?;

        let count = self
            .repo
            .insert_many(entries)
            .await
            .map_err(|err| err.during("report logs"))?;

        tracing::debug!(count, "log entries stored");
        self.audit.record(AuditEvent::LogsReported { count });
        Ok(count)
    }

    /// Stored entries, newest first.
    ///
    /// # Errors
    ///
    /// Returns a database error when the store fails.
    pub async fn list_logs(&self, page: PageRequest) -> Result<Page<LogEntry>, HotelError> {
        self.repo
            .find_page(page)
            .await
            .map_err(|err| err.during("list logs"))
    }

    /// Look up an entry by key.
    ///
    /// # Errors
    ///
    /// Returns [`HotelError::NotFound`] when absent, or a database error.
    pub async fn get_log(&self, id: LogId) -> Result<LogEntry, HotelError> {
        self.repo
            .get_by_id(id)
            .await
            .map_err(|err| err.during("find log"))?
            .ok_or_else(|| log_not_found(id))
    }

    /// Delete an entry.
    ///
    /// # Errors
    ///
    /// Returns [`HotelError::NotFound`] when absent, or a database error.
    pub async fn delete_log(&self, id: LogId) -> Result<(), HotelError> {
        let deleted = self
            .repo
            .delete(id)
            .await
            .map_err(|err| err.during("delete log"))?;
        if !deleted {
            return Err(log_not_found(id));
        }

        self.audit.record(AuditEvent::LogDeleted { id });
        Ok(())
    }
}
