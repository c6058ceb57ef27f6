//! Timestamps are stored as fixed-width RFC 3339 text so they sort lexically.

use chrono::{SecondsFormat, SubsecRound};
use hotelhub_domain::time::Timestamp;

/// Current time at the precision the store keeps.
pub(crate) fn now() -> Timestamp {
    hotelhub_domain::time::now().trunc_subsecs(6)
}

pub(crate) fn encode(at: Timestamp) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub(crate) fn decode(value: &str) -> Result<Timestamp, sqlx::Error> {
    chrono::DateTime::parse_from_rfc3339(value)
        .map(|at| at.to_utc())
        .map_err(|err| sqlx::Error::Decode(Box::new(err)))
}
