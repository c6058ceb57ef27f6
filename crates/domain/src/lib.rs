//! # hotelhub-domain
//!
//! Pure domain model for the hotelhub back office.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps, pagination
//! - Define **Rooms** (inventory records), their creation intents and partial updates
//! - Define **batch classification** (in-request and in-store duplicate detection)
//! - Define **Log entries** (append-only client reports)
//! - Define **Principals** (authenticated identity and role)
//! - Define **Audit events** (structured records of mutations)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod page;
pub mod time;

pub mod audit;
pub mod log_entry;
pub mod principal;
pub mod room;
