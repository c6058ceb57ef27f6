//! # hotelhub-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the JSON API for room inventory (`/api/rooms`, `/api/admin/rooms`, …)
//!   and client log intake (`/api/logs/report`, `/api/admin/logs`)
//! - Verify bearer tokens and gate administrative routes on the `admin` role
//! - Map HTTP requests into application service calls (driving adapter)
//! - Wrap every result in the uniform `{success, data | error}` envelope
//!
//! ## Dependency rule
//! Depends on `hotelhub-app` (for port traits and services) and `hotelhub-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod auth;
pub mod error;
pub mod extract;
pub mod response;
pub mod router;
pub mod state;
