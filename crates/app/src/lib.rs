//! # hotelhub-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `RoomRepository`: point, bulk and filtered-page access to rooms
//!   - `LogRepository`: append, page, fetch and delete log entries
//!   - `AuditSink`: fire-and-forget structured events
//!   - `Authenticator`: bearer credential to principal
//! - Define **driving/inbound ports** as use-case structs:
//!   - `RoomService`: room lifecycle and batch provisioning
//!   - `LogService`: client log reporting and administration
//! - Provide **in-process infrastructure** (audit sink) that doesn't need IO
//!
//! ## Dependency rule
//! Depends on `hotelhub-domain` only (plus `tracing`).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod audit;
pub mod ports;
pub mod services;
