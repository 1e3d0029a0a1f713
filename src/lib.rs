//! # Resource Roster
//!
//! A capacity-aware engineering resource roster: workers, projects, and
//! time-bounded project assignments, with a capacity-allocation rule that
//! keeps any worker's committed allocation within their ceiling.
//!
//! This library provides the domain core and persistence seam of a resource
//! scheduling backend. HTTP routing, rendering, and credential handling are
//! the caller's concern; the service layer here is what those request
//! handlers call into.
//!
//! ## Core Problem Solved
//!
//! Staffing tools routinely overcommit people because the capacity check is
//! an afterthought:
//!
//! - **Bounded capacity**: a worker is full-time (100%) or half-time (50%),
//!   and the sum of their active allocations must never exceed that ceiling
//! - **Time-bounded commitments**: an assignment consumes capacity for as
//!   long as its date range has not concluded
//! - **Check-then-act races**: two concurrent assignment writes can each
//!   pass a naive read-side check and jointly overcommit a worker
//!
//! ## Key Features
//!
//! - **Capacity Allocator**: a pure decision function over a snapshot of a
//!   worker's active assignments, with structured rejection diagnostics
//! - **Guarded Commit**: the store evaluates the capacity rule and persists
//!   the assignment atomically with respect to other writers, closing the
//!   read-then-write race
//! - **Pluggable Persistence**: storage traits with a fully functional
//!   in-memory backend and a Postgres adapter (schema definitions; client
//!   wiring left to the integration layer)
//! - **Audit Trail**: every allocation commit, rejection, and removal can be
//!   recorded to an audit sink
//!
//! ## Example
//!
//! ```rust,ignore
//! use resource_roster::core::RosterError;
//! use resource_roster::infra::store::MemoryStore;
//! use resource_roster::service::RosterService;
//! use resource_roster::util::clock::today_utc;
//!
//! let service = RosterService::new(Arc::new(MemoryStore::new()));
//!
//! let engineer = service.create_engineer(new_engineer).await?;
//! let report = service.engineer_capacity(engineer.id, today_utc()).await?;
//! assert_eq!(report.available, report.max_capacity);
//!
//! // Rejected commits carry the computed sum and ceiling, so callers can
//! // render a precise message without string matching.
//! match service.create_assignment(candidate, today_utc()).await {
//!     Err(RosterError::CapacityExceeded { allocated, capacity, .. }) => { /* ... */ }
//!     other => { /* ... */ }
//! }
//! ```
//!
//! For complete examples, see `tests/capacity_rule_test.rs`.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Domain core: data model, capacity allocator, errors, and audit trail.
pub mod core;
/// Configuration models for store and audit backends.
pub mod config;
/// Builders to construct the roster service from configuration.
pub mod builders;
/// Infrastructure adapters for persistence backends.
pub mod infra;
/// API-facing service layer and request/response models.
pub mod service;
/// Shared utilities.
pub mod util;
