//! Configuration models for store and audit backends.

pub mod roster;

pub use roster::{AuditBackendConfig, RosterConfig, StoreBackendConfig};
