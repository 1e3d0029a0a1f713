//! Error types for roster operations.

use thiserror::Error;

/// Errors produced by roster components.
///
/// Every variant is recoverable by the caller: the expected handling is to
/// surface the condition to the end user and allow a retry with corrected
/// input. Rejections carry structured diagnostics so that callers never have
/// to pattern-match on message text.
#[derive(Debug, Error)]
pub enum RosterError {
    /// A referenced record does not exist.
    #[error("{entity} not found: {id}")]
    NotFound {
        /// Kind of record that was looked up (e.g. "worker", "assignment").
        entity: &'static str,
        /// Identifier that failed to resolve.
        id: String,
    },
    /// Malformed input rejected before any persistence attempt.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// Committing the candidate allocation would exceed the worker's ceiling.
    #[error("capacity exceeded: allocated {allocated}% + requested {requested}% > capacity {capacity}%")]
    CapacityExceeded {
        /// Sum of the worker's active allocations at decision time.
        allocated: u32,
        /// Allocation percentage requested by the candidate assignment.
        requested: u32,
        /// The worker's maximum capacity.
        capacity: u32,
    },
    /// A uniqueness constraint was violated (e.g. duplicate email).
    #[error("conflict: {0}")]
    Conflict(String),
    /// Backend-specific failure with context.
    #[error("backend error: {0}")]
    Backend(String),
}

/// Application-facing result using anyhow for higher-level contexts.
pub type AppResult<T> = Result<T, anyhow::Error>;
