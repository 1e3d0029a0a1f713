//! Shared utilities.

pub mod clock;
pub mod telemetry;

pub use clock::{now_ms, today_utc};
pub use telemetry::init_tracing;
