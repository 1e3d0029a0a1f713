//! Clock helpers.
//!
//! All date comparisons in this crate happen at day granularity in UTC.
//! Inputs arrive as ISO dates with no zone information, so the crate picks
//! UTC as the canonical zone; which assignments count as active on boundary
//! days follows from that choice.

use chrono::{NaiveDate, Utc};

/// Current wall-clock time in milliseconds since the Unix epoch.
#[must_use]
pub fn now_ms() -> u128 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default()
}

/// Today's date in UTC, the reference date used when callers pass "now".
#[must_use]
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}
