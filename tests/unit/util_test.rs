//! Tests for shared utilities

use resource_roster::util::{init_tracing, now_ms, today_utc};

#[test]
fn test_init_tracing_is_idempotent() {
    init_tracing();
    // A second call must not panic or replace the subscriber.
    init_tracing();
}

#[test]
fn test_now_ms_advances() {
    let a = now_ms();
    std::thread::sleep(std::time::Duration::from_millis(2));
    let b = now_ms();
    assert!(b > a);
}

#[test]
fn test_today_utc_matches_chrono() {
    assert_eq!(today_utc(), chrono::Utc::now().date_naive());
}
