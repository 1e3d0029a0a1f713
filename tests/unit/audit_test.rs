//! Tests for audit sinks

use resource_roster::core::audit::{build_audit_event, AuditSink, InMemoryAuditSink};

#[test]
fn test_in_memory_sink_records_events() {
    let mut sink = InMemoryAuditSink::new(10);
    sink.record(build_audit_event(
        "evt-1", "worker-1", "assign-1", "commit", None,
    ));
    sink.record(build_audit_event(
        "evt-2",
        "worker-1",
        "assign-2",
        "reject",
        Some("capacity exceeded".into()),
    ));

    let events = sink.events();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].action, "commit");
    assert_eq!(events[1].detail.as_deref(), Some("capacity exceeded"));
}

#[test]
fn test_in_memory_sink_is_bounded() {
    let mut sink = InMemoryAuditSink::new(2);
    for i in 0..5 {
        sink.record(build_audit_event(
            format!("evt-{i}"),
            "worker-1",
            format!("assign-{i}"),
            "commit",
            None,
        ));
    }

    let events = sink.events();
    assert_eq!(events.len(), 2);
    // Oldest events are dropped first.
    assert_eq!(events[0].event_id, "evt-3");
    assert_eq!(events[1].event_id, "evt-4");
}

#[test]
fn test_event_timestamps_are_set() {
    let event = build_audit_event("evt-1", "worker-1", "assign-1", "delete", None);
    assert!(event.created_at_ms > 0);
}
