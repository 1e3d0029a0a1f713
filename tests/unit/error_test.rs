//! Tests for error types

use resource_roster::core::RosterError;

#[test]
fn test_not_found_error() {
    let err = RosterError::NotFound {
        entity: "worker",
        id: "w-42".to_string(),
    };
    assert_eq!(format!("{err}"), "worker not found: w-42");
}

#[test]
fn test_invalid_input_error() {
    let err = RosterError::InvalidInput("end date must be after start date".to_string());
    assert_eq!(
        format!("{err}"),
        "invalid input: end date must be after start date"
    );
}

#[test]
fn test_capacity_exceeded_error_carries_diagnostics() {
    let err = RosterError::CapacityExceeded {
        allocated: 60,
        requested: 50,
        capacity: 100,
    };
    assert_eq!(
        format!("{err}"),
        "capacity exceeded: allocated 60% + requested 50% > capacity 100%"
    );
}

#[test]
fn test_conflict_error() {
    let err = RosterError::Conflict("email already exists: a@example.com".to_string());
    assert_eq!(
        format!("{err}"),
        "conflict: email already exists: a@example.com"
    );
}

#[test]
fn test_backend_error() {
    let err = RosterError::Backend("connection failed".to_string());
    assert_eq!(format!("{err}"), "backend error: connection failed");
}
