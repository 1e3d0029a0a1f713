//! Tests for configuration validation

use resource_roster::config::{AuditBackendConfig, RosterConfig, StoreBackendConfig};

#[test]
fn test_default_config_is_valid() {
    let cfg = RosterConfig::default();
    assert!(cfg.validate().is_ok());
    assert_eq!(cfg.store, StoreBackendConfig::Memory);
    assert_eq!(cfg.audit, AuditBackendConfig::None);
}

#[test]
fn test_memory_audit_requires_a_buffer() {
    let cfg = RosterConfig {
        store: StoreBackendConfig::Memory,
        audit: AuditBackendConfig::Memory,
        max_audit_events: 0,
    };
    assert!(cfg.validate().is_err());
}

#[test]
fn test_config_from_json() {
    let json = r#"{
        "store": "memory",
        "audit": "memory",
        "max_audit_events": 256
    }"#;
    let cfg = RosterConfig::from_json_str(json).unwrap();
    assert_eq!(cfg.store, StoreBackendConfig::Memory);
    assert_eq!(cfg.audit, AuditBackendConfig::Memory);
    assert_eq!(cfg.max_audit_events, 256);
}

#[test]
fn test_config_from_json_rejects_unknown_backend() {
    let json = r#"{
        "store": "cassandra",
        "audit": "none",
        "max_audit_events": 256
    }"#;
    assert!(RosterConfig::from_json_str(json).is_err());
}

#[test]
fn test_postgres_backend_parses() {
    let json = r#"{
        "store": "postgres",
        "audit": "postgres",
        "max_audit_events": 1
    }"#;
    let cfg = RosterConfig::from_json_str(json).unwrap();
    assert_eq!(cfg.store, StoreBackendConfig::Postgres);
    assert_eq!(cfg.audit, AuditBackendConfig::Postgres);
}
