//! Tests for the service builder

use chrono::NaiveDate;
use resource_roster::builders::build_service;
use resource_roster::config::{AuditBackendConfig, RosterConfig, StoreBackendConfig};
use resource_roster::core::model::{EmploymentType, Seniority};
use resource_roster::core::RosterError;
use resource_roster::infra::store::{MemoryStore, PostgresStore};
use resource_roster::service::NewEngineer;

#[test]
fn test_build_memory_service() {
    let cfg = RosterConfig::default();
    let service = build_service(&cfg, |_| Ok(MemoryStore::new())).unwrap();
    drop(service);
}

#[test]
fn test_build_rejects_invalid_config() {
    let cfg = RosterConfig {
        store: StoreBackendConfig::Memory,
        audit: AuditBackendConfig::Memory,
        max_audit_events: 0,
    };
    let result = build_service(&cfg, |_| Ok(MemoryStore::new()));
    assert!(matches!(result, Err(RosterError::Backend(_))));
}

#[tokio::test]
async fn test_built_service_serves_requests() {
    let cfg = RosterConfig {
        store: StoreBackendConfig::Memory,
        audit: AuditBackendConfig::Memory,
        max_audit_events: 64,
    };
    let service = build_service(&cfg, |_| Ok(MemoryStore::new())).unwrap();
    let w = service
        .create_engineer(NewEngineer {
            name: "Built".into(),
            email: "built@example.com".into(),
            seniority: Seniority::Junior,
            skills: vec!["python".into()],
            employment_type: EmploymentType::FullTime,
            department: "Data".into(),
        })
        .await
        .unwrap();
    let on = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
    let report = service.engineer_capacity(w.id, on).await.unwrap();
    assert_eq!(report.available, 100);
}

#[tokio::test]
async fn test_unwired_postgres_store_reports_backend_error() {
    let cfg = RosterConfig {
        store: StoreBackendConfig::Postgres,
        audit: AuditBackendConfig::None,
        max_audit_events: 1024,
    };
    let service = build_service(&cfg, |_| Ok(PostgresStore::new())).unwrap();
    let result = service.list_engineers().await;
    assert!(matches!(result, Err(RosterError::Backend(_))));
}

#[test]
fn test_postgres_migrations_cover_all_tables() {
    let ddl = PostgresStore::migrations().join("\n");
    assert!(ddl.contains("rr_workers"));
    assert!(ddl.contains("rr_projects"));
    assert!(ddl.contains("rr_assignments"));
}
