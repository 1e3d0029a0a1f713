//! Build a roster service from configuration using a store factory.

use std::sync::Arc;

use crate::config::{AuditBackendConfig, RosterConfig, StoreBackendConfig};
use crate::core::audit::{AuditSink, InMemoryAuditSink, PostgresAuditSink};
use crate::core::store::RosterStore;
use crate::core::RosterError;
use crate::service::RosterService;

/// Build a [`RosterService`] from configuration using the provided store
/// factory; the audit sink is built from the config's audit selection.
///
/// # Errors
///
/// [`RosterError::Backend`] when the configuration fails validation, plus
/// whatever the store factory reports.
pub fn build_service<S, FS>(
    cfg: &RosterConfig,
    mut store_factory: FS,
) -> Result<RosterService<S>, RosterError>
where
    S: RosterStore,
    FS: FnMut(&StoreBackendConfig) -> Result<S, RosterError>,
{
    cfg.validate()
        .map_err(|e| RosterError::Backend(format!("config invalid: {e}")))?;

    let store = Arc::new(store_factory(&cfg.store)?);
    let service = RosterService::new(store);

    let audit: Option<Box<dyn AuditSink>> = match cfg.audit {
        AuditBackendConfig::None => None,
        AuditBackendConfig::Memory => Some(Box::new(InMemoryAuditSink::new(cfg.max_audit_events))),
        AuditBackendConfig::Postgres => Some(Box::new(PostgresAuditSink)),
    };

    Ok(match audit {
        Some(sink) => service.with_audit(sink),
        None => service,
    })
}
