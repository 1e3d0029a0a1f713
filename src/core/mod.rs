//! Domain core: data model, capacity allocator, errors, and audit trail.

pub mod allocator;
pub mod audit;
pub mod error;
pub mod model;
pub mod store;

pub use allocator::{active_allocation, evaluate, CapacityAllocator, CapacityReport};
pub use audit::{build_audit_event, AuditEvent, AuditSink, InMemoryAuditSink, PostgresAuditSink};
pub use error::{AppResult, RosterError};
pub use model::{
    Assignment, EmploymentType, Project, ProjectStatus, Role, Seniority, Worker,
};
pub use store::{AssignmentStore, ProjectStore, RosterStore, WorkerStore};
