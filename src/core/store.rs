//! Storage abstractions for roster records.
//!
//! Backends live under [`crate::infra::store`]. All traits are async so that
//! database-backed implementations can perform real I/O; the in-memory
//! backend resolves immediately.

use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::core::model::{Assignment, Project, Worker};
use crate::core::RosterError;

/// Persistence operations for worker records.
#[async_trait]
pub trait WorkerStore: Send + Sync {
    /// Insert a new worker. Fails with [`RosterError::Conflict`] when the
    /// email is already taken.
    async fn insert_worker(&self, worker: Worker) -> Result<Worker, RosterError>;

    /// Fetch a worker by id.
    async fn worker(&self, id: Uuid) -> Result<Option<Worker>, RosterError>;

    /// Replace a worker record wholesale. Fails with
    /// [`RosterError::NotFound`] for an unknown id and
    /// [`RosterError::Conflict`] when the email belongs to another worker.
    async fn update_worker(&self, worker: Worker) -> Result<Worker, RosterError>;

    /// List all workers with the engineer role.
    async fn list_engineers(&self) -> Result<Vec<Worker>, RosterError>;
}

/// Persistence operations for project records.
#[async_trait]
pub trait ProjectStore: Send + Sync {
    /// Insert a new project.
    async fn insert_project(&self, project: Project) -> Result<Project, RosterError>;

    /// Fetch a project by id.
    async fn project(&self, id: Uuid) -> Result<Option<Project>, RosterError>;

    /// Replace a project record wholesale. Fails with
    /// [`RosterError::NotFound`] for an unknown id.
    async fn update_project(&self, project: Project) -> Result<Project, RosterError>;

    /// List all projects.
    async fn list_projects(&self) -> Result<Vec<Project>, RosterError>;
}

/// Persistence operations for assignment records.
///
/// Note the absence of a plain `insert_assignment`: all assignment writes go
/// through the checked variants, which evaluate the capacity rule and persist
/// atomically with respect to other writers. A read-side check followed by a
/// separate insert would reopen the check-then-act race between concurrent
/// requests for the same worker.
///
/// The model carries no uniqueness constraint on the (worker, project) pair;
/// overlapping duplicate assignments are accepted as long as capacity holds.
#[async_trait]
pub trait AssignmentStore: Send + Sync {
    /// Fetch an assignment by id.
    async fn assignment(&self, id: Uuid) -> Result<Option<Assignment>, RosterError>;

    /// List all assignments.
    async fn list_assignments(&self) -> Result<Vec<Assignment>, RosterError>;

    /// List one worker's assignments, sorted by start date ascending.
    async fn assignments_for_worker(
        &self,
        worker_id: Uuid,
    ) -> Result<Vec<Assignment>, RosterError>;

    /// List one worker's assignments whose end date is on or after `on`.
    async fn active_assignments(
        &self,
        worker_id: Uuid,
        on: NaiveDate,
    ) -> Result<Vec<Assignment>, RosterError>;

    /// Evaluate the capacity rule for `assignment` against the worker's
    /// active allocations on `on` and insert it in the same atomic step.
    ///
    /// Fails with [`RosterError::NotFound`] for an unknown worker and
    /// [`RosterError::CapacityExceeded`] when the commit would push the
    /// worker past their ceiling.
    async fn insert_assignment_checked(
        &self,
        assignment: Assignment,
        on: NaiveDate,
    ) -> Result<Assignment, RosterError>;

    /// Replace an existing assignment, re-evaluating the capacity rule with
    /// the assignment's own prior record excluded from the sum.
    ///
    /// Fails with [`RosterError::NotFound`] for an unknown assignment or
    /// worker, and [`RosterError::CapacityExceeded`] on overcommit.
    async fn update_assignment_checked(
        &self,
        assignment: Assignment,
        on: NaiveDate,
    ) -> Result<Assignment, RosterError>;

    /// Delete an assignment. Returns whether a record was removed.
    async fn delete_assignment(&self, id: Uuid) -> Result<bool, RosterError>;
}

/// Combined storage surface consumed by the service layer.
pub trait RosterStore: WorkerStore + ProjectStore + AssignmentStore {}

impl<T> RosterStore for T where T: WorkerStore + ProjectStore + AssignmentStore {}
