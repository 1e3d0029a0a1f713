//! Postgres-backed storage adapter (schema and interface stubs).
//!
//! Carries the DDL the roster tables need; trait methods report a backend
//! error until wired to a database client by the integration layer. The
//! checked assignment writes are specified to run as a serializable
//! transaction around the same select-sum-insert the in-memory backend
//! performs under its write lock.

use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::core::model::{Assignment, Project, Worker};
use crate::core::store::{AssignmentStore, ProjectStore, WorkerStore};
use crate::core::RosterError;

/// Postgres store adapter placeholder.
#[derive(Default)]
pub struct PostgresStore;

impl PostgresStore {
    /// Create a new adapter.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Migration statements for the roster tables.
    #[must_use]
    pub fn migrations() -> &'static [&'static str] {
        &[r"
CREATE TABLE IF NOT EXISTS rr_workers (
    id UUID PRIMARY KEY,
    name TEXT NOT NULL,
    email TEXT NOT NULL UNIQUE,
    role TEXT NOT NULL,
    skills TEXT[] NOT NULL DEFAULT '{}',
    seniority TEXT,
    max_capacity INT NOT NULL CHECK (max_capacity BETWEEN 0 AND 100),
    department TEXT NOT NULL DEFAULT ''
);
CREATE TABLE IF NOT EXISTS rr_projects (
    id UUID PRIMARY KEY,
    name TEXT NOT NULL,
    description TEXT NOT NULL,
    start_date DATE NOT NULL,
    end_date DATE NOT NULL CHECK (end_date > start_date),
    required_skills TEXT[] NOT NULL DEFAULT '{}',
    team_size INT NOT NULL CHECK (team_size >= 1),
    status TEXT NOT NULL DEFAULT 'planning',
    manager_id UUID NOT NULL REFERENCES rr_workers (id)
);
CREATE TABLE IF NOT EXISTS rr_assignments (
    id UUID PRIMARY KEY,
    worker_id UUID NOT NULL REFERENCES rr_workers (id),
    project_id UUID NOT NULL REFERENCES rr_projects (id),
    allocation_percentage INT NOT NULL CHECK (allocation_percentage BETWEEN 1 AND 100),
    start_date DATE NOT NULL,
    end_date DATE NOT NULL CHECK (end_date > start_date),
    role TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_rr_assignments_worker_end ON rr_assignments (worker_id, end_date);
CREATE INDEX IF NOT EXISTS idx_rr_assignments_project ON rr_assignments (project_id);
"]
    }

    fn unwired<T>() -> Result<T, RosterError> {
        Err(RosterError::Backend(
            "postgres store not wired to database client".into(),
        ))
    }
}

#[async_trait]
impl WorkerStore for PostgresStore {
    async fn insert_worker(&self, _worker: Worker) -> Result<Worker, RosterError> {
        Self::unwired()
    }

    async fn worker(&self, _id: Uuid) -> Result<Option<Worker>, RosterError> {
        Self::unwired()
    }

    async fn update_worker(&self, _worker: Worker) -> Result<Worker, RosterError> {
        Self::unwired()
    }

    async fn list_engineers(&self) -> Result<Vec<Worker>, RosterError> {
        Self::unwired()
    }
}

#[async_trait]
impl ProjectStore for PostgresStore {
    async fn insert_project(&self, _project: Project) -> Result<Project, RosterError> {
        Self::unwired()
    }

    async fn project(&self, _id: Uuid) -> Result<Option<Project>, RosterError> {
        Self::unwired()
    }

    async fn update_project(&self, _project: Project) -> Result<Project, RosterError> {
        Self::unwired()
    }

    async fn list_projects(&self) -> Result<Vec<Project>, RosterError> {
        Self::unwired()
    }
}

#[async_trait]
impl AssignmentStore for PostgresStore {
    async fn assignment(&self, _id: Uuid) -> Result<Option<Assignment>, RosterError> {
        Self::unwired()
    }

    async fn list_assignments(&self) -> Result<Vec<Assignment>, RosterError> {
        Self::unwired()
    }

    async fn assignments_for_worker(
        &self,
        _worker_id: Uuid,
    ) -> Result<Vec<Assignment>, RosterError> {
        Self::unwired()
    }

    async fn active_assignments(
        &self,
        _worker_id: Uuid,
        _on: NaiveDate,
    ) -> Result<Vec<Assignment>, RosterError> {
        Self::unwired()
    }

    async fn insert_assignment_checked(
        &self,
        _assignment: Assignment,
        _on: NaiveDate,
    ) -> Result<Assignment, RosterError> {
        Self::unwired()
    }

    async fn update_assignment_checked(
        &self,
        _assignment: Assignment,
        _on: NaiveDate,
    ) -> Result<Assignment, RosterError> {
        Self::unwired()
    }

    async fn delete_assignment(&self, _id: Uuid) -> Result<bool, RosterError> {
        Self::unwired()
    }
}
