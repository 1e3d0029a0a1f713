//! In-memory storage backend.
//!
//! All three record maps live behind one `parking_lot::RwLock`, and the
//! checked assignment writes evaluate the capacity rule inside a single
//! write-guard acquisition. Two concurrent commits for the same worker
//! therefore serialize on the lock: the second sees the first's row in its
//! sum, which is what closes the check-then-act race a read-check plus
//! separate insert would leave open.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::NaiveDate;
use parking_lot::RwLock;
use uuid::Uuid;

use crate::core::allocator::{active_allocation, evaluate};
use crate::core::model::{Assignment, Project, Role, Worker};
use crate::core::store::{AssignmentStore, ProjectStore, WorkerStore};
use crate::core::RosterError;

#[derive(Default)]
struct Records {
    workers: HashMap<Uuid, Worker>,
    projects: HashMap<Uuid, Project>,
    assignments: HashMap<Uuid, Assignment>,
}

impl Records {
    fn email_taken(&self, email: &str, other_than: Option<Uuid>) -> bool {
        self.workers
            .values()
            .any(|w| w.email.eq_ignore_ascii_case(email) && other_than != Some(w.id))
    }

    fn active_for(&self, worker_id: Uuid, on: NaiveDate) -> Vec<Assignment> {
        self.assignments
            .values()
            .filter(|a| a.worker_id == worker_id && a.is_active_on(on))
            .cloned()
            .collect()
    }

    /// Capacity rule against the current records; `exclude` skips the edited
    /// assignment's own prior row.
    fn check_capacity(
        &self,
        worker_id: Uuid,
        candidate_pct: u32,
        on: NaiveDate,
        exclude: Option<Uuid>,
    ) -> Result<(), RosterError> {
        let worker = self
            .workers
            .get(&worker_id)
            .ok_or_else(|| RosterError::NotFound {
                entity: "worker",
                id: worker_id.to_string(),
            })?;
        let active = self.active_for(worker_id, on);
        let allocated = active_allocation(&active, on, exclude);
        evaluate(candidate_pct, allocated, worker.max_capacity)
    }
}

/// In-memory store for development and testing.
#[derive(Default)]
pub struct MemoryStore {
    records: RwLock<Records>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl WorkerStore for MemoryStore {
    async fn insert_worker(&self, worker: Worker) -> Result<Worker, RosterError> {
        let mut records = self.records.write();
        if records.email_taken(&worker.email, None) {
            return Err(RosterError::Conflict(format!(
                "email already exists: {}",
                worker.email
            )));
        }
        records.workers.insert(worker.id, worker.clone());
        Ok(worker)
    }

    async fn worker(&self, id: Uuid) -> Result<Option<Worker>, RosterError> {
        Ok(self.records.read().workers.get(&id).cloned())
    }

    async fn update_worker(&self, worker: Worker) -> Result<Worker, RosterError> {
        let mut records = self.records.write();
        if !records.workers.contains_key(&worker.id) {
            return Err(RosterError::NotFound {
                entity: "worker",
                id: worker.id.to_string(),
            });
        }
        if records.email_taken(&worker.email, Some(worker.id)) {
            return Err(RosterError::Conflict(format!(
                "email already exists: {}",
                worker.email
            )));
        }
        records.workers.insert(worker.id, worker.clone());
        Ok(worker)
    }

    async fn list_engineers(&self) -> Result<Vec<Worker>, RosterError> {
        let mut engineers: Vec<Worker> = self
            .records
            .read()
            .workers
            .values()
            .filter(|w| w.role == Role::Engineer)
            .cloned()
            .collect();
        engineers.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(engineers)
    }
}

#[async_trait]
impl ProjectStore for MemoryStore {
    async fn insert_project(&self, project: Project) -> Result<Project, RosterError> {
        self.records
            .write()
            .projects
            .insert(project.id, project.clone());
        Ok(project)
    }

    async fn project(&self, id: Uuid) -> Result<Option<Project>, RosterError> {
        Ok(self.records.read().projects.get(&id).cloned())
    }

    async fn update_project(&self, project: Project) -> Result<Project, RosterError> {
        let mut records = self.records.write();
        if !records.projects.contains_key(&project.id) {
            return Err(RosterError::NotFound {
                entity: "project",
                id: project.id.to_string(),
            });
        }
        records.projects.insert(project.id, project.clone());
        Ok(project)
    }

    async fn list_projects(&self) -> Result<Vec<Project>, RosterError> {
        let mut projects: Vec<Project> =
            self.records.read().projects.values().cloned().collect();
        projects.sort_by(|a, b| a.start_date.cmp(&b.start_date));
        Ok(projects)
    }
}

#[async_trait]
impl AssignmentStore for MemoryStore {
    async fn assignment(&self, id: Uuid) -> Result<Option<Assignment>, RosterError> {
        Ok(self.records.read().assignments.get(&id).cloned())
    }

    async fn list_assignments(&self) -> Result<Vec<Assignment>, RosterError> {
        Ok(self.records.read().assignments.values().cloned().collect())
    }

    async fn assignments_for_worker(
        &self,
        worker_id: Uuid,
    ) -> Result<Vec<Assignment>, RosterError> {
        let mut rows: Vec<Assignment> = self
            .records
            .read()
            .assignments
            .values()
            .filter(|a| a.worker_id == worker_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| a.start_date.cmp(&b.start_date));
        Ok(rows)
    }

    async fn active_assignments(
        &self,
        worker_id: Uuid,
        on: NaiveDate,
    ) -> Result<Vec<Assignment>, RosterError> {
        Ok(self.records.read().active_for(worker_id, on))
    }

    async fn insert_assignment_checked(
        &self,
        assignment: Assignment,
        on: NaiveDate,
    ) -> Result<Assignment, RosterError> {
        let mut records = self.records.write();
        records.check_capacity(
            assignment.worker_id,
            assignment.allocation_percentage,
            on,
            None,
        )?;
        records.assignments.insert(assignment.id, assignment.clone());
        Ok(assignment)
    }

    async fn update_assignment_checked(
        &self,
        assignment: Assignment,
        on: NaiveDate,
    ) -> Result<Assignment, RosterError> {
        let mut records = self.records.write();
        if !records.assignments.contains_key(&assignment.id) {
            return Err(RosterError::NotFound {
                entity: "assignment",
                id: assignment.id.to_string(),
            });
        }
        records.check_capacity(
            assignment.worker_id,
            assignment.allocation_percentage,
            on,
            Some(assignment.id),
        )?;
        records.assignments.insert(assignment.id, assignment.clone());
        Ok(assignment)
    }

    async fn delete_assignment(&self, id: Uuid) -> Result<bool, RosterError> {
        Ok(self.records.write().assignments.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::Seniority;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn engineer(email: &str, capacity: u32) -> Worker {
        Worker {
            id: Uuid::new_v4(),
            name: "Grace".into(),
            email: email.into(),
            role: Role::Engineer,
            skills: vec!["rust".into()],
            seniority: Some(Seniority::Mid),
            max_capacity: capacity,
            department: "Platform".into(),
        }
    }

    fn assignment(worker_id: Uuid, pct: u32, end: NaiveDate) -> Assignment {
        Assignment {
            id: Uuid::new_v4(),
            worker_id,
            project_id: Uuid::new_v4(),
            allocation_percentage: pct,
            start_date: date(2026, 1, 1),
            end_date: end,
            role: "Developer".into(),
        }
    }

    #[tokio::test]
    async fn duplicate_email_is_a_conflict() {
        let store = MemoryStore::new();
        store
            .insert_worker(engineer("grace@example.com", 100))
            .await
            .unwrap();
        let err = store
            .insert_worker(engineer("Grace@Example.com", 100))
            .await
            .unwrap_err();
        assert!(matches!(err, RosterError::Conflict(_)));
    }

    #[tokio::test]
    async fn checked_insert_rejects_overcommit() {
        let store = MemoryStore::new();
        let w = store
            .insert_worker(engineer("grace@example.com", 100))
            .await
            .unwrap();
        let today = date(2026, 3, 1);
        store
            .insert_assignment_checked(assignment(w.id, 60, date(2026, 12, 31)), today)
            .await
            .unwrap();
        let err = store
            .insert_assignment_checked(assignment(w.id, 50, date(2026, 12, 31)), today)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            RosterError::CapacityExceeded {
                allocated: 60,
                requested: 50,
                capacity: 100,
            }
        ));
    }

    #[tokio::test]
    async fn checked_update_excludes_own_prior_allocation() {
        let store = MemoryStore::new();
        let w = store
            .insert_worker(engineer("grace@example.com", 100))
            .await
            .unwrap();
        let today = date(2026, 3, 1);
        let a = store
            .insert_assignment_checked(assignment(w.id, 60, date(2026, 12, 31)), today)
            .await
            .unwrap();
        // Raising 60 -> 80 fits once the prior row is excluded from the sum.
        let mut edited = a.clone();
        edited.allocation_percentage = 80;
        store.update_assignment_checked(edited, today).await.unwrap();
        let active = store.active_assignments(w.id, today).await.unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].allocation_percentage, 80);
    }

    #[tokio::test]
    async fn concluded_assignments_free_capacity() {
        let store = MemoryStore::new();
        let w = store
            .insert_worker(engineer("grace@example.com", 100))
            .await
            .unwrap();
        store
            .insert_assignment_checked(
                assignment(w.id, 100, date(2026, 1, 31)),
                date(2026, 1, 1),
            )
            .await
            .unwrap();
        // After the first assignment concludes, a new full commitment fits.
        store
            .insert_assignment_checked(
                assignment(w.id, 100, date(2026, 12, 31)),
                date(2026, 2, 1),
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn worker_rows_sort_by_start_date() {
        let store = MemoryStore::new();
        let w = store
            .insert_worker(engineer("grace@example.com", 100))
            .await
            .unwrap();
        let today = date(2026, 1, 1);
        let mut late = assignment(w.id, 20, date(2026, 12, 31));
        late.start_date = date(2026, 6, 1);
        let mut early = assignment(w.id, 20, date(2026, 12, 31));
        early.start_date = date(2026, 2, 1);
        store.insert_assignment_checked(late, today).await.unwrap();
        store.insert_assignment_checked(early, today).await.unwrap();
        let rows = store.assignments_for_worker(w.id).await.unwrap();
        assert_eq!(rows[0].start_date, date(2026, 2, 1));
        assert_eq!(rows[1].start_date, date(2026, 6, 1));
    }

    #[tokio::test]
    async fn delete_reports_whether_a_row_existed() {
        let store = MemoryStore::new();
        assert!(!store.delete_assignment(Uuid::new_v4()).await.unwrap());
    }
}
