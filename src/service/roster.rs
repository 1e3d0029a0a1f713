//! Roster orchestration: the operations the external endpoints call into.
//!
//! Each method maps to one endpoint of the surrounding HTTP layer. Methods
//! that apply the capacity rule take an explicit reference date; request
//! handlers pass [`crate::util::clock::today_utc`], tests pass fixed dates.

use std::sync::Arc;

use chrono::NaiveDate;
use parking_lot::Mutex;
use uuid::Uuid;

use crate::core::allocator::{CapacityAllocator, CapacityReport};
use crate::core::audit::{build_audit_event, AuditSink};
use crate::core::model::{Assignment, Project, ProjectStatus, Role, Worker};
use crate::core::store::RosterStore;
use crate::core::RosterError;
use crate::service::api::{
    AssignmentUpdate, EngineerUpdate, NewAssignment, NewEngineer, NewProject, ProjectUpdate,
};
use crate::util::clock::now_ms;

/// Service facade over a storage backend.
pub struct RosterService<S: ?Sized> {
    store: Arc<S>,
    allocator: CapacityAllocator<S>,
    audit: Option<Arc<Mutex<Box<dyn AuditSink>>>>,
}

impl<S> RosterService<S>
where
    S: RosterStore + ?Sized,
{
    /// Create a service over a store.
    pub fn new(store: Arc<S>) -> Self {
        let allocator = CapacityAllocator::new(Arc::clone(&store));
        Self {
            store,
            allocator,
            audit: None,
        }
    }

    /// Attach an audit sink recording allocation decisions.
    #[must_use]
    pub fn with_audit(mut self, audit: Box<dyn AuditSink>) -> Self {
        self.audit = Some(Arc::new(Mutex::new(audit)));
        self
    }

    fn record_audit(
        &self,
        worker_id: Uuid,
        assignment_id: Uuid,
        action: &str,
        detail: Option<String>,
    ) {
        if let Some(audit_sink) = &self.audit {
            let mut sink = audit_sink.lock();
            sink.record(build_audit_event(
                format!("{assignment_id}-{action}-{}", now_ms()),
                worker_id.to_string(),
                assignment_id.to_string(),
                action,
                detail,
            ));
        }
    }

    // --- Engineers -------------------------------------------------------

    /// List all engineers.
    ///
    /// # Errors
    ///
    /// Propagates backend failures.
    pub async fn list_engineers(&self) -> Result<Vec<Worker>, RosterError> {
        self.store.list_engineers().await
    }

    /// Create an engineer. The capacity ceiling derives from the employment
    /// type; a duplicate email is a conflict.
    ///
    /// # Errors
    ///
    /// [`RosterError::InvalidInput`] for a worker violating the engineer
    /// invariants, [`RosterError::Conflict`] for a taken email.
    pub async fn create_engineer(&self, req: NewEngineer) -> Result<Worker, RosterError> {
        let worker = Worker {
            id: Uuid::new_v4(),
            name: req.name,
            email: req.email,
            role: Role::Engineer,
            skills: req.skills,
            seniority: Some(req.seniority),
            max_capacity: req.employment_type.max_capacity(),
            department: req.department,
        };
        worker.validate()?;
        let worker = self.store.insert_worker(worker).await?;
        tracing::info!(worker_id = %worker.id, "engineer created");
        Ok(worker)
    }

    /// Replace an engineer record. Email uniqueness is checked against other
    /// workers; the capacity ceiling re-derives from the employment type.
    ///
    /// # Errors
    ///
    /// [`RosterError::NotFound`] for an unknown id, plus the creation errors.
    pub async fn update_engineer(
        &self,
        id: Uuid,
        req: EngineerUpdate,
    ) -> Result<Worker, RosterError> {
        let existing = self
            .store
            .worker(id)
            .await?
            .ok_or_else(|| RosterError::NotFound {
                entity: "worker",
                id: id.to_string(),
            })?;
        let worker = Worker {
            id,
            name: req.name,
            email: req.email,
            role: existing.role,
            skills: req.skills,
            seniority: Some(req.seniority),
            max_capacity: req.employment_type.max_capacity(),
            department: req.department,
        };
        worker.validate()?;
        self.store.update_worker(worker).await
    }

    /// Capacity report for an engineer on a reference date.
    ///
    /// # Errors
    ///
    /// [`RosterError::NotFound`] for an unknown worker.
    pub async fn engineer_capacity(
        &self,
        id: Uuid,
        on: NaiveDate,
    ) -> Result<CapacityReport, RosterError> {
        self.allocator.capacity_report(id, on).await
    }

    /// Advisory capacity pre-check, e.g. for form validation. The verdict
    /// holds no lock; committing re-runs the rule through the guarded path.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`CapacityAllocator::check_allocation`].
    pub async fn check_allocation(
        &self,
        worker_id: Uuid,
        candidate_pct: u32,
        on: NaiveDate,
    ) -> Result<(), RosterError> {
        self.allocator
            .check_allocation(worker_id, candidate_pct, on, None)
            .await
    }

    // --- Projects --------------------------------------------------------

    /// List all projects.
    ///
    /// # Errors
    ///
    /// Propagates backend failures.
    pub async fn list_projects(&self) -> Result<Vec<Project>, RosterError> {
        self.store.list_projects().await
    }

    /// Create a project in the `Planning` state.
    ///
    /// # Errors
    ///
    /// [`RosterError::InvalidInput`] for bad dates or a zero team size.
    pub async fn create_project(&self, req: NewProject) -> Result<Project, RosterError> {
        let project = Project {
            id: Uuid::new_v4(),
            name: req.name,
            description: req.description,
            start_date: req.start_date,
            end_date: req.end_date,
            required_skills: req.required_skills,
            team_size: req.team_size,
            status: ProjectStatus::Planning,
            manager_id: req.manager_id,
        };
        project.validate()?;
        let project = self.store.insert_project(project).await?;
        tracing::info!(project_id = %project.id, "project created");
        Ok(project)
    }

    /// Fetch a project by id.
    ///
    /// # Errors
    ///
    /// [`RosterError::NotFound`] for an unknown id.
    pub async fn get_project(&self, id: Uuid) -> Result<Project, RosterError> {
        self.store
            .project(id)
            .await?
            .ok_or_else(|| RosterError::NotFound {
                entity: "project",
                id: id.to_string(),
            })
    }

    /// Replace a project record, re-validated.
    ///
    /// # Errors
    ///
    /// [`RosterError::NotFound`] for an unknown id, plus validation errors.
    pub async fn update_project(
        &self,
        id: Uuid,
        req: ProjectUpdate,
    ) -> Result<Project, RosterError> {
        let project = Project {
            id,
            name: req.name,
            description: req.description,
            start_date: req.start_date,
            end_date: req.end_date,
            required_skills: req.required_skills,
            team_size: req.team_size,
            status: req.status,
            manager_id: req.manager_id,
        };
        project.validate()?;
        self.store.update_project(project).await
    }

    /// Engineers whose skill set intersects the project's required skills.
    ///
    /// # Errors
    ///
    /// [`RosterError::NotFound`] for an unknown project.
    pub async fn suitable_engineers(&self, project_id: Uuid) -> Result<Vec<Worker>, RosterError> {
        let project = self.get_project(project_id).await?;
        let engineers = self.store.list_engineers().await?;
        Ok(engineers
            .into_iter()
            .filter(|w| w.has_any_skill(&project.required_skills))
            .collect())
    }

    // --- Assignments -----------------------------------------------------

    /// List all assignments.
    ///
    /// # Errors
    ///
    /// Propagates backend failures.
    pub async fn list_assignments(&self) -> Result<Vec<Assignment>, RosterError> {
        self.store.list_assignments().await
    }

    /// One engineer's assignments, sorted by start date.
    ///
    /// # Errors
    ///
    /// Propagates backend failures.
    pub async fn assignments_for_engineer(
        &self,
        worker_id: Uuid,
    ) -> Result<Vec<Assignment>, RosterError> {
        self.store.assignments_for_worker(worker_id).await
    }

    /// Create an assignment through the guarded commit path.
    ///
    /// # Errors
    ///
    /// [`RosterError::InvalidInput`] for a bad percentage or date order,
    /// [`RosterError::NotFound`] for an unknown worker, and
    /// [`RosterError::CapacityExceeded`] (carrying the computed sum and the
    /// ceiling) when the commit would overshoot.
    pub async fn create_assignment(
        &self,
        req: NewAssignment,
        on: NaiveDate,
    ) -> Result<Assignment, RosterError> {
        let assignment = Assignment {
            id: Uuid::new_v4(),
            worker_id: req.worker_id,
            project_id: req.project_id,
            allocation_percentage: req.allocation_percentage,
            start_date: req.start_date,
            end_date: req.end_date,
            role: req.role,
        };
        assignment.validate()?;
        match self.store.insert_assignment_checked(assignment, on).await {
            Ok(committed) => {
                tracing::info!(
                    assignment_id = %committed.id,
                    worker_id = %committed.worker_id,
                    pct = committed.allocation_percentage,
                    "assignment committed"
                );
                self.record_audit(committed.worker_id, committed.id, "commit", None);
                Ok(committed)
            }
            Err(e) => {
                if let RosterError::CapacityExceeded { .. } = &e {
                    self.record_audit(req.worker_id, Uuid::nil(), "reject", Some(e.to_string()));
                }
                Err(e)
            }
        }
    }

    /// Replace an assignment through the guarded commit path. The
    /// assignment's own prior record is excluded from the capacity sum, so a
    /// capacity-neutral edit never rejects itself.
    ///
    /// # Errors
    ///
    /// [`RosterError::NotFound`] for an unknown assignment or worker, plus
    /// the creation errors.
    pub async fn update_assignment(
        &self,
        id: Uuid,
        req: AssignmentUpdate,
        on: NaiveDate,
    ) -> Result<Assignment, RosterError> {
        let assignment = Assignment {
            id,
            worker_id: req.worker_id,
            project_id: req.project_id,
            allocation_percentage: req.allocation_percentage,
            start_date: req.start_date,
            end_date: req.end_date,
            role: req.role,
        };
        assignment.validate()?;
        match self.store.update_assignment_checked(assignment, on).await {
            Ok(committed) => {
                self.record_audit(committed.worker_id, committed.id, "update", None);
                Ok(committed)
            }
            Err(e) => {
                if let RosterError::CapacityExceeded { .. } = &e {
                    self.record_audit(req.worker_id, id, "reject", Some(e.to_string()));
                }
                Err(e)
            }
        }
    }

    /// Delete an assignment.
    ///
    /// # Errors
    ///
    /// [`RosterError::NotFound`] for an unknown id.
    pub async fn delete_assignment(&self, id: Uuid) -> Result<(), RosterError> {
        let existing = self
            .store
            .assignment(id)
            .await?
            .ok_or_else(|| RosterError::NotFound {
                entity: "assignment",
                id: id.to_string(),
            })?;
        if self.store.delete_assignment(id).await? {
            self.record_audit(existing.worker_id, id, "delete", None);
            tracing::info!(assignment_id = %id, "assignment deleted");
            Ok(())
        } else {
            Err(RosterError::NotFound {
                entity: "assignment",
                id: id.to_string(),
            })
        }
    }
}
