//! Roster data model: workers, projects, and assignments.
//!
//! Wire shapes use camelCase field names, matching the persisted document
//! shape consumed and produced by the external endpoints
//! (`{ workerId, projectId, allocationPercentage, startDate, endDate, role }`).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::RosterError;

/// Staff role. Managers own projects; engineers carry allocation capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Assignable staff member with bounded capacity.
    Engineer,
    /// Project owner; holds no allocation capacity.
    Manager,
}

/// Seniority tier, meaningful for engineers only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Seniority {
    /// Early-career engineer.
    Junior,
    /// Mid-level engineer.
    Mid,
    /// Senior engineer.
    Senior,
}

/// Employment type, which fixes an engineer's maximum capacity at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmploymentType {
    /// Full-time: 100% capacity.
    FullTime,
    /// Half-time: 50% capacity.
    HalfTime,
}

impl EmploymentType {
    /// The capacity ceiling implied by this employment type.
    #[must_use]
    pub const fn max_capacity(self) -> u32 {
        match self {
            Self::FullTime => 100,
            Self::HalfTime => 50,
        }
    }
}

/// Project lifecycle status: `Planning` → `Active` → `Completed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    /// Not yet started.
    Planning,
    /// In flight.
    Active,
    /// Finished.
    Completed,
}

/// A staff member who can be assigned to projects.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Worker {
    /// Unique identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Email, unique across all workers.
    pub email: String,
    /// Staff role.
    pub role: Role,
    /// Skill tags. An engineer must have at least one.
    pub skills: Vec<String>,
    /// Seniority tier; required for engineers, absent for managers.
    pub seniority: Option<Seniority>,
    /// Maximum allocation capacity as a percentage. The schema allows any
    /// value 0–100 but validation holds engineers to exactly 100 or 50.
    pub max_capacity: u32,
    /// Home department. An engineer must have a non-empty one.
    pub department: String,
}

impl Worker {
    /// Validate the worker's role-dependent invariants.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::InvalidInput`] when an engineer has no skills,
    /// an empty department, a missing seniority tier, or a capacity other
    /// than 100 (full-time) or 50 (half-time).
    pub fn validate(&self) -> Result<(), RosterError> {
        if self.max_capacity > 100 {
            return Err(RosterError::InvalidInput(format!(
                "max capacity must be 0-100, got {}",
                self.max_capacity
            )));
        }
        match self.role {
            Role::Engineer => {
                if self.skills.is_empty() {
                    return Err(RosterError::InvalidInput(
                        "engineer must have at least one skill".into(),
                    ));
                }
                if self.department.trim().is_empty() {
                    return Err(RosterError::InvalidInput(
                        "engineer must have a department".into(),
                    ));
                }
                if self.seniority.is_none() {
                    return Err(RosterError::InvalidInput(
                        "engineer must have a seniority tier".into(),
                    ));
                }
                if self.max_capacity != 100 && self.max_capacity != 50 {
                    return Err(RosterError::InvalidInput(
                        "engineer capacity must be either 100 (full-time) or 50 (part-time)"
                            .into(),
                    ));
                }
            }
            Role::Manager => {}
        }
        Ok(())
    }

    /// Whether any of the worker's skills appears in `required`.
    #[must_use]
    pub fn has_any_skill(&self, required: &[String]) -> bool {
        self.skills.iter().any(|s| required.contains(s))
    }
}

/// A project owned by a manager, staffed via assignments.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Unique identifier.
    pub id: Uuid,
    /// Project name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// First day of the project.
    pub start_date: NaiveDate,
    /// Last day of the project; strictly after `start_date`.
    pub end_date: NaiveDate,
    /// Skill tags the project needs on its team.
    pub required_skills: Vec<String>,
    /// Target team size, at least 1.
    pub team_size: u32,
    /// Lifecycle status.
    pub status: ProjectStatus,
    /// Owning manager.
    pub manager_id: Uuid,
}

impl Project {
    /// Validate date ordering and team size.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::InvalidInput`] when the end date is not after
    /// the start date or the team size is zero.
    pub fn validate(&self) -> Result<(), RosterError> {
        if self.end_date <= self.start_date {
            return Err(RosterError::InvalidInput(
                "end date must be after start date".into(),
            ));
        }
        if self.team_size == 0 {
            return Err(RosterError::InvalidInput(
                "team size must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// A time-bounded commitment of one worker to one project.
///
/// Assignments have no lifecycle field of their own; "active" is derived at
/// query time by comparing the reference date against the date range. The
/// model places no uniqueness constraint on the (worker, project) pair, so
/// overlapping duplicates are representable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    /// Unique identifier.
    pub id: Uuid,
    /// The assigned worker.
    pub worker_id: Uuid,
    /// The project being staffed.
    pub project_id: Uuid,
    /// Fraction of the worker's time committed, 1–100.
    pub allocation_percentage: u32,
    /// First day of the commitment.
    pub start_date: NaiveDate,
    /// Last day of the commitment; strictly after `start_date`.
    pub end_date: NaiveDate,
    /// Free-text role label (e.g. "Tech Lead").
    pub role: String,
}

impl Assignment {
    /// Validate the allocation percentage and date ordering.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::InvalidInput`] when the percentage is outside
    /// 1–100 (zero is rejected as meaningless) or the end date is not after
    /// the start date.
    pub fn validate(&self) -> Result<(), RosterError> {
        if self.allocation_percentage == 0 || self.allocation_percentage > 100 {
            return Err(RosterError::InvalidInput(format!(
                "allocation percentage must be 1-100, got {}",
                self.allocation_percentage
            )));
        }
        if self.end_date <= self.start_date {
            return Err(RosterError::InvalidInput(
                "end date must be after start date".into(),
            ));
        }
        Ok(())
    }

    /// Whether this assignment still consumes capacity on the given date.
    ///
    /// An assignment counts as active through its entire remaining future,
    /// including date ranges that have not yet started. This reserves
    /// capacity ahead of time and is the documented policy, not an accident
    /// of filtering.
    #[must_use]
    pub fn is_active_on(&self, on: NaiveDate) -> bool {
        self.end_date >= on
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn engineer() -> Worker {
        Worker {
            id: Uuid::new_v4(),
            name: "Ada".into(),
            email: "ada@example.com".into(),
            role: Role::Engineer,
            skills: vec!["rust".into()],
            seniority: Some(Seniority::Senior),
            max_capacity: 100,
            department: "Platform".into(),
        }
    }

    fn assignment() -> Assignment {
        Assignment {
            id: Uuid::new_v4(),
            worker_id: Uuid::new_v4(),
            project_id: Uuid::new_v4(),
            allocation_percentage: 60,
            start_date: date(2026, 1, 1),
            end_date: date(2026, 6, 30),
            role: "Developer".into(),
        }
    }

    #[test]
    fn engineer_without_skills_is_invalid() {
        let mut w = engineer();
        w.skills.clear();
        assert!(w.validate().is_err());
    }

    #[test]
    fn engineer_with_odd_capacity_is_invalid() {
        let mut w = engineer();
        w.max_capacity = 75;
        assert!(w.validate().is_err());
    }

    #[test]
    fn half_time_engineer_is_valid() {
        let mut w = engineer();
        w.max_capacity = 50;
        assert!(w.validate().is_ok());
    }

    #[test]
    fn manager_needs_no_engineer_fields() {
        let w = Worker {
            role: Role::Manager,
            skills: Vec::new(),
            seniority: None,
            max_capacity: 0,
            department: String::new(),
            ..engineer()
        };
        assert!(w.validate().is_ok());
    }

    #[test]
    fn zero_allocation_is_rejected() {
        let mut a = assignment();
        a.allocation_percentage = 0;
        assert!(a.validate().is_err());
    }

    #[test]
    fn inverted_dates_are_rejected() {
        let mut a = assignment();
        a.end_date = a.start_date;
        assert!(a.validate().is_err());
    }

    #[test]
    fn active_window_is_inclusive_of_end_date() {
        let a = assignment();
        assert!(a.is_active_on(date(2026, 6, 30)));
        assert!(!a.is_active_on(date(2026, 7, 1)));
        // Not-yet-started assignments still count as active.
        assert!(a.is_active_on(date(2025, 12, 1)));
    }

    #[test]
    fn wire_shape_uses_camel_case() {
        let a = assignment();
        let json = serde_json::to_value(&a).unwrap();
        assert!(json.get("workerId").is_some());
        assert!(json.get("allocationPercentage").is_some());
        assert!(json.get("startDate").is_some());
    }

    #[test]
    fn employment_type_fixes_capacity() {
        assert_eq!(EmploymentType::FullTime.max_capacity(), 100);
        assert_eq!(EmploymentType::HalfTime.max_capacity(), 50);
    }
}
