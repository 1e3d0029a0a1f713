//! API-facing request/response models.
//!
//! These are the payload shapes the external HTTP endpoints deserialize into
//! and serialize out of; field names are camelCase on the wire.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::model::{EmploymentType, ProjectStatus, Seniority};

/// Payload to create an engineer. Capacity is not accepted from the caller;
/// it derives from the employment type (100 full-time, 50 half-time).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEngineer {
    /// Display name.
    pub name: String,
    /// Email, unique across workers.
    pub email: String,
    /// Seniority tier.
    pub seniority: Seniority,
    /// Skill tags; at least one required.
    pub skills: Vec<String>,
    /// Full-time or half-time.
    pub employment_type: EmploymentType,
    /// Home department.
    pub department: String,
}

/// Full-replacement payload for an engineer update.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineerUpdate {
    /// Display name.
    pub name: String,
    /// Email, unique against other workers.
    pub email: String,
    /// Seniority tier.
    pub seniority: Seniority,
    /// Skill tags; at least one required.
    pub skills: Vec<String>,
    /// Full-time or half-time; re-derives the capacity ceiling.
    pub employment_type: EmploymentType,
    /// Home department.
    pub department: String,
}

/// Payload to create a project. New projects start in `Planning`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    /// Project name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// First day.
    pub start_date: NaiveDate,
    /// Last day, strictly after the first.
    pub end_date: NaiveDate,
    /// Skill tags the project needs.
    pub required_skills: Vec<String>,
    /// Target team size, at least 1.
    pub team_size: u32,
    /// Owning manager.
    pub manager_id: Uuid,
}

/// Full-replacement payload for a project update.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectUpdate {
    /// Project name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// First day.
    pub start_date: NaiveDate,
    /// Last day, strictly after the first.
    pub end_date: NaiveDate,
    /// Skill tags the project needs.
    pub required_skills: Vec<String>,
    /// Target team size, at least 1.
    pub team_size: u32,
    /// Lifecycle status.
    pub status: ProjectStatus,
    /// Owning manager.
    pub manager_id: Uuid,
}

/// Payload to create an assignment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAssignment {
    /// The worker being committed.
    pub worker_id: Uuid,
    /// The project being staffed.
    pub project_id: Uuid,
    /// Fraction of the worker's time, 1–100.
    pub allocation_percentage: u32,
    /// First day of the commitment.
    pub start_date: NaiveDate,
    /// Last day, strictly after the first.
    pub end_date: NaiveDate,
    /// Free-text role label.
    pub role: String,
}

/// Full-replacement payload for an assignment update.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentUpdate {
    /// The worker being committed.
    pub worker_id: Uuid,
    /// The project being staffed.
    pub project_id: Uuid,
    /// Fraction of the worker's time, 1–100.
    pub allocation_percentage: u32,
    /// First day of the commitment.
    pub start_date: NaiveDate,
    /// Last day, strictly after the first.
    pub end_date: NaiveDate,
    /// Free-text role label.
    pub role: String,
}

/// Health response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Health {
    /// Healthy flag.
    pub ok: bool,
}

/// Return a health payload.
#[must_use]
pub fn health() -> Health {
    Health { ok: true }
}
