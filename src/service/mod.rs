//! API-facing service layer and request/response models.

pub mod api;
pub mod roster;

pub use api::{
    health, AssignmentUpdate, EngineerUpdate, Health, NewAssignment, NewEngineer, NewProject,
    ProjectUpdate,
};
pub use roster::RosterService;
