//! The capacity-allocation rule.
//!
//! A worker's active allocations must never sum past their maximum capacity.
//! The decision itself is a pure function over a snapshot
//! ([`evaluate`]); [`CapacityAllocator`] wraps it with the persistence reads
//! the rule needs. The allocator holds no lock across its read and the
//! caller's subsequent write, so its verdict is advisory: use it for
//! capacity reports and form pre-validation, and commit through the store's
//! checked write path, which runs the same rule atomically.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::model::Assignment;
use crate::core::store::{AssignmentStore, WorkerStore};
use crate::core::RosterError;

/// Capacity usage snapshot for one worker at a reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapacityReport {
    /// The worker's capacity ceiling.
    pub max_capacity: u32,
    /// Sum of active allocation percentages.
    pub allocated: u32,
    /// Remaining headroom (`max_capacity - allocated`, floored at zero).
    pub available: u32,
}

/// Sum the allocation percentages of assignments active on `on`, skipping
/// the assignment identified by `exclude` when given.
///
/// The exclusion exists for updates: recomputing the sum with the edited
/// assignment's own prior record still in it would double-count that record
/// and spuriously reject capacity-neutral edits.
#[must_use]
pub fn active_allocation(
    assignments: &[Assignment],
    on: NaiveDate,
    exclude: Option<Uuid>,
) -> u32 {
    assignments
        .iter()
        .filter(|a| a.is_active_on(on))
        .filter(|a| exclude != Some(a.id))
        .map(|a| a.allocation_percentage)
        .sum()
}

/// Decide whether a candidate allocation may be committed.
///
/// Accepts an exact fit (`allocated + candidate == capacity`); one unit over
/// is rejected.
///
/// # Errors
///
/// [`RosterError::InvalidInput`] when the candidate percentage is outside
/// 1–100, [`RosterError::CapacityExceeded`] (carrying the computed sum and
/// the ceiling) when the commit would overshoot.
pub fn evaluate(candidate: u32, allocated: u32, capacity: u32) -> Result<(), RosterError> {
    if candidate == 0 || candidate > 100 {
        return Err(RosterError::InvalidInput(format!(
            "allocation percentage must be 1-100, got {candidate}"
        )));
    }
    if allocated + candidate > capacity {
        return Err(RosterError::CapacityExceeded {
            allocated,
            requested: candidate,
            capacity,
        });
    }
    Ok(())
}

/// Advisory capacity checks over a storage backend.
pub struct CapacityAllocator<S: ?Sized> {
    store: Arc<S>,
}

impl<S: ?Sized> Clone for CapacityAllocator<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S> CapacityAllocator<S>
where
    S: WorkerStore + AssignmentStore + ?Sized,
{
    /// Create an allocator over a store.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Check whether `candidate_pct` fits the worker's remaining capacity on
    /// `on`, skipping `exclude` (the edited assignment's own id) from the
    /// sum when given.
    ///
    /// # Errors
    ///
    /// [`RosterError::InvalidInput`] for an out-of-range percentage,
    /// [`RosterError::NotFound`] for an unknown worker, and
    /// [`RosterError::CapacityExceeded`] when the candidate does not fit.
    pub async fn check_allocation(
        &self,
        worker_id: Uuid,
        candidate_pct: u32,
        on: NaiveDate,
        exclude: Option<Uuid>,
    ) -> Result<(), RosterError> {
        if candidate_pct == 0 || candidate_pct > 100 {
            return Err(RosterError::InvalidInput(format!(
                "allocation percentage must be 1-100, got {candidate_pct}"
            )));
        }
        let worker = self
            .store
            .worker(worker_id)
            .await?
            .ok_or_else(|| RosterError::NotFound {
                entity: "worker",
                id: worker_id.to_string(),
            })?;
        let active = self.store.active_assignments(worker_id, on).await?;
        let allocated = active_allocation(&active, on, exclude);
        let verdict = evaluate(candidate_pct, allocated, worker.max_capacity);
        match &verdict {
            Ok(()) => tracing::debug!(
                %worker_id,
                candidate_pct,
                allocated,
                capacity = worker.max_capacity,
                "allocation fits"
            ),
            Err(e) => tracing::info!(%worker_id, candidate_pct, "allocation rejected: {e}"),
        }
        verdict
    }

    /// Capacity report for one worker on `on`: ceiling, allocated sum, and
    /// remaining headroom.
    ///
    /// # Errors
    ///
    /// [`RosterError::NotFound`] for an unknown worker.
    pub async fn capacity_report(
        &self,
        worker_id: Uuid,
        on: NaiveDate,
    ) -> Result<CapacityReport, RosterError> {
        let worker = self
            .store
            .worker(worker_id)
            .await?
            .ok_or_else(|| RosterError::NotFound {
                entity: "worker",
                id: worker_id.to_string(),
            })?;
        let active = self.store.active_assignments(worker_id, on).await?;
        let allocated = active_allocation(&active, on, None);
        Ok(CapacityReport {
            max_capacity: worker.max_capacity,
            allocated,
            available: worker.max_capacity.saturating_sub(allocated),
        })
    }
}
