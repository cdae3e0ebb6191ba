//! Inspection lifecycle transitions
//!
//! Pure functions that reconcile a stored inspection with a freshly
//! recomputed aggregate. Inputs are never mutated; a new Inspection is
//! returned when anything changes.

use crate::errors::{FleetError, Result};
use crate::schemas::{DefectResolution, Inspection, InspectionStatus};

use super::aggregate::Aggregate;
use super::states::TransitionTrigger;
use super::validation::{validate_transition, ValidationContext};

/// Outcome of reconciling an inspection with its checklist
#[derive(Debug, Clone, PartialEq)]
pub enum TransitionResult {
    /// Stored inspection already matches the checklist
    Unchanged,
    /// Counts changed, status did not
    Updated {
        /// The inspection with refreshed counts
        next_inspection: Inspection,
    },
    /// Status changed
    Transitioned {
        from: InspectionStatus,
        to: InspectionStatus,
        /// The inspection with refreshed counts and new status
        next_inspection: Inspection,
    },
}

impl TransitionResult {
    /// Check if anything needs to be persisted
    pub fn is_changed(&self) -> bool {
        !matches!(self, TransitionResult::Unchanged)
    }

    /// Check if the status changed
    pub fn is_transition(&self) -> bool {
        matches!(self, TransitionResult::Transitioned { .. })
    }

    /// Get the updated inspection, if any
    pub fn inspection(self) -> Option<Inspection> {
        match self {
            TransitionResult::Unchanged => None,
            TransitionResult::Updated { next_inspection }
            | TransitionResult::Transitioned { next_inspection, .. } => Some(next_inspection),
        }
    }
}

fn counts_match(inspection: &Inspection, aggregate: &Aggregate) -> bool {
    inspection.total_items == aggregate.total_items
        && inspection.completed_items == aggregate.completed_items
        && inspection.ok_count == aggregate.ok_count
        && inspection.minor_defect_count == aggregate.minor_defect_count
        && inspection.major_defect_count == aggregate.major_defect_count
}

fn with_counts(mut inspection: Inspection, aggregate: &Aggregate) -> Inspection {
    inspection.total_items = aggregate.total_items;
    inspection.completed_items = aggregate.completed_items;
    inspection.ok_count = aggregate.ok_count;
    inspection.minor_defect_count = aggregate.minor_defect_count;
    inspection.major_defect_count = aggregate.major_defect_count;
    inspection
}

/// The status the checklist calls for, honoring a recorded defect resolution.
///
/// A resolved inspection with no pending items stays COMPLETED even though
/// its major defect items still read `major_defect`.
pub fn effective_status(inspection: &Inspection, aggregate: &Aggregate) -> InspectionStatus {
    if aggregate.status == InspectionStatus::Blocked
        && inspection.defect_resolution.is_some()
        && !aggregate.has_pending()
    {
        return InspectionStatus::Completed;
    }
    aggregate.status
}

/// Apply one validated status transition.
///
/// # Errors
/// * `IllegalTransition` - If the state machine or the checklist forbids it
pub fn apply_state_transition(
    inspection: &Inspection,
    target: InspectionStatus,
    trigger: TransitionTrigger,
    ctx: &ValidationContext,
) -> Result<Inspection> {
    let validation = validate_transition(inspection.status, target, trigger, ctx);
    if !validation.valid {
        return Err(FleetError::IllegalTransition(format!(
            "inspection {}: {}",
            inspection.id,
            validation
                .reason
                .unwrap_or_else(|| "transition validation failed".to_string())
        )));
    }

    let mut next = inspection.clone().with_status(target);
    if target == InspectionStatus::Completed {
        next.completed_at = Some(next.updated_at.clone());
    }
    Ok(next)
}

/// Reconcile a stored inspection with the aggregate of its current items.
///
/// Recomputing an already-consistent inspection yields `Unchanged`.
///
/// # Errors
/// * `IllegalTransition` - If the derived status cannot be reached from the
///   stored one (leaving COMPLETED, clearing BLOCKED without an operator)
pub fn reconcile(inspection: &Inspection, aggregate: &Aggregate) -> Result<TransitionResult> {
    let target = effective_status(inspection, aggregate);

    if target == inspection.status {
        if counts_match(inspection, aggregate) {
            return Ok(TransitionResult::Unchanged);
        }
        if inspection.status == InspectionStatus::Completed {
            return Err(FleetError::IllegalTransition(format!(
                "inspection {} is COMPLETED and its checklist can no longer change",
                inspection.id
            )));
        }
        let next_inspection = with_counts(inspection.clone(), aggregate).with_status(target);
        return Ok(TransitionResult::Updated { next_inspection });
    }

    let ctx = ValidationContext::from(aggregate);
    let next = apply_state_transition(inspection, target, TransitionTrigger::Recompute, &ctx)?;

    Ok(TransitionResult::Transitioned {
        from: inspection.status,
        to: target,
        next_inspection: with_counts(next, aggregate),
    })
}

/// Close a BLOCKED inspection after an operator confirmed its major defects were repaired.
///
/// # Errors
/// * `IllegalTransition` - If the inspection is not BLOCKED, items are still
///   pending, or there is no major defect to resolve
pub fn resolve_major_defects(
    inspection: &Inspection,
    aggregate: &Aggregate,
    resolved_by: &str,
    notes: Option<String>,
) -> Result<Inspection> {
    let ctx = ValidationContext::from(aggregate);
    let next = apply_state_transition(
        inspection,
        InspectionStatus::Completed,
        TransitionTrigger::DefectResolution,
        &ctx,
    )?;

    let resolution = DefectResolution {
        resolved_by: resolved_by.to_string(),
        resolved_at: next.updated_at.clone(),
        notes,
    };

    let mut next = with_counts(next, aggregate);
    next.defect_resolution = Some(resolution);
    Ok(next)
}
