//! Validation rules for inspection status transitions

use crate::schemas::InspectionStatus;

use super::aggregate::Aggregate;
use super::states::{get_allowed_next_states, TransitionTrigger};

/// Checklist facts required for validating a transition
#[derive(Debug, Clone, Default)]
pub struct ValidationContext {
    /// Items with a terminal status
    pub completed_items: u32,

    /// Items still pending
    pub pending_items: u32,

    /// Items with a major defect
    pub major_defects: u32,
}

impl From<&Aggregate> for ValidationContext {
    fn from(aggregate: &Aggregate) -> Self {
        ValidationContext {
            completed_items: aggregate.completed_items,
            pending_items: aggregate.total_items - aggregate.completed_items,
            major_defects: aggregate.major_defect_count,
        }
    }
}

/// Result of a validation check
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether the validation passed
    pub valid: bool,

    /// Reason for failure (if valid is false)
    pub reason: Option<String>,
}

impl ValidationResult {
    /// Create a successful validation result
    pub fn success() -> Self {
        ValidationResult {
            valid: true,
            reason: None,
        }
    }

    /// Create a failed validation result
    pub fn failure(reason: impl Into<String>) -> Self {
        ValidationResult {
            valid: false,
            reason: Some(reason.into()),
        }
    }
}

/// Validate entering IN_PROGRESS
pub fn can_enter_in_progress(ctx: &ValidationContext) -> ValidationResult {
    if ctx.completed_items == 0 {
        return ValidationResult::failure("no checklist item has been inspected");
    }
    if ctx.pending_items == 0 {
        return ValidationResult::failure("no checklist item is pending");
    }
    if ctx.major_defects > 0 {
        return ValidationResult::failure("a major defect is outstanding");
    }
    ValidationResult::success()
}

/// Validate entering BLOCKED
pub fn can_enter_blocked(ctx: &ValidationContext) -> ValidationResult {
    if ctx.major_defects == 0 {
        return ValidationResult::failure("no major defect recorded");
    }
    ValidationResult::success()
}

/// Validate entering COMPLETED.
///
/// Pending items always prevent closure. Major defects prevent it unless
/// the transition is an operator defect resolution.
pub fn can_enter_completed(ctx: &ValidationContext, trigger: TransitionTrigger) -> ValidationResult {
    if ctx.pending_items > 0 {
        return ValidationResult::failure(format!(
            "{} checklist item(s) still pending",
            ctx.pending_items
        ));
    }
    match trigger {
        TransitionTrigger::Recompute if ctx.major_defects > 0 => ValidationResult::failure(
            "major defects must be resolved by an operator before completion",
        ),
        TransitionTrigger::DefectResolution if ctx.major_defects == 0 => {
            ValidationResult::failure("no major defect to resolve")
        }
        _ => ValidationResult::success(),
    }
}

/// Validate a status transition
pub fn validate_transition(
    current: InspectionStatus,
    target: InspectionStatus,
    trigger: TransitionTrigger,
    ctx: &ValidationContext,
) -> ValidationResult {
    let allowed = get_allowed_next_states(current, trigger);
    if !allowed.contains(&target) {
        return ValidationResult::failure(format!(
            "cannot transition from {} to {}",
            current, target
        ));
    }

    match target {
        InspectionStatus::InProgress => can_enter_in_progress(ctx),
        InspectionStatus::Blocked => can_enter_blocked(ctx),
        InspectionStatus::Completed => can_enter_completed(ctx, trigger),
        InspectionStatus::Draft => ValidationResult::failure("cannot transition to DRAFT"),
    }
}
