//! Inspection state machine definitions
//!
//! The state machine follows DRAFT → IN_PROGRESS → COMPLETED. A major defect
//! moves the inspection to BLOCKED, which only operator defect resolution
//! leaves. Nothing leaves COMPLETED.

use crate::schemas::InspectionStatus;

/// What caused a transition to be attempted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionTrigger {
    /// Re-derivation after a checklist item changed
    Recompute,
    /// Operator confirmed that the major defects were repaired
    DefectResolution,
}

/// All inspection states, in progression order.
pub const INSPECTION_STATES: &[InspectionStatus] = &[
    InspectionStatus::Draft,
    InspectionStatus::InProgress,
    InspectionStatus::Blocked,
    InspectionStatus::Completed,
];

/// Returns the states reachable from `current` for the given trigger.
///
/// Staying in the same state is not a transition and is never listed.
pub fn get_allowed_next_states(
    current: InspectionStatus,
    trigger: TransitionTrigger,
) -> Vec<InspectionStatus> {
    use crate::schemas::InspectionStatus::*;

    match (current, trigger) {
        (Draft, TransitionTrigger::Recompute) => vec![InProgress, Blocked, Completed],
        (InProgress, TransitionTrigger::Recompute) => vec![Blocked, Completed],
        (Blocked, TransitionTrigger::DefectResolution) => vec![Completed],
        _ => vec![],
    }
}

/// Check if a state is terminal (no transition leaves it).
pub fn is_terminal_state(state: InspectionStatus) -> bool {
    state == InspectionStatus::Completed
}
