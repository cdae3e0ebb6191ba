//! Domain logic for checklist aggregation and inspection status transitions

mod aggregate;
mod states;
mod template;
mod transitions;
mod validation;


pub use aggregate::{derive_status, recompute, Aggregate};
pub use states::{get_allowed_next_states, is_terminal_state, TransitionTrigger, INSPECTION_STATES};
pub use template::{builtin_template, instantiate};
pub use transitions::{
    apply_state_transition, effective_status, reconcile, resolve_major_defects, TransitionResult,
};
pub use validation::{
    can_enter_blocked, can_enter_completed, can_enter_in_progress, validate_transition,
    ValidationContext, ValidationResult,
};
