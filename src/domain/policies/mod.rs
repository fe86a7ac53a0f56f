//! Domain Policies
//!
//! Business rules and policies that govern behavior.
//! These are pure functions that operate on domain entities.

mod status_transition;

pub use status_transition::{
    is_quick_action, next_work_order_state, quick_action_label, quick_actions,
};
