//! Status Transition Policy
//!
//! Rules for moving a work order through its lifecycle:
//!
//! ```text
//! Pending ──▶ InProgress ──▶ Completed
//!    │             │
//!    └──────┬──────┘
//!           ▼
//!        Canceled
//! ```
//!
//! The transition function is pure; callers hand its result to the store.

use chrono::{DateTime, Utc};

use crate::domain::entities::WorkOrder;
use crate::domain::value_objects::Status;

/// Apply `target` to `order`, stamping lifecycle timestamps
///
/// - InProgress sets `started_at` only when it is still unset.
/// - Completed always sets `completed_at` to `now`.
/// - Canceled stamps nothing; an earlier `started_at` is kept.
pub fn next_work_order_state(order: &WorkOrder, target: Status, now: DateTime<Utc>) -> WorkOrder {
    let mut next = order.clone();
    next.status = target;
    match target {
        Status::InProgress if next.started_at.is_none() => next.started_at = Some(now),
        Status::Completed => next.completed_at = Some(now),
        _ => {}
    }
    next
}

/// Statuses reachable from `status` through the quick-action buttons
pub fn quick_actions(status: Status) -> &'static [Status] {
    match status {
        Status::Pending => &[Status::InProgress, Status::Canceled],
        Status::InProgress => &[Status::Completed, Status::Canceled],
        Status::Completed | Status::Canceled => &[],
    }
}

/// Button label for a quick action leading to `target`
///
/// No quick action leads back to Pending.
pub fn quick_action_label(target: Status) -> Option<&'static str> {
    match target {
        Status::InProgress => Some("Iniciar Serviço"),
        Status::Completed => Some("Concluir Serviço"),
        Status::Canceled => Some("Cancelar Serviço"),
        Status::Pending => None,
    }
}

/// Returns true if `target` is offered as a quick action from `from`
pub fn is_quick_action(from: Status, target: Status) -> bool {
    quick_actions(from).contains(&target)
}
