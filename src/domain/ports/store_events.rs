//! Store Event Port
//!
//! Change notifications published by the entity store. The presentation
//! layer subscribes to re-derive its views after every mutation.

use crate::domain::value_objects::EntityId;

/// Event emitted after a store mutation took effect
///
/// No-op mutations (unknown id) emit nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    ServiceAdded { id: EntityId },
    ServiceUpdated { id: EntityId },
    ServiceDeleted { id: EntityId },
    WorkOrderAdded { id: EntityId },
    WorkOrderUpdated { id: EntityId },
}

impl StoreEvent {
    /// Short event name used by log and JSON sinks
    pub fn name(&self) -> &'static str {
        match self {
            StoreEvent::ServiceAdded { .. } => "service_added",
            StoreEvent::ServiceUpdated { .. } => "service_updated",
            StoreEvent::ServiceDeleted { .. } => "service_deleted",
            StoreEvent::WorkOrderAdded { .. } => "work_order_added",
            StoreEvent::WorkOrderUpdated { .. } => "work_order_updated",
        }
    }

    /// Id of the entity the event is about
    pub fn id(&self) -> &EntityId {
        match self {
            StoreEvent::ServiceAdded { id }
            | StoreEvent::ServiceUpdated { id }
            | StoreEvent::ServiceDeleted { id }
            | StoreEvent::WorkOrderAdded { id }
            | StoreEvent::WorkOrderUpdated { id } => id,
        }
    }
}

/// Trait for receiving store events
///
/// Implementations can be:
/// - LogEventSink: debug log lines
/// - JsonEventSink: NDJSON event stream
/// - NoopEventSink: Silent operation
/// - any `Fn(&StoreEvent)` closure
pub trait StoreEventSink {
    fn on_event(&self, event: &StoreEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl StoreEventSink for NoopEventSink {
    fn on_event(&self, _event: &StoreEvent) {}
}

impl<F> StoreEventSink for F
where
    F: Fn(&StoreEvent),
{
    fn on_event(&self, event: &StoreEvent) {
        self(event)
    }
}
