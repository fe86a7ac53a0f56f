//! IdGenerator port - hands out entity identifiers

use crate::domain::value_objects::EntityId;

/// Which collection an id is generated for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Service,
    WorkOrder,
}

impl EntityKind {
    /// Prefix used by generated ids (`s-…`, `wo-…`)
    pub fn prefix(&self) -> &'static str {
        match self {
            EntityKind::Service => "s",
            EntityKind::WorkOrder => "wo",
        }
    }
}

/// Produces candidate ids; the store rejects candidates already in use
pub trait IdGenerator {
    fn next_id(&mut self, kind: EntityKind) -> EntityId;
}
