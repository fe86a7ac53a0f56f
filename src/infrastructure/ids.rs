//! Id generators

use std::collections::HashMap;

use chrono::Utc;

use crate::domain::ports::{EntityKind, IdGenerator};
use crate::domain::value_objects::EntityId;

/// `s-<millis>` / `wo-<millis>` ids from the wall clock
///
/// Two calls within the same millisecond get consecutive values, so
/// candidates never repeat within a session.
#[derive(Debug, Default)]
pub struct TimestampIdGenerator {
    last: i64,
}

impl TimestampIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for TimestampIdGenerator {
    fn next_id(&mut self, kind: EntityKind) -> EntityId {
        let millis = Utc::now().timestamp_millis();
        self.last = if millis > self.last { millis } else { self.last + 1 };
        EntityId::new(format!("{}-{}", kind.prefix(), self.last))
    }
}

/// `s-1`, `s-2`, … per kind; deterministic ids for tests and demos
#[derive(Debug, Default)]
pub struct SequentialIdGenerator {
    counters: HashMap<&'static str, u64>,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self, kind: EntityKind) -> EntityId {
        let counter = self.counters.entry(kind.prefix()).or_insert(0);
        *counter += 1;
        EntityId::new(format!("{}-{}", kind.prefix(), counter))
    }
}
