//! Log Event Sink

use crate::domain::ports::{StoreEvent, StoreEventSink};

/// Event sink that reports store changes as debug log lines
#[derive(Debug, Default, Clone, Copy)]
pub struct LogEventSink;

impl StoreEventSink for LogEventSink {
    fn on_event(&self, event: &StoreEvent) {
        ::log::debug!("store event: {} {}", event.name(), event.id());
    }
}
