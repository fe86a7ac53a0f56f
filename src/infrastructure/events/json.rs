//! JSON Event Sink
//!
//! Writes store events as NDJSON, one object per line.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::domain::ports::{StoreEvent, StoreEventSink};

/// Event sink that outputs NDJSON events
pub struct JsonEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }
}

impl StoreEventSink for JsonEventSink {
    fn on_event(&self, event: &StoreEvent) {
        let entity = match event {
            StoreEvent::ServiceAdded { .. }
            | StoreEvent::ServiceUpdated { .. }
            | StoreEvent::ServiceDeleted { .. } => "service",
            StoreEvent::WorkOrderAdded { .. } | StoreEvent::WorkOrderUpdated { .. } => {
                "work_order"
            }
        };
        let json = serde_json::json!({
            "event": event.name(),
            "entity": entity,
            "id": event.id().as_str(),
        });

        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", json);
            let _ = writer.flush();
        }
    }
}
