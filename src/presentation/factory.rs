//! Use Case Factory
//!
//! Creates the session store and use cases with infrastructure
//! dependencies wired up.

use std::path::Path;

use crate::application::{EntityStore, ExportUseCase};
use crate::config::Config;
use crate::domain::ports::ExportSink;
use crate::infrastructure::{
    FileExportSink, JsonEventSink, LogEventSink, StdoutExportSink, SystemClock,
    TimestampIdGenerator,
};
use crate::seed;

/// Store used by a live session
pub type SessionStore = EntityStore<SystemClock, TimestampIdGenerator>;

/// Export use case whose sink is picked at runtime
pub type DynExportUseCase = ExportUseCase<Box<dyn ExportSink>>;

/// Create the session store, seeded unless disabled in `config`
///
/// Store changes are always logged; `json_events` additionally streams
/// them to stdout as NDJSON.
pub fn create_store(config: &Config, json_events: bool) -> SessionStore {
    let mut store = if config.session.seed {
        EntityStore::with_records(
            SystemClock,
            TimestampIdGenerator::new(),
            seed::services(),
            seed::work_orders(),
        )
    } else {
        EntityStore::new(SystemClock, TimestampIdGenerator::new())
    };

    store.subscribe(Box::new(LogEventSink));
    if json_events {
        store.subscribe(Box::new(JsonEventSink::stdout()));
    }
    store
}

/// Create an export use case writing into `directory`
pub fn create_export_use_case(directory: &Path) -> DynExportUseCase {
    ExportUseCase::new(Box::new(FileExportSink::new(directory)))
}

/// Create an export use case printing CSV to stdout
pub fn create_stdout_export_use_case() -> DynExportUseCase {
    ExportUseCase::new(Box::new(StdoutExportSink))
}
