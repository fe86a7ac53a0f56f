//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod clock;
pub mod export_sink;
pub mod id_generator;
pub mod photo_reader;
pub mod store_events;

pub use clock::Clock;
pub use export_sink::ExportSink;
pub use id_generator::{EntityKind, IdGenerator};
pub use photo_reader::PhotoReader;
pub use store_events::{NoopEventSink, StoreEvent, StoreEventSink};
