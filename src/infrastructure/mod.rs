//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//!
//! ## Structure
//!
//! - `clock` - system and fixed clocks
//! - `ids` - timestamp and sequential id generators
//! - `photos` - file-system photo reader
//! - `export` - file, stdout and in-memory export sinks
//! - `events` - store event sinks (log, NDJSON)

pub mod clock;
pub mod events;
pub mod export;
pub mod ids;
pub mod photos;

pub use clock::{FixedClock, SystemClock};
pub use events::{JsonEventSink, LogEventSink};
pub use export::{FileExportSink, MemoryExportSink, StdoutExportSink};
pub use ids::{SequentialIdGenerator, TimestampIdGenerator};
pub use photos::FsPhotoReader;
