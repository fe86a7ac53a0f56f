//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Components
//!
//! - `EntityStore` - Session-owned services and work orders
//! - `ExportUseCase` - CSV export through an export sink
//! - `PhotoDraft` - Photo list of a form being edited

pub mod export;
pub mod photos;
pub mod store;

pub use export::{ExportOutcome, ExportUseCase};
pub use photos::PhotoDraft;
pub use store::EntityStore;
