//! Paintshop - work-order and service catalog console for finishing workshops
//!
//! Keeps a session's service catalog and work orders in memory, moves work
//! orders through their status lifecycle, filters and sorts the order list,
//! and exports tables and analytics as CSV.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;
pub mod seed;

// Re-exports for convenience
pub use application::{EntityStore, ExportOutcome, ExportUseCase, PhotoDraft};
pub use config::Config;
pub use domain::entities::{NewService, NewWorkOrder, Service, WorkOrder};
pub use domain::policies::next_work_order_state;
pub use domain::services::{filter_and_sort, to_csv, FilterCriteria, HeaderMapping, Record};
pub use domain::value_objects::{CalendarZone, EntityId, Photo, Status, View};
pub use error::{PaintshopError, PaintshopResult};
