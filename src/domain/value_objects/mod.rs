//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod calendar_zone;
mod entity_id;
mod photo;
mod status;
mod view;

pub use calendar_zone::CalendarZone;
pub use entity_id::EntityId;
pub use photo::{mime_for_extension, Photo};
pub use status::Status;
pub use view::View;
