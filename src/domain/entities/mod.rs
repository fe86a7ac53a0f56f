//! Domain Entities
//!
//! Core domain entities that have identity and lifecycle.
//! - `Service` - A catalog entry of offered work
//! - `WorkOrder` - A client job tracked through its status lifecycle

mod service;
mod work_order;

pub use service::{NewService, Service};
pub use work_order::{NewWorkOrder, WorkOrder};
