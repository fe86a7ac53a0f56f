//! Domain Layer
//!
//! This is the core of paintshop - pure business logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Core domain entities (Service, WorkOrder)
//! - `value_objects/` - Immutable value types (Status, EntityId, Photo, View)
//! - `services/` - Domain services (filtering, CSV export, analytics)
//! - `policies/` - Business rules (status transitions)
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - Clock, ids, photos and delivery go through traits

pub mod entities;
pub mod policies;
pub mod ports;
pub mod services;
pub mod value_objects;
