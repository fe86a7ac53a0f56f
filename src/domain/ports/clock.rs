//! Clock port - source of "now" for timestamps

use chrono::{DateTime, Utc};

/// Supplies the current time to the store and transition logic
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}
