//! Calendar zone - where a creation instant falls on the user's calendar
//!
//! Timestamps are stored in UTC. Date filters, list columns and CSV dates
//! read them as wall-clock days of this zone.

use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, Offset, Utc};

/// Time zone used to turn instants into calendar days
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CalendarZone {
    /// The machine's local zone, daylight saving included
    #[default]
    Local,
    /// A fixed UTC offset
    Fixed(FixedOffset),
}

impl CalendarZone {
    pub fn utc() -> Self {
        CalendarZone::Fixed(Utc.fix())
    }

    /// Wall-clock time of `at` in this zone
    pub fn local_time(&self, at: DateTime<Utc>) -> NaiveDateTime {
        match self {
            CalendarZone::Local => at.with_timezone(&Local).naive_local(),
            CalendarZone::Fixed(offset) => at.with_timezone(offset).naive_local(),
        }
    }

    /// Calendar day of `at` in this zone
    pub fn day(&self, at: DateTime<Utc>) -> NaiveDate {
        self.local_time(at).date()
    }
}
