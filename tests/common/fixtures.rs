//! Shared fixtures

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use paintshop::infrastructure::{FixedClock, SequentialIdGenerator};
use paintshop::EntityStore;

pub type TestStore = EntityStore<FixedClock, SequentialIdGenerator>;

pub fn at(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 11, day, hour, 0, 0).unwrap()
}

pub fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 11, day).unwrap()
}

/// Empty store whose clock starts at 2023-11-01 08:00 UTC
pub fn fixed_store() -> (TestStore, FixedClock) {
    let clock = FixedClock::new(at(1, 8));
    (
        EntityStore::new(clock.clone(), SequentialIdGenerator::new()),
        clock,
    )
}

/// Store holding the session seed
pub fn seeded_store() -> TestStore {
    EntityStore::with_records(
        FixedClock::new(at(20, 8)),
        SequentialIdGenerator::new(),
        paintshop::seed::services(),
        paintshop::seed::work_orders(),
    )
}

pub const EMPTY_SESSION_CONFIG: &str = r#"
[session]
seed = false
"#;

pub const EXPORT_DIR_CONFIG: &str = r#"
[export]
directory = "relatorios"
"#;
