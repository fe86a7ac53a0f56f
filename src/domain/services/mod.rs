//! Domain Services
//!
//! Pure business logic services that operate on domain entities.
//! These services have no I/O dependencies and are easily testable.

mod analytics;
mod csv_export;
mod work_order_filter;

pub use analytics::{
    report_records, service_distribution, service_name, status_distribution, work_order_record,
    ReportKind, ServiceCount, StatusCount, UNKNOWN_SERVICE,
};
pub use csv_export::{
    build_artifact, escape_cell, to_csv, CellValue, CsvArtifact, HeaderMapping, Record,
    NOTHING_TO_EXPORT,
};
pub use work_order_filter::{filter_and_sort, FilterCriteria};
