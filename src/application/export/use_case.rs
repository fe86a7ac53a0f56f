//! Export Use Case
//!
//! Builds CSV artifacts from records and hands them to an export sink.

use log::info;

use crate::domain::entities::{Service, WorkOrder};
use crate::domain::ports::ExportSink;
use crate::domain::services::{build_artifact, report_records, HeaderMapping, Record, ReportKind};
use crate::domain::value_objects::CalendarZone;
use crate::error::PaintshopResult;

use super::result::ExportOutcome;

/// Export use case - serializes tables and delivers them
pub struct ExportUseCase<S>
where
    S: ExportSink,
{
    sink: S,
    zone: CalendarZone,
}

impl<S> ExportUseCase<S>
where
    S: ExportSink,
{
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            zone: CalendarZone::default(),
        }
    }

    /// Zone in which exported dates are written
    pub fn in_zone(mut self, zone: CalendarZone) -> Self {
        self.zone = zone;
        self
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Export arbitrary records under `headers` as `filename`
    pub fn execute(
        &self,
        records: &[Record],
        headers: &HeaderMapping,
        filename: &str,
    ) -> PaintshopResult<ExportOutcome> {
        let Some(artifact) = build_artifact(records, headers, filename) else {
            info!("export {}: nothing to export", filename);
            return Ok(ExportOutcome::NothingToExport);
        };

        let location = self.sink.deliver(&artifact)?;
        info!(
            "exported {} row(s) to {} ({} bytes)",
            records.len(),
            location,
            artifact.text.len()
        );

        Ok(ExportOutcome::Delivered {
            filename: artifact.filename,
            location,
            rows: records.len(),
        })
    }

    /// Export one of the built-in reports
    ///
    /// `orders` is the view to report on; pass the filtered list for
    /// `ReportKind::Orders`.
    pub fn export_report(
        &self,
        kind: ReportKind,
        services: &[Service],
        orders: &[&WorkOrder],
    ) -> PaintshopResult<ExportOutcome> {
        let records = report_records(kind, services, orders, self.zone)?;
        self.execute(&records, &kind.headers(), kind.filename())
    }
}
