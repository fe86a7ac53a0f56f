//! Export result types

use crate::domain::services::NOTHING_TO_EXPORT;

/// Outcome of an export request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// No rows; nothing was generated or delivered
    NothingToExport,
    /// The artifact was handed to the sink
    Delivered {
        filename: String,
        location: String,
        rows: usize,
    },
}

impl ExportOutcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, ExportOutcome::Delivered { .. })
    }

    /// User-facing notice describing the outcome
    pub fn notice(&self) -> String {
        match self {
            ExportOutcome::NothingToExport => NOTHING_TO_EXPORT.to_string(),
            ExportOutcome::Delivered { location, rows, .. } => {
                format!("Exported {} row(s) to {}", rows, location)
            }
        }
    }
}
