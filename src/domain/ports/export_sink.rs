//! ExportSink port - delivers a finished CSV artifact

use crate::domain::services::CsvArtifact;
use crate::error::PaintshopResult;

/// Delivery side effect consuming `(text, filename)`
pub trait ExportSink {
    /// Deliver the artifact; returns a human-readable location
    fn deliver(&self, artifact: &CsvArtifact) -> PaintshopResult<String>;
}
