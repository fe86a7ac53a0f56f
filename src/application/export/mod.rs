//! Export use case - CSV export of tabular views

mod result;
mod use_case;

pub use result::ExportOutcome;
pub use use_case::ExportUseCase;
