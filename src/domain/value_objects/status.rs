//! Status value object - lifecycle state of a work order

use serde::{Deserialize, Serialize};

/// Lifecycle status of a work order
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    /// Registered, work not started
    #[default]
    Pending,
    /// Work under way
    InProgress,
    /// Work delivered
    Completed,
    /// Dropped before completion
    Canceled,
}

impl Status {
    /// All statuses in lifecycle order
    pub const ALL: [Status; 4] = [
        Status::Pending,
        Status::InProgress,
        Status::Completed,
        Status::Canceled,
    ];

    /// Display label shown in tables and reports
    pub fn label(&self) -> &'static str {
        match self {
            Status::Pending => "Pendente",
            Status::InProgress => "Em Andamento",
            Status::Completed => "Concluído",
            Status::Canceled => "Cancelado",
        }
    }

    /// Returns true if no quick action leads out of this status
    pub fn is_terminal(&self) -> bool {
        matches!(self, Status::Completed | Status::Canceled)
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
