//! View selector - which screen of the console is active

use serde::{Deserialize, Serialize};

/// Top-level screen of the console
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum View {
    #[default]
    Dashboard,
    Services,
    WorkOrders,
    Analytics,
}

impl View {
    /// Screens in navigation order
    pub const ALL: [View; 4] = [
        View::Dashboard,
        View::Services,
        View::WorkOrders,
        View::Analytics,
    ];

    /// Navigation label
    pub fn label(&self) -> &'static str {
        match self {
            View::Dashboard => "Dashboard",
            View::Services => "Serviços",
            View::WorkOrders => "Ordens de Serviço",
            View::Analytics => "Análises",
        }
    }
}
