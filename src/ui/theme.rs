use crossterm::style::Color;

use paintshop::Status;

/// Design tokens for the paintshop console.
///
/// All colors, icons and borders used by views come from this module.
pub mod colors {
    use super::Color;

    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
    pub const WARNING: Color = Color::Yellow;
    pub const INFO: Color = Color::Cyan;
    pub const ACCENT: Color = Color::Blue;
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const PROGRESS: &str = "●";
    pub const PENDING: &str = "○";
    pub const ARROW: &str = "↳";
    pub const BAR: &str = "█";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[X]";
    pub const WARNING: &str = "[!]";
    pub const PROGRESS: &str = "[>]";
    pub const PENDING: &str = "[ ]";
    pub const ARROW: &str = "->";
    pub const BAR: &str = "#";
}

pub mod borders {
    pub const TOP_LEFT: &str = "╭";
    pub const TOP_RIGHT: &str = "╮";
    pub const BOTTOM_LEFT: &str = "╰";
    pub const BOTTOM_RIGHT: &str = "╯";
    pub const HORIZONTAL: &str = "─";
    pub const VERTICAL: &str = "│";
    pub const TEE_DOWN: &str = "┬";
    pub const TEE_UP: &str = "┴";
    pub const TEE_RIGHT: &str = "├";
    pub const TEE_LEFT: &str = "┤";
    pub const CROSS: &str = "┼";
}

pub mod borders_ascii {
    pub const TOP_LEFT: &str = "+";
    pub const TOP_RIGHT: &str = "+";
    pub const BOTTOM_LEFT: &str = "+";
    pub const BOTTOM_RIGHT: &str = "+";
    pub const HORIZONTAL: &str = "-";
    pub const VERTICAL: &str = "|";
    pub const TEE_DOWN: &str = "+";
    pub const TEE_UP: &str = "+";
    pub const TEE_RIGHT: &str = "+";
    pub const TEE_LEFT: &str = "+";
    pub const CROSS: &str = "+";
}

/// Badge color of a work-order status
pub fn status_color(status: Status) -> Color {
    match status {
        Status::Pending => colors::WARNING,
        Status::InProgress => colors::ACCENT,
        Status::Completed => colors::SUCCESS,
        Status::Canceled => colors::ERROR,
    }
}

/// Badge icon of a work-order status
pub fn status_icon(status: Status, unicode: bool) -> &'static str {
    match (status, unicode) {
        (Status::Pending, true) => icons::PENDING,
        (Status::Pending, false) => icons_ascii::PENDING,
        (Status::InProgress, true) => icons::PROGRESS,
        (Status::InProgress, false) => icons_ascii::PROGRESS,
        (Status::Completed, true) => icons::SUCCESS,
        (Status::Completed, false) => icons_ascii::SUCCESS,
        (Status::Canceled, true) => icons::ERROR,
        (Status::Canceled, false) => icons_ascii::ERROR,
    }
}

/// Prompt theme for dialoguer menus and forms
pub fn prompt_theme(color: bool) -> Box<dyn dialoguer::theme::Theme> {
    if color {
        Box::new(dialoguer::theme::ColorfulTheme::default())
    } else {
        Box::new(dialoguer::theme::SimpleTheme)
    }
}
