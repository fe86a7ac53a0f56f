//! Terminal rendering for the paintshop console

pub mod context;
pub mod json;
pub mod table;
pub mod terminal;
pub mod text;
pub mod theme;
pub mod views;
