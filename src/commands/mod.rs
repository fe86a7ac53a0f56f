//! Subcommand implementations
//!
//! Every command reads the session store and renders through `crate::ui`.
//! JSON mode emits one document per line instead of tables.

pub mod demo;
pub mod export;
pub mod interactive;
pub mod orders;
pub mod report;
pub mod services;
