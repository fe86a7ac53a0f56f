//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating the store and use cases with infrastructure dependencies
//! - Logging setup and output format selection
//!
//! ## Usage
//!
//! ```ignore
//! use paintshop::presentation::factory;
//!
//! let store = factory::create_store(&config, false);
//! let export = factory::create_export_use_case(&config.export.directory);
//! ```

pub mod cli;
pub mod factory;
pub mod output;

pub use cli::{parse_date, Cli, ColorWhen, Commands, FilterArgs};
pub use factory::{create_export_use_case, create_store, SessionStore};
pub use output::{init_logging, OutputFormat};
