//! Configuration module for paintshop
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (PAINTSHOP_*)
//! 3. `--config <file>` or project config (./paintshop.toml)
//! 4. User config (~/.config/paintshop/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{ColorMode, Config, ExportConfig, OutputConfig, SessionConfig, Verbosity};
