//! Output setup shared by all commands

use log::warn;

use crate::config::{ConfigWarning, Verbosity};

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for scripting
    Json,
}

impl OutputFormat {
    pub fn from_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }

    pub fn is_json(self) -> bool {
        self == OutputFormat::Json
    }
}

/// Effective verbosity: configured level raised by `-v` flags
pub fn effective_verbosity(configured: Verbosity, verbose_flags: u8) -> Verbosity {
    configured.raised_by(verbose_flags)
}

/// Initialize `env_logger` on stderr; `RUST_LOG` overrides `verbosity`
///
/// Calling it twice is harmless.
pub fn init_logging(verbosity: Verbosity) {
    let _ = env_logger::Builder::new()
        .filter_level(verbosity.level_filter())
        .parse_default_env()
        .format_timestamp(None)
        .format_target(false)
        .try_init();
}

/// Report config warnings through the log facade
pub fn log_config_warnings(warnings: &[ConfigWarning]) {
    for warning in warnings {
        warn!("{}", warning);
    }
}
