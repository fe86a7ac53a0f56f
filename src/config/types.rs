//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::PaintshopResult;

use super::loader::{self, ConfigWarning};

/// Session configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Start with the demo catalog and work orders
    #[serde(default = "default_true")]
    pub seed: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { seed: true }
    }
}

fn default_true() -> bool {
    true
}

/// Export configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Directory CSV files are written to
    #[serde(default = "default_export_dir")]
    pub directory: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: default_export_dir(),
        }
    }
}

fn default_export_dir() -> PathBuf {
    PathBuf::from(".")
}

/// Output configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,

    #[serde(default)]
    pub color: ColorMode,
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    /// Log filter this verbosity maps to
    pub fn level_filter(self) -> log::LevelFilter {
        match self {
            Verbosity::Quiet => log::LevelFilter::Error,
            Verbosity::Normal => log::LevelFilter::Warn,
            Verbosity::Verbose => log::LevelFilter::Info,
            Verbosity::Debug => log::LevelFilter::Debug,
        }
    }

    /// Raise verbosity by the number of `-v` flags given
    pub fn raised_by(self, count: u8) -> Self {
        const LADDER: [Verbosity; 4] = [
            Verbosity::Quiet,
            Verbosity::Normal,
            Verbosity::Verbose,
            Verbosity::Debug,
        ];
        let start = LADDER.iter().position(|v| *v == self).unwrap_or(1);
        LADDER[(start + count as usize).min(LADDER.len() - 1)]
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub session: SessionConfig,

    #[serde(default)]
    pub export: ExportConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> PaintshopResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> PaintshopResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Resolve the effective configuration for a run
    ///
    /// An explicit file must exist and parse. Otherwise the project file in
    /// `working_dir`, then the user file, then defaults are used.
    pub fn resolve(
        explicit: Option<&Path>,
        working_dir: &Path,
    ) -> PaintshopResult<(Self, Vec<ConfigWarning>)> {
        loader::resolve(explicit, working_dir)
    }

    /// Load from project config, user config, or defaults
    pub fn load_or_default(working_dir: Option<&Path>) -> Self {
        loader::load_or_default(working_dir)
    }

    /// Apply environment variable overrides (PAINTSHOP_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }
}
