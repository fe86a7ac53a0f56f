//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{PaintshopError, PaintshopResult};

use super::types::{ColorMode, Config, Verbosity};

/// File name looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "paintshop.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    /// The unknown key
    pub key: String,
    /// The file where the warning occurred
    pub file: PathBuf,
    /// The line number (1-indexed) if available
    pub line: Option<usize>,
    /// A suggested correction if available
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> PaintshopResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;
    parse_with_warnings(&content, path)
}

/// Parse TOML text as if it had been read from `path`
pub fn parse_with_warnings(
    content: &str,
    path: &Path,
) -> PaintshopResult<(Config, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| PaintshopError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
                file: path.to_path_buf(),
                key,
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Explicit file, project file, user file, defaults; env overrides on top
pub fn resolve(
    explicit: Option<&Path>,
    working_dir: &Path,
) -> PaintshopResult<(Config, Vec<ConfigWarning>)> {
    if let Some(path) = explicit {
        debug!("loading config from {}", path.display());
        let (config, warnings) = load_with_warnings(path)?;
        return Ok((with_env_overrides(config), warnings));
    }

    for candidate in candidate_files(Some(working_dir)) {
        if candidate.exists() {
            debug!("loading config from {}", candidate.display());
            let (config, warnings) = load_with_warnings(&candidate)?;
            return Ok((with_env_overrides(config), warnings));
        }
    }

    debug!("no config file found, using defaults");
    Ok((with_env_overrides(Config::default()), Vec::new()))
}

/// Load from project config, user config, or defaults
///
/// Unreadable or invalid files are skipped.
pub fn load_or_default(working_dir: Option<&Path>) -> Config {
    for candidate in candidate_files(working_dir) {
        if candidate.exists() {
            if let Ok(config) = Config::load(&candidate) {
                return with_env_overrides(config);
            }
        }
    }

    with_env_overrides(Config::default())
}

fn candidate_files(working_dir: Option<&Path>) -> Vec<PathBuf> {
    let mut files = Vec::new();
    if let Some(dir) = working_dir {
        files.push(dir.join(PROJECT_CONFIG_FILE));
    }
    if let Some(user_config_dir) = user_config_dir() {
        files.push(user_config_dir.join("paintshop/config.toml"));
    }
    files
}

/// Apply environment variable overrides (PAINTSHOP_* prefix)
pub fn with_env_overrides(mut config: Config) -> Config {
    // PAINTSHOP_SEED
    if let Ok(val) = std::env::var("PAINTSHOP_SEED") {
        config.session.seed = val.to_lowercase() != "false" && val != "0";
    }

    // PAINTSHOP_EXPORT_DIR
    if let Ok(dir) = std::env::var("PAINTSHOP_EXPORT_DIR") {
        if !dir.trim().is_empty() {
            config.export.directory = PathBuf::from(dir);
        }
    }

    // PAINTSHOP_VERBOSITY
    if let Ok(verbosity) = std::env::var("PAINTSHOP_VERBOSITY") {
        config.output.verbosity = match verbosity.to_lowercase().as_str() {
            "quiet" => Verbosity::Quiet,
            "verbose" => Verbosity::Verbose,
            "debug" => Verbosity::Debug,
            _ => Verbosity::Normal,
        };
    }

    // PAINTSHOP_COLOR
    if let Ok(color) = std::env::var("PAINTSHOP_COLOR") {
        config.output.color = match color.to_lowercase().as_str() {
            "always" => ColorMode::Always,
            "never" => ColorMode::Never,
            _ => ColorMode::Auto,
        };
    }

    config
}

/// XDG config directory, falling back to the platform default
fn user_config_dir() -> Option<PathBuf> {
    std::env::var_os("XDG_CONFIG_HOME")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

pub(super) fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "session",
        "seed",
        "export",
        "directory",
        "output",
        "verbosity",
        "color",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let mut prev: Vec<usize> = (0..=b_chars.len()).collect();
    let mut curr = vec![0usize; b_chars.len() + 1];

    for (i, ac) in a_chars.iter().enumerate() {
        curr[0] = i + 1;
        for (j, bc) in b_chars.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_chars.len()]
}
