//! Configuration file loading with precedence handling.
//!
//! Precedence chain, lowest to highest: hardcoded defaults, TOML config
//! file, environment variables, CLI flags.

use crate::cursor::{DEFAULT_ROWS_PER_PAGE, FETCH_PAGE_SIZE};
use crate::model::ConfigError;
use serde::Deserialize;
use std::path::PathBuf;

/// TOML configuration file structure.
///
/// All fields are optional; unset fields fall back to hardcoded defaults.
/// Corresponds to `~/.config/lognav/config.toml`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Server-side records per fetch.
    #[serde(default)]
    pub fetch_page_size: Option<u32>,

    /// Client-side rows per page.
    #[serde(default)]
    pub rows_per_page: Option<usize>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Server-side records per fetch.
    pub fetch_page_size: u32,
    /// Client-side rows per page.
    pub rows_per_page: usize,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            fetch_page_size: FETCH_PAGE_SIZE,
            rows_per_page: DEFAULT_ROWS_PER_PAGE,
            log_file_path: default_log_path(),
        }
    }
}

/// Resolve the default log file path.
///
/// `~/.local/state/lognav/lognav.log` on Unix-like systems, the platform
/// state directory elsewhere, falling back to the current directory when no
/// state directory can be determined.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("lognav").join("lognav.log")
    } else {
        PathBuf::from("lognav.log")
    }
}

/// Resolve the default config file path.
///
/// `~/.config/lognav/config.toml` on Unix, the platform config directory
/// elsewhere. `None` if no config directory can be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("lognav").join("config.toml"))
}

/// Load a configuration file from a specific path.
///
/// A missing file is not an error (`Ok(None)`, use defaults); a file that
/// exists but cannot be read or parsed is.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::Read {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::Parse {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Load configuration with path precedence.
///
/// Highest to lowest: explicit `config_path` argument (CLI `--config`), the
/// `LOGNAV_CONFIG` environment variable, then the default path. Missing files
/// are not errors at any level.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var("LOGNAV_CONFIG") {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge a loaded config file into the defaults.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        fetch_page_size: config.fetch_page_size.unwrap_or(defaults.fetch_page_size),
        rows_per_page: config.rows_per_page.unwrap_or(defaults.rows_per_page),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides.
///
/// `LOGNAV_ROWS_PER_PAGE` overrides the client page size when it parses as a
/// positive integer; anything else is ignored.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(rows) = std::env::var("LOGNAV_ROWS_PER_PAGE") {
        if let Ok(rows) = rows.parse::<usize>() {
            if rows > 0 {
                config.rows_per_page = rows;
            }
        }
    }

    config
}

/// Apply CLI argument overrides; CLI flags have the highest precedence.
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    per_page_override: Option<usize>,
) -> ResolvedConfig {
    if let Some(per_page) = per_page_override {
        config.rows_per_page = per_page;
    }

    config
}
