//! Configuration loader
//!
//! Loads client configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, reads the recognized environment variables
//! 2. If the base URL variable is absent, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. If no file exists either, built-in defaults apply
//!
//! ## Environment Variables
//! - `STYLEVERSE_API_URL`: Base URL of the REST backend
//! - `STYLEVERSE_HTTP_TIMEOUT_SECS`: Per-request timeout in seconds
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./styleverse.json` or `./styleverse.toml`
//! 2. `./config.json` or `./config.toml`
//! 3. The same names one and two directories up

use std::path::{Path, PathBuf};

use styleverse_domain::constants::{ENV_API_URL, ENV_HTTP_TIMEOUT_SECS};
use styleverse_domain::{ApiConfig, Config, Result, StyleVerseError};

/// Load configuration with automatic fallback strategy
///
/// Reads the environment first; when the base URL variable is absent,
/// falls back to a config file, and finally to built-in defaults.
///
/// # Errors
/// Returns `StyleVerseError::Config` if a present source is malformed
/// (invalid variable value, unreadable or invalid file)
pub fn load() -> Result<Config> {
    if let Some(config) = load_from_env()? {
        tracing::info!("configuration loaded from environment variables");
        return Ok(config);
    }

    match probe_config_paths() {
        Some(path) => load_from_file(Some(path)),
        None => {
            tracing::debug!("no configuration source found, using defaults");
            Ok(Config::default())
        }
    }
}

/// Load configuration from environment variables
///
/// Returns `Ok(None)` when the base URL variable is not set; the timeout
/// variable alone does not constitute an environment configuration.
///
/// # Errors
/// Returns `StyleVerseError::Config` if a set variable has an invalid
/// value
pub fn load_from_env() -> Result<Option<Config>> {
    let Ok(base_url) = std::env::var(ENV_API_URL) else {
        return Ok(None);
    };

    if base_url.trim().is_empty() {
        return Err(StyleVerseError::Config(format!("{ENV_API_URL} is set but empty")));
    }

    let mut api = ApiConfig { base_url, ..Default::default() };

    if let Ok(raw) = std::env::var(ENV_HTTP_TIMEOUT_SECS) {
        api.timeout_seconds = raw.parse::<u64>().map_err(|err| {
            StyleVerseError::Config(format!("invalid {ENV_HTTP_TIMEOUT_SECS}: {err}"))
        })?;
    }

    Ok(Some(Config { api }))
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `StyleVerseError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(StyleVerseError::Config(format!(
                    "config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            StyleVerseError::Config("no config file found in any of the standard locations".into())
        })?,
    };

    tracing::info!(path = %config_path.display(), "loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|err| StyleVerseError::Config(format!("failed to read config file: {err}")))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|ext| ext.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|err| StyleVerseError::Config(format!("invalid TOML format: {err}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|err| StyleVerseError::Config(format!("invalid JSON format: {err}"))),
        _ => Err(StyleVerseError::Config(format!("unsupported config format: {extension}"))),
    }
}

/// Probe multiple paths for configuration files
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        for base in [cwd.clone(), cwd.join(".."), cwd.join("../..")] {
            candidates.extend([
                base.join("styleverse.json"),
                base.join("styleverse.toml"),
                base.join("config.json"),
                base.join("config.toml"),
            ]);
        }
    }

    candidates.into_iter().find(|path| path.exists())
}
