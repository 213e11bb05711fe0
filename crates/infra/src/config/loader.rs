//! Configuration loader
//!
//! Loads client configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If credentials are missing there, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `FRAGNET_USERNAME`: Account name (required)
//! - `FRAGNET_PASSWORD`: Account password (required)
//! - `FRAGNET_HOST`: Search service host and port
//! - `FRAGNET_TOKEN_URL`: OAuth token endpoint
//! - `FRAGNET_CLIENT_ID`: OAuth client identifier
//! - `FRAGNET_REQUEST_TIMEOUT`: Per-request timeout in seconds
//! - `FRAGNET_REFRESH_DEADLINE`: Minimum remaining token lifetime in seconds
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./fragnet.json` or `./fragnet.toml` (current working directory)
//! 2. `./config.json` or `./config.toml` (current working directory)
//! 3. The same names next to the executable

use std::path::{Path, PathBuf};

use fragnet_domain::constants::DEFAULT_FRAGNET_HOST;
use fragnet_domain::{FragnetConfig, FragnetError, Result};

const CONFIG_FILE_NAMES: [&str; 4] = ["fragnet.json", "fragnet.toml", "config.json", "config.toml"];

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If a required variable
/// is missing or invalid, falls back to loading from a config file.
///
/// # Errors
/// Returns `FragnetError::Config` if configuration cannot be loaded from
/// either source.
pub fn load() -> Result<FragnetConfig> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = %e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// Only the credentials are required; everything else falls back to the
/// service defaults.
///
/// # Errors
/// Returns `FragnetError::Config` if a credential is missing or a duration is
/// not a whole number of seconds.
pub fn load_from_env() -> Result<FragnetConfig> {
    let username = env_var("FRAGNET_USERNAME")?;
    let password = env_var("FRAGNET_PASSWORD")?;
    let host = optional_env("FRAGNET_HOST").unwrap_or_else(|| DEFAULT_FRAGNET_HOST.to_string());

    let mut config = FragnetConfig::new(host, username, password);

    if let Some(token_url) = optional_env("FRAGNET_TOKEN_URL") {
        config.auth.token_url = token_url;
    }
    if let Some(client_id) = optional_env("FRAGNET_CLIENT_ID") {
        config.auth.client_id = client_id;
    }
    if let Some(secs) = env_secs("FRAGNET_REQUEST_TIMEOUT")? {
        config.server.request_timeout_secs = secs;
    }
    if let Some(secs) = env_secs("FRAGNET_REFRESH_DEADLINE")? {
        config.auth.refresh_deadline_secs = secs;
    }

    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes the standard locations. The format is chosen
/// by file extension.
///
/// # Errors
/// Returns `FragnetError::Config` if the file is missing, unreadable, of an
/// unsupported format, or lacks required fields.
pub fn load_from_file(path: Option<PathBuf>) -> Result<FragnetConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(FragnetError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            FragnetError::Config("No config file found in any of the standard locations".into())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| FragnetError::Config(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration, detecting the format from `path`'s extension
fn parse_config(contents: &str, path: &Path) -> Result<FragnetConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| FragnetError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| FragnetError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(FragnetError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Probe the standard locations for a configuration file
///
/// Returns the first existing candidate, or `None`.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut dirs = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        dirs.push(cwd);
    }
    if let Some(exe_dir) =
        std::env::current_exe().ok().and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        dirs.push(exe_dir);
    }

    probe_dirs(&dirs)
}

fn probe_dirs(dirs: &[PathBuf]) -> Option<PathBuf> {
    dirs.iter()
        .flat_map(|dir| CONFIG_FILE_NAMES.iter().map(move |name| dir.join(name)))
        .find(|path| path.exists())
}

/// Get required environment variable
fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| {
        FragnetError::Config(format!("Missing required environment variable: {key}"))
    })
}

/// Optional environment variable; blank counts as unset
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn env_secs(key: &str) -> Result<Option<u64>> {
    optional_env(key)
        .map(|value| {
            value
                .trim()
                .parse::<u64>()
                .map_err(|e| FragnetError::Config(format!("Invalid {key}: {e}")))
        })
        .transpose()
}
