//! Configuration loader
//!
//! Loads client configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If incomplete, falls back to loading from a file
//! 3. Probes a short list of paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `JENKINS_URL`: Server base URL (required)
//! - `JENKINS_USERNAME`: Username for HTTP basic auth (optional)
//! - `JENKINS_API_TOKEN`: API token paired with the username (optional)
//! - `JENKINS_TIMEOUT_SECS`: Request timeout in seconds (optional, default 30)
//!
//! ## File Locations
//! The loader probes `./jenkins.toml`, `./jenkins.json`, `../jenkins.toml`,
//! and `../jenkins.json` in that order.

use std::path::{Path, PathBuf};

use jenkins_domain::{JenkinsConfig, JenkinsError, Result};

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If `JENKINS_URL` is
/// missing, falls back to loading from a config file.
///
/// # Errors
/// Returns `JenkinsError::Config` if configuration cannot be loaded from
/// either source, or if a source is present but invalid.
pub fn load() -> Result<JenkinsConfig> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("configuration loaded from environment variables");
            Ok(config)
        }
        Err(err) => {
            tracing::debug!(error = ?err, "environment configuration incomplete, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// `JENKINS_URL` must be present; the remaining variables are optional.
///
/// # Errors
/// Returns `JenkinsError::Config` if `JENKINS_URL` is missing or
/// `JENKINS_TIMEOUT_SECS` has an invalid value.
pub fn load_from_env() -> Result<JenkinsConfig> {
    let base_url = env_var("JENKINS_URL")?;
    let username = std::env::var("JENKINS_USERNAME").ok();
    let api_token = std::env::var("JENKINS_API_TOKEN").ok();

    let timeout_secs = match std::env::var("JENKINS_TIMEOUT_SECS") {
        Ok(raw) => raw
            .parse::<u64>()
            .map_err(|err| JenkinsError::Config(format!("invalid timeout: {err}")))?,
        Err(_) => JenkinsConfig::default().timeout_secs,
    };

    Ok(JenkinsConfig { base_url, username, api_token, timeout_secs })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes the standard locations. Format is detected by
/// file extension (`.json` or `.toml`).
///
/// # Errors
/// Returns `JenkinsError::Config` if no file is found or the contents are
/// invalid.
pub fn load_from_file(path: Option<PathBuf>) -> Result<JenkinsConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(JenkinsError::Config(format!(
                    "config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            JenkinsError::Config("no config file found in any of the standard locations".into())
        })?,
    };

    tracing::info!(path = %config_path.display(), "loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|err| JenkinsError::Config(format!("failed to read config file: {err}")))?;

    parse_config(&contents, &config_path)
}

fn parse_config(contents: &str, path: &Path) -> Result<JenkinsConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|err| JenkinsError::Config(format!("invalid TOML format: {err}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|err| JenkinsError::Config(format!("invalid JSON format: {err}"))),
        _ => Err(JenkinsError::Config(format!("unsupported config format: {extension}"))),
    }
}

/// Probe the standard paths for configuration files
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    let candidates = [
        cwd.join("jenkins.toml"),
        cwd.join("jenkins.json"),
        cwd.join("../jenkins.toml"),
        cwd.join("../jenkins.json"),
    ];

    candidates.into_iter().find(|path| path.exists())
}

fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| {
        JenkinsError::Config(format!("missing required environment variable: {key}"))
    })
}
