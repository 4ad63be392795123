//! Runtime configuration read from the environment.
//!
//! `main` loads a `.env` file (if present) before calling [`Config::from_env`],
//! so every value here can also come from that file.

use std::env;
use std::path::Path;
use std::time::Duration;

use tracing::warn;

use crate::error::ConfigError;

/// File read for settings before the environment is consulted.
pub const ENV_FILE: &str = ".env";

/// Environment variable holding the Gemini API key. Required.
pub const API_KEY_ENV_VAR: &str = "GEMINI_API_KEY";

/// Environment variable to override the model name.
pub const MODEL_ENV_VAR: &str = "AIPUSH_GEMINI_MODEL";

/// Environment variable to override the API base URL.
pub const API_BASE_ENV_VAR: &str = "AIPUSH_GEMINI_API_BASE";

/// Environment variable to override the request timeout (seconds).
pub const TIMEOUT_ENV_VAR: &str = "AIPUSH_GEMINI_TIMEOUT";

pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Settings for the generation client.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub model: String,
    pub api_base: String,
    pub timeout: Duration,
}

impl Config {
    /// Read configuration from the process environment.
    ///
    /// Fails only when the API key is missing or empty; every other value
    /// has a default.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key =
            non_empty_var(API_KEY_ENV_VAR).ok_or(ConfigError::MissingApiKey(API_KEY_ENV_VAR))?;

        Ok(Self {
            api_key,
            model: non_empty_var(MODEL_ENV_VAR).unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            api_base: non_empty_var(API_BASE_ENV_VAR)
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            timeout: get_timeout(),
        })
    }

    /// Replace the model, e.g. from a `--model` flag.
    pub fn with_model(mut self, model: Option<String>) -> Self {
        if let Some(model) = model.as_deref().map(str::trim).filter(|m| !m.is_empty()) {
            self.model = model.to_string();
        }
        self
    }
}

/// Load `KEY=value` pairs from the `.env` file at `path` into the environment.
///
/// Only that file is read; parent directories are not searched. Returns
/// `Ok(false)` when the file does not exist.
pub fn load_env_file(path: &Path) -> Result<bool, dotenvy::Error> {
    match dotenvy::from_path(path) {
        Ok(()) => Ok(true),
        Err(e) if e.not_found() => Ok(false),
        Err(e) => Err(e),
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Get the configured timeout duration.
///
/// Logs a warning if the environment variable is set but contains
/// an invalid value (non-numeric, negative, or zero).
fn get_timeout() -> Duration {
    match env::var(TIMEOUT_ENV_VAR) {
        Ok(v) if !v.is_empty() => match v.parse::<u64>() {
            Ok(secs) if secs > 0 => Duration::from_secs(secs),
            _ => {
                warn!(
                    "Invalid {} value '{}', using default {}s",
                    TIMEOUT_ENV_VAR, v, DEFAULT_TIMEOUT_SECS
                );
                Duration::from_secs(DEFAULT_TIMEOUT_SECS)
            }
        },
        _ => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
    }
}
