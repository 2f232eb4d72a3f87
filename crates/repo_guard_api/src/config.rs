//! Service configuration
//!
//! All settings come from environment variables and are read once at startup.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `GITHUB_TOKEN` | required |
//! | `GITHUB_API_URL` | `https://api.github.com` |
//! | `GITHUB_WEBHOOK_SECRET` | unset (signature verification disabled) |
//! | `NOTIFICATION_ISSUE_ENABLED` | `true` |
//! | `API_HOST` | `0.0.0.0` |
//! | `API_PORT` | `5000` |
//! | `LOG_FORMAT` | `text` |

use secrecy::SecretString;
use thiserror::Error;

use crate::{ApiConfig, DEFAULT_PORT};

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

pub const GITHUB_TOKEN_VAR: &str = "GITHUB_TOKEN";
pub const GITHUB_API_URL_VAR: &str = "GITHUB_API_URL";
pub const WEBHOOK_SECRET_VAR: &str = "GITHUB_WEBHOOK_SECRET";
pub const NOTIFICATION_ISSUE_VAR: &str = "NOTIFICATION_ISSUE_ENABLED";
pub const API_HOST_VAR: &str = "API_HOST";
pub const API_PORT_VAR: &str = "API_PORT";
pub const LOG_FORMAT_VAR: &str = "LOG_FORMAT";

/// Errors raised while reading configuration.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Required environment variable {0} is not set")]
    MissingVariable(&'static str),

    #[error("Environment variable {variable} has invalid value '{value}'")]
    InvalidValue {
        variable: &'static str,
        value: String,
    },
}

/// Output format of the log subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

/// GitHub connection settings.
#[derive(Debug)]
pub struct GitHubSettings {
    /// Bearer token for the REST API
    pub token: SecretString,

    /// Base URI of the REST API
    pub api_url: String,
}

/// Complete service configuration.
#[derive(Debug)]
pub struct ServiceConfig {
    pub server: ApiConfig,
    pub github: GitHubSettings,
    pub webhook_secret: Option<SecretString>,
    pub notification_issue: bool,
    pub log_format: LogFormat,
}

impl ServiceConfig {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`, which returns the value of a
    /// variable or `None` when it is unset.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let token = get(GITHUB_TOKEN_VAR).ok_or(ConfigError::MissingVariable(GITHUB_TOKEN_VAR))?;

        let api_url = get(GITHUB_API_URL_VAR)
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| github_client::DEFAULT_API_URL.to_string());

        let port = match get(API_PORT_VAR) {
            Some(value) => value.parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                variable: API_PORT_VAR,
                value,
            })?,
            None => DEFAULT_PORT,
        };

        let host = get(API_HOST_VAR).unwrap_or_else(|| ApiConfig::default().host);

        let notification_issue = match get(NOTIFICATION_ISSUE_VAR) {
            Some(value) => parse_bool(NOTIFICATION_ISSUE_VAR, value)?,
            None => true,
        };

        let log_format = match get(LOG_FORMAT_VAR) {
            Some(value) => match value.to_ascii_lowercase().as_str() {
                "text" | "pretty" => LogFormat::Text,
                "json" => LogFormat::Json,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        variable: LOG_FORMAT_VAR,
                        value,
                    })
                }
            },
            None => LogFormat::default(),
        };

        Ok(Self {
            server: ApiConfig { port, host },
            github: GitHubSettings {
                token: SecretString::from(token),
                api_url,
            },
            webhook_secret: get(WEBHOOK_SECRET_VAR).map(SecretString::from),
            notification_issue,
            log_format,
        })
    }
}

fn parse_bool(variable: &'static str, value: String) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue { variable, value }),
    }
}
