//! Client configuration loaded via OrthoConfig.
//!
//! Values come from `EMS_*` environment variables or a config file; command
//! line flags handled in `main` take precedence over both.

use std::ffi::OsString;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use url::Url;

/// Base URL used when none is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8080/api/v1";

/// Invalid configuration values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    /// Sources could not be read or merged.
    #[error("failed to load configuration: {message}")]
    Load {
        /// Loader error text.
        message: String,
    },
    /// The API URL does not parse or cannot carry a path.
    #[error("invalid API URL `{value}`: {message}")]
    InvalidApiUrl {
        /// Configured value.
        value: String,
        /// Parser error text.
        message: String,
    },
    /// The log format is neither `json` nor `compact`.
    #[error("unknown log format `{value}`; expected `json` or `compact`")]
    InvalidLogFormat {
        /// Configured value.
        value: String,
    },
}

/// Log line layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per line.
    Json,
    /// Human-readable single lines.
    #[default]
    Compact,
}

/// Configuration values for the directory client.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "EMS")]
pub struct ClientSettings {
    /// Directory API base URL, e.g. `http://localhost:8080/api/v1`.
    pub api_url: Option<String>,
    /// Log layout: `json` or `compact`.
    pub log_format: Option<String>,
}

impl ClientSettings {
    /// Load from the environment and config files, ignoring process
    /// arguments.
    ///
    /// # Errors
    ///
    /// [`SettingsError::Load`] when a source is malformed.
    pub fn load_from_environment() -> Result<Self, SettingsError> {
        Self::load_from_iter([OsString::from(env!("CARGO_PKG_NAME"))]).map_err(|error| {
            SettingsError::Load {
                message: error.to_string(),
            }
        })
    }

    /// Return the configured API URL, falling back to [`DEFAULT_API_URL`].
    ///
    /// # Errors
    ///
    /// [`SettingsError::InvalidApiUrl`] when the value is not an absolute
    /// URL that can carry a path.
    pub fn api_url(&self) -> Result<Url, SettingsError> {
        let value = self.api_url.as_deref().unwrap_or(DEFAULT_API_URL);
        let invalid = |message: String| SettingsError::InvalidApiUrl {
            value: value.to_owned(),
            message,
        };
        let url = Url::parse(value).map_err(|error| invalid(error.to_string()))?;
        if url.cannot_be_a_base() {
            return Err(invalid("URL cannot carry a path".to_owned()));
        }
        Ok(url)
    }

    /// Return the configured log format, defaulting to compact lines.
    ///
    /// # Errors
    ///
    /// [`SettingsError::InvalidLogFormat`] for unknown values.
    pub fn log_format(&self) -> Result<LogFormat, SettingsError> {
        match self.log_format.as_deref().map(str::trim) {
            None => Ok(LogFormat::default()),
            Some(value) if value.eq_ignore_ascii_case("json") => Ok(LogFormat::Json),
            Some(value) if value.eq_ignore_ascii_case("compact") => Ok(LogFormat::Compact),
            Some(value) => Err(SettingsError::InvalidLogFormat {
                value: value.to_owned(),
            }),
        }
    }
}
