//! services/desk/src/config.rs
//!
//! Defines the client's configuration structure and loading logic.
//!
//! All configuration is loaded from environment variables at startup. The `.env`
//! file is used for local development.

use std::time::Duration;
use study_desk_core::Profile;
use tracing::Level;

/// A custom error type for configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for the environment variable {0}: {1}")]
    InvalidValue(String, String),
}

/// Holds all configuration loaded from the environment at startup.
#[derive(Clone, Debug)]
pub struct Config {
    /// Base URL of the backend serving the `/api/...` endpoints.
    pub api_base_url: String,
    pub log_level: Level,
    /// How long a notice stays on screen.
    pub notice_ttl: Duration,
    /// Profile values shown before the user edits them.
    pub initial_profile: Profile,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "http://127.0.0.1:5000".to_string(),
            log_level: Level::INFO,
            notice_ttl: Duration::from_secs(3),
            initial_profile: Profile {
                name: "Student".to_string(),
                school: "Not specified".to_string(),
                course: "Not specified".to_string(),
            },
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// It will look for a `.env` file in the current directory for development,
    /// but this is skipped in test environments to ensure tests are hermetic.
    pub fn from_env() -> Result<Self, ConfigError> {
        if !cfg!(test) {
            dotenvy::dotenv().ok();
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let api_base_url = lookup("DESK_API_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or(defaults.api_base_url);
        if !(api_base_url.starts_with("http://") || api_base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidValue(
                "DESK_API_URL".to_string(),
                format!("'{}' is not an http(s) URL", api_base_url),
            ));
        }

        let log_level_str = lookup("RUST_LOG").unwrap_or_else(|| "INFO".to_string());
        let log_level = log_level_str.parse::<Level>().map_err(|_| {
            ConfigError::InvalidValue(
                "RUST_LOG".to_string(),
                format!("'{}' is not a valid log level", log_level_str),
            )
        })?;

        let notice_ttl = match lookup("DESK_NOTICE_SECS") {
            Some(raw) => raw
                .parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|e| ConfigError::InvalidValue("DESK_NOTICE_SECS".to_string(), e.to_string()))?,
            None => defaults.notice_ttl,
        };

        let initial_profile = Profile {
            name: lookup("DESK_PROFILE_NAME").unwrap_or(defaults.initial_profile.name),
            school: lookup("DESK_PROFILE_SCHOOL").unwrap_or(defaults.initial_profile.school),
            course: lookup("DESK_PROFILE_COURSE").unwrap_or(defaults.initial_profile.course),
        };

        Ok(Self {
            api_base_url,
            log_level,
            notice_ttl,
            initial_profile,
        })
    }
}
