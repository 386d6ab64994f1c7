//! Relay configuration parsed from environment variables.
//!
//! DESIGN
//! ======
//! All values are plain configuration with fixed defaults. Parsing goes
//! through a lookup closure so tests can supply values without mutating the
//! process environment.

use axum::http::HeaderValue;

pub const DEFAULT_SUPABASE_URL: &str = "https://your-project.supabase.co";
pub const DEFAULT_SUPABASE_KEY: &str = "your-anon-key";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:8081";
pub const DEFAULT_DATA_TABLE: &str = "entities";

/// Errors produced while reading relay configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `PORT` is set but is not a valid TCP port.
    #[error("invalid PORT: {value:?}")]
    InvalidPort { value: String },

    /// `CORS_ORIGIN` cannot be used as a header value.
    #[error("invalid CORS_ORIGIN: {value:?}")]
    InvalidOrigin { value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    /// Base URL of the database service, without a trailing slash.
    pub supabase_url: String,
    pub supabase_key: String,
    pub port: u16,
    /// The single origin granted CORS access.
    pub cors_origin: HeaderValue,
    /// Collection the data endpoints read from.
    pub table: String,
}

impl RelayConfig {
    /// Build typed relay config from environment variables.
    ///
    /// Optional (all have defaults):
    /// - `SUPABASE_URL`, `SUPABASE_KEY`
    /// - `PORT`: default 3000
    /// - `CORS_ORIGIN`: default `http://localhost:8081`
    /// - `DATA_TABLE`: default `entities`
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` or `CORS_ORIGIN` is malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` or `CORS_ORIGIN` is malformed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let supabase_url = lookup("SUPABASE_URL")
            .unwrap_or_else(|| DEFAULT_SUPABASE_URL.to_owned())
            .trim_end_matches('/')
            .to_owned();
        let supabase_key = lookup("SUPABASE_KEY").unwrap_or_else(|| DEFAULT_SUPABASE_KEY.to_owned());
        let port = parse_port(lookup("PORT"))?;
        let cors_origin = parse_origin(lookup("CORS_ORIGIN"))?;
        let table = lookup("DATA_TABLE")
            .map(|t| t.trim().to_owned())
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| DEFAULT_DATA_TABLE.to_owned());

        Ok(Self { supabase_url, supabase_key, port, cors_origin, table })
    }
}

fn parse_port(raw: Option<String>) -> Result<u16, ConfigError> {
    match raw {
        None => Ok(DEFAULT_PORT),
        Some(value) => value
            .trim()
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort { value }),
    }
}

fn parse_origin(raw: Option<String>) -> Result<HeaderValue, ConfigError> {
    let value = raw.unwrap_or_else(|| DEFAULT_CORS_ORIGIN.to_owned());
    let trimmed = value.trim().trim_end_matches('/').to_owned();
    if trimmed.is_empty() {
        return Err(ConfigError::InvalidOrigin { value });
    }
    HeaderValue::from_str(&trimmed).map_err(|_| ConfigError::InvalidOrigin { value })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
