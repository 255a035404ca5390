//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `SAMOVAR_BASE_URL` - Café API base URL (default: `http://127.0.0.1:8080`)
//! - `SAMOVAR_SESSION_FILE` - Session file path (default:
//!   `$HOME/.samovar/session.json`, or `./.samovar/session.json` when
//!   `HOME` is unset)

use std::path::PathBuf;

use thiserror::Error;
use url::Url;

/// Default base URL; matches the café server's default bind.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the café API (origin-level, no trailing path).
    pub base_url: Url,
    /// Where the session file lives.
    pub session_file: PathBuf,
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from a `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `SAMOVAR_BASE_URL` is set but not a valid
    /// URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let raw_base =
            std::env::var("SAMOVAR_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_owned());
        let base_url = Url::parse(&raw_base).map_err(|e| {
            ConfigError::InvalidEnvVar("SAMOVAR_BASE_URL".to_owned(), e.to_string())
        })?;

        let session_file = std::env::var_os("SAMOVAR_SESSION_FILE")
            .map_or_else(default_session_file, PathBuf::from);

        Ok(Self {
            base_url,
            session_file,
        })
    }
}

fn default_session_file() -> PathBuf {
    std::env::var_os("HOME").map_or_else(
        || PathBuf::from(".samovar").join("session.json"),
        |home| PathBuf::from(home).join(".samovar").join("session.json"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_base_url_parses() {
        let url = Url::parse(DEFAULT_BASE_URL).expect("default URL is valid");
        assert_eq!(url.scheme(), "http");
        assert_eq!(url.port(), Some(8080));
    }

    #[test]
    fn default_session_file_ends_with_fixed_name() {
        let path = default_session_file();
        assert!(path.ends_with(".samovar/session.json"));
    }
}
