//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts.
//!
//! ## Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `BASE_URL` - Public prefix for generated short links
//!   (default: `http://localhost:3000`)
//! - `DATA_FILE` - Path of the JSON store file (default: `links.json`)
//! - `DEFAULT_VALIDITY_MINUTES` - Lifetime applied when a request omits
//!   `validity` (default: 30)
//! - `LOG_ENDPOINT` / `LOG_TOKEN` - Remote log collector; events are
//!   forwarded only when both are set
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::Result;
use std::env;
use std::path::PathBuf;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub base_url: String,
    pub data_file: PathBuf,
    pub default_validity_minutes: i64,
    pub log_level: String,
    pub log_format: String,
    /// Remote log collector endpoint. Reporting is disabled unless both the
    /// endpoint and the token are configured.
    pub log_endpoint: Option<String>,
    pub log_token: Option<String>,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let base_url =
            env::var("BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());

        let data_file = env::var("DATA_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("links.json"));

        let default_validity_minutes = env::var("DEFAULT_VALIDITY_MINUTES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let log_endpoint = env::var("LOG_ENDPOINT").ok().filter(|v| !v.is_empty());
        let log_token = env::var("LOG_TOKEN").ok().filter(|v| !v.is_empty());

        Ok(Self {
            listen_addr,
            base_url,
            data_file,
            default_validity_minutes,
            log_level,
            log_format,
            log_endpoint,
            log_token,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `default_validity_minutes` is not positive
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not a valid socket address
    /// - `base_url` is not an absolute URL
    /// - a log token is set without an endpoint (or vice versa)
    pub fn validate(&self) -> Result<()> {
        if self.default_validity_minutes < 1 {
            anyhow::bail!(
                "DEFAULT_VALIDITY_MINUTES must be positive, got {}",
                self.default_validity_minutes
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if self.listen_addr.parse::<std::net::SocketAddr>().is_err() {
            anyhow::bail!("LISTEN is not a valid socket address: '{}'", self.listen_addr);
        }

        if url::Url::parse(&self.base_url).is_err() {
            anyhow::bail!("BASE_URL is not a valid URL: '{}'", self.base_url);
        }

        if self.log_endpoint.is_some() != self.log_token.is_some() {
            anyhow::bail!("LOG_ENDPOINT and LOG_TOKEN must be set together");
        }

        Ok(())
    }
}
