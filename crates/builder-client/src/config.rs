//! Configuration management for the client
//!
//! Loads configuration from environment variables with sensible defaults.

use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

/// Backend used when `BACKEND_URL` is unset
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the catalog / build store backend
    pub backend_url: String,

    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists (for local development)
        dotenvy::dotenv().ok();

        Self::from_vars(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let backend_url = var("BACKEND_URL").unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string());

        let config = Config {
            backend_url: backend_url.trim_end_matches('/').to_string(),

            request_timeout_secs: var("REQUEST_TIMEOUT_SECS")
                .unwrap_or_else(|| "10".to_string())
                .parse()
                .context("Invalid REQUEST_TIMEOUT_SECS")?,
        };

        config.validate()?;

        Ok(config)
    }

    /// Replace the backend URL, e.g. from a command line flag
    pub fn with_backend_url(mut self, url: &str) -> Result<Self> {
        self.backend_url = url.trim_end_matches('/').to_string();
        self.validate()?;
        Ok(self)
    }

    /// Validate configuration
    fn validate(&self) -> Result<()> {
        if !(self.backend_url.starts_with("http://") || self.backend_url.starts_with("https://")) {
            anyhow::bail!(
                "BACKEND_URL must start with http:// or https:// (got {})",
                self.backend_url
            );
        }

        if self.request_timeout_secs == 0 {
            anyhow::bail!("REQUEST_TIMEOUT_SECS must be greater than 0");
        }

        Ok(())
    }

    /// Per-request timeout
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
