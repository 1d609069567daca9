//! Configuration management for the mock backend
//!
//! Loads configuration from environment variables with sensible defaults.

use anyhow::{Context, Result};
use std::env;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// API server host
    pub host: String,

    /// API server port
    pub port: u16,

    /// Install the demo catalog before serving
    pub seed_on_start: bool,
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
        let config = Config {
            host: var("MOCK_BACKEND_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),

            port: var("MOCK_BACKEND_PORT")
                .unwrap_or_else(|| "8000".to_string())
                .parse()
                .context("Invalid MOCK_BACKEND_PORT")?,

            seed_on_start: var("MOCK_BACKEND_SEED_ON_START")
                .unwrap_or_else(|| "false".to_string())
                .parse()
                .context("Invalid MOCK_BACKEND_SEED_ON_START (expected true/false)")?,
        };

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.port == 0 {
            anyhow::bail!("MOCK_BACKEND_PORT must be greater than 0");
        }

        Ok(())
    }

    /// Get the listen address
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
