//! Client for the parts catalog and build store backend

use anyhow::{Context, Result};
use reqwest::Response;
use rigforge_common::{CreateBuildRequest, Part, SaveBuildResponse, SavedBuild};
use std::time::Duration;
use tracing::debug;

use crate::config::Config;

/// Client for interacting with the backend REST API
///
/// Every call is a single attempt; nothing is retried here.
#[derive(Debug, Clone)]
pub struct BackendClient {
    base_url: String,
    client: reqwest::Client,
}

impl BackendClient {
    /// Create a new backend client
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Create a client with a per-request timeout
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Create a client from loaded configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::with_timeout(config.backend_url.clone(), config.request_timeout())
    }

    /// Base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the full parts catalog
    pub async fn fetch_components(&self) -> Result<Vec<Part>> {
        let url = format!("{}/api/components", self.base_url);

        debug!("Fetching components: {}", url);

        let response = self.client.get(&url).send().await?;
        let response = ensure_success(response, "GET /api/components").await?;

        response
            .json()
            .await
            .context("Failed to parse components response")
    }

    /// Ask the backend to install its demo catalog
    pub async fn seed_components(&self) -> Result<()> {
        let url = format!("{}/api/components/seed", self.base_url);

        debug!("Requesting catalog seed: {}", url);

        let response = self.client.post(&url).send().await?;
        ensure_success(response, "POST /api/components/seed").await?;

        Ok(())
    }

    /// Fetch every saved build, in the order the backend returns them
    pub async fn list_builds(&self) -> Result<Vec<SavedBuild>> {
        let url = format!("{}/api/builds", self.base_url);

        debug!("Fetching saved builds: {}", url);

        let response = self.client.get(&url).send().await?;
        let response = ensure_success(response, "GET /api/builds").await?;

        response
            .json()
            .await
            .context("Failed to parse builds response")
    }

    /// Save a build and return the backend's computed summary
    pub async fn create_build(&self, request: &CreateBuildRequest) -> Result<SaveBuildResponse> {
        let url = format!("{}/api/builds", self.base_url);

        debug!("Saving build '{}': {}", request.name, url);

        let response = self.client.post(&url).json(request).send().await?;
        let response = ensure_success(response, "POST /api/builds").await?;

        response
            .json()
            .await
            .context("Failed to parse save build response")
    }

    /// Check if the backend is reachable
    pub async fn health_check(&self) -> Result<bool> {
        let url = format!("{}/health", self.base_url);
        let response = self.client.get(&url).send().await?;
        Ok(response.status().is_success())
    }
}

/// Turn a non-2xx response into an error carrying the status and body
async fn ensure_success(response: Response, endpoint: &str) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let error_text = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    anyhow::bail!("{} returned {}: {}", endpoint, status, error_text);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_client_creation() {
        let client = BackendClient::new("http://localhost:8000/");
        assert_eq!(client.base_url(), "http://localhost:8000");
    }

    #[test]
    fn test_client_from_config() {
        let config = Config {
            backend_url: "http://127.0.0.1:9000".to_string(),
            request_timeout_secs: 3,
        };

        let client = BackendClient::from_config(&config).unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:9000");
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_an_error() {
        let client = BackendClient::with_timeout("http://127.0.0.1:1", Duration::from_secs(2)).unwrap();

        assert!(client.fetch_components().await.is_err());
        assert!(client.list_builds().await.is_err());
        assert!(client.seed_components().await.is_err());
    }
}
