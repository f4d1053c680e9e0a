//! HTTP transport for provider requests.

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::USER_AGENT;
use std::time::Duration;
use stockscrape_types::{Result, ScrapeError};
use tracing::debug;

use crate::url::BASE_URL;
use crate::user_agent::{USER_AGENTS, random_user_agent};

/// Configuration for provider HTTP access.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Request timeout.
    pub timeout: Duration,
    /// Connection timeout (separate from request timeout).
    pub connect_timeout: Duration,
    /// Chart endpoint base URL.
    pub base_url: String,
    /// User agents to rotate through.
    pub user_agents: Vec<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            base_url: BASE_URL.to_string(),
            user_agents: USER_AGENTS.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}

impl ClientConfig {
    /// Sets the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the chart endpoint base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Replaces the user agent pool.
    #[must_use]
    pub fn with_user_agents(mut self, user_agents: Vec<String>) -> Self {
        self.user_agents = user_agents;
        self
    }

    /// Picks a user agent for the next request.
    #[must_use]
    pub fn user_agent(&self) -> &str {
        random_user_agent(&self.user_agents)
    }
}

/// Status and body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body.
    pub body: String,
}

impl HttpResponse {
    /// Creates a response.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Returns true for 2xx statuses.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Transport used by datasources to issue GET requests.
///
/// Any status is a successful exchange; only failures to obtain a response
/// are errors.
#[async_trait]
pub trait Transport: Send + Sync + std::fmt::Debug {
    /// Issues a GET request carrying the given `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`ScrapeError::Http`] if no response could be obtained.
    async fn get(&self, url: &str, user_agent: &str) -> Result<HttpResponse>;
}

/// [`Transport`] backed by a reqwest client.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Creates a transport with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .tcp_nodelay(true)
            .gzip(true)
            .build()
            .map_err(|e| ScrapeError::Http(e.to_string()))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, url: &str, user_agent: &str) -> Result<HttpResponse> {
        let response = self
            .client
            .get(url)
            .header(USER_AGENT, user_agent)
            .send()
            .await
            .map_err(|e| ScrapeError::Http(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ScrapeError::Http(e.to_string()))?;
        debug!(status, bytes = body.len(), "received response");

        Ok(HttpResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
        assert_eq!(config.base_url, BASE_URL);
        assert_eq!(config.user_agents.len(), USER_AGENTS.len());
    }

    #[test]
    fn test_client_config_builders() {
        let config = ClientConfig::default()
            .with_timeout(Duration::from_secs(5))
            .with_base_url("http://127.0.0.1:9/chart")
            .with_user_agents(vec!["probe/1.0".to_string()]);
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.base_url, "http://127.0.0.1:9/chart");
        assert_eq!(config.user_agent(), "probe/1.0");
    }

    #[test]
    fn test_response_success_range() {
        assert!(HttpResponse::new(200, "").is_success());
        assert!(HttpResponse::new(204, "").is_success());
        assert!(!HttpResponse::new(301, "").is_success());
        assert!(!HttpResponse::new(404, "").is_success());
        assert!(!HttpResponse::new(500, "").is_success());
    }

    #[tokio::test]
    async fn test_transport_creation() {
        let transport = ReqwestTransport::new(&ClientConfig::default());
        assert!(transport.is_ok());
    }
}
