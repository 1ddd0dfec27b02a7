use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::HttpDashboardApi;

/// Serializable configuration for the HTTP collaborator client.
/// Builds to a [`HttpDashboardApi`]
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct HttpDashboardApiConfig {
    /// scheme, host and optional path prefix of the dashboard server
    pub base_url: String,
    /// per-request timeout in milliseconds. an expired request is handled
    /// like any other network failure.
    pub request_timeout_ms: u64,
}

impl Default for HttpDashboardApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::from("http://localhost:8000"),
            request_timeout_ms: 10_000,
        }
    }
}

impl HttpDashboardApiConfig {
    pub fn new(base_url: &str, request_timeout: Duration) -> Self {
        Self {
            base_url: base_url.to_string(),
            request_timeout_ms: u64::try_from(request_timeout.as_millis()).unwrap_or(u64::MAX),
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    pub fn build(&self) -> Result<HttpDashboardApi, String> {
        HttpDashboardApi::new(&self.base_url, self.request_timeout())
    }
}
