use std::time::Duration;

use convoy_core::{
    model::{Convoy, FleetVehicle, HealthStatus, OfflineSnapshot, Route, SyncDelta},
    wire::{
        self, Endpoint, HealthResponse, OfflineDataResponse, SmartRouteRequest,
        SmartRouteResponse, SyncRequest, SyncResponse,
    },
    DashboardError,
};
use reqwest::{Client, RequestBuilder, Url};
use serde::{de::DeserializeOwned, Serialize};

use super::DashboardApi;

/// [`DashboardApi`] over HTTP/JSON using a shared reqwest client.
#[derive(Debug, Clone)]
pub struct HttpDashboardApi {
    client: Client,
    base_url: String,
}

impl HttpDashboardApi {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, String> {
        let parsed = Url::parse(base_url).map_err(|e| format!("invalid base url '{base_url}': {e}"))?;
        if parsed.cannot_be_a_base() {
            return Err(format!("base url '{base_url}' cannot hold endpoint paths"));
        }
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| format!("failure building http client: {e}"))?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }

    async fn get<T: DeserializeOwned>(&self, endpoint: Endpoint) -> Result<T, DashboardError> {
        let request = self.client.get(self.url(endpoint));
        self.execute(endpoint, request).await
    }

    async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        body: &B,
    ) -> Result<T, DashboardError> {
        let request = self.client.post(self.url(endpoint)).json(body);
        self.execute(endpoint, request).await
    }

    /// sends the request and classifies the outcome: transport failures
    /// (including timeouts) become network errors, non-2xx statuses become
    /// server errors, and undecodable bodies become malformed responses.
    async fn execute<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        request: RequestBuilder,
    ) -> Result<T, DashboardError> {
        log::debug!("calling {endpoint}");
        let response = request
            .send()
            .await
            .map_err(|e| DashboardError::network(endpoint, e))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| DashboardError::network(endpoint, e))?;
        if !status.is_success() {
            return Err(DashboardError::ServerError {
                endpoint,
                status: status.as_u16(),
                message: wire::error_message(&body),
            });
        }
        wire::decode(endpoint, &body)
    }
}

impl DashboardApi for HttpDashboardApi {
    async fn offline_data(&self) -> Result<OfflineSnapshot, DashboardError> {
        let response: OfflineDataResponse = self.get(Endpoint::OfflineData).await?;
        Ok(response.into_domain())
    }

    async fn sync(&self, request: &SyncRequest) -> Result<SyncDelta, DashboardError> {
        let response: SyncResponse = self.post(Endpoint::Sync, request).await?;
        Ok(response.into_domain())
    }

    async fn smart_route(&self, request: &SmartRouteRequest) -> Result<Route, DashboardError> {
        let response: SmartRouteResponse = self.post(Endpoint::SmartRoute, request).await?;
        response.into_domain()
    }

    async fn active_convoys(&self) -> Result<Vec<Convoy>, DashboardError> {
        self.get(Endpoint::ActiveConvoys).await
    }

    async fn fleet_status(&self) -> Result<Vec<FleetVehicle>, DashboardError> {
        self.get(Endpoint::FleetStatus).await
    }

    async fn health_check(&self) -> Result<HealthStatus, DashboardError> {
        let response: HealthResponse = self.get(Endpoint::HealthCheck).await?;
        Ok(response.into_domain())
    }
}

#[cfg(test)]
mod test {
    use std::time::Duration;

    use super::HttpDashboardApi;
    use convoy_core::wire::Endpoint;

    #[test]
    fn test_url_keeps_path_prefix() {
        let api = HttpDashboardApi::new("http://10.0.0.5:8000/ops/", Duration::from_secs(1))
            .expect("test failed");
        assert_eq!(
            api.url(Endpoint::Sync),
            "http://10.0.0.5:8000/ops/navigation/api/sync/"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(HttpDashboardApi::new("not a url", Duration::from_secs(1)).is_err());
    }
}
