use std::fmt::Display;

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
}

/// the collaborator endpoints consumed by the dashboard.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Endpoint {
    OfflineData,
    Sync,
    SmartRoute,
    ActiveConvoys,
    FleetStatus,
    HealthCheck,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::OfflineData => "/navigation/api/offline-data/",
            Endpoint::Sync => "/navigation/api/sync/",
            Endpoint::SmartRoute => "/navigation/api/get-smart-route/",
            Endpoint::ActiveConvoys => "/operations/api/active-convoys/",
            Endpoint::FleetStatus => "/operations/api/fleet-status/",
            Endpoint::HealthCheck => "/api/health-check/",
        }
    }

    pub fn method(&self) -> HttpMethod {
        match self {
            Endpoint::Sync | Endpoint::SmartRoute => HttpMethod::Post,
            _ => HttpMethod::Get,
        }
    }
}

impl Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let method = match self.method() {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        };
        write!(f, "{method} {}", self.path())
    }
}
