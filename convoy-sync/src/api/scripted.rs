//! an in-memory [`DashboardApi`] whose responses are queued up front. each
//! call is recorded before its (optional) delay elapses, so tests can assert
//! both which requests were issued and how overlapping calls interleave.
use std::{
    collections::{HashMap, VecDeque},
    sync::Mutex,
    time::Duration,
};

use convoy_core::{
    model::{Convoy, EntityId, FleetVehicle, HealthStatus, OfflineSnapshot, Route, SyncDelta},
    util::lock_ops,
    wire::{Endpoint, SmartRouteRequest, SyncRequest},
    DashboardError,
};

use super::DashboardApi;

/// a queued response and how long the call takes to produce it.
#[derive(Debug, Clone)]
pub struct Scripted<T> {
    pub result: Result<T, DashboardError>,
    pub delay: Duration,
}

impl<T> Scripted<T> {
    pub fn ok(value: T) -> Self {
        Self {
            result: Ok(value),
            delay: Duration::ZERO,
        }
    }

    pub fn err(error: DashboardError) -> Self {
        Self {
            result: Err(error),
            delay: Duration::ZERO,
        }
    }

    pub fn after(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

/// a request observed by the scripted collaborator.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiCall {
    OfflineData,
    Sync(SyncRequest),
    SmartRoute(SmartRouteRequest),
    ActiveConvoys,
    FleetStatus,
    HealthCheck,
}

impl ApiCall {
    pub fn endpoint(&self) -> Endpoint {
        match self {
            ApiCall::OfflineData => Endpoint::OfflineData,
            ApiCall::Sync(_) => Endpoint::Sync,
            ApiCall::SmartRoute(_) => Endpoint::SmartRoute,
            ApiCall::ActiveConvoys => Endpoint::ActiveConvoys,
            ApiCall::FleetStatus => Endpoint::FleetStatus,
            ApiCall::HealthCheck => Endpoint::HealthCheck,
        }
    }
}

#[derive(Default)]
pub struct ScriptedDashboardApi {
    offline_data: Mutex<VecDeque<Scripted<OfflineSnapshot>>>,
    sync: Mutex<VecDeque<Scripted<SyncDelta>>>,
    routes: Mutex<HashMap<(EntityId, EntityId), Scripted<Route>>>,
    active_convoys: Mutex<VecDeque<Scripted<Vec<Convoy>>>>,
    fleet_status: Mutex<VecDeque<Scripted<Vec<FleetVehicle>>>>,
    health_check: Mutex<VecDeque<Scripted<HealthStatus>>>,
    calls: Mutex<Vec<ApiCall>>,
}

impl ScriptedDashboardApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_offline_data(&self, response: Scripted<OfflineSnapshot>) {
        lock_ops::lock(&self.offline_data).push_back(response);
    }

    pub fn push_sync(&self, response: Scripted<SyncDelta>) {
        lock_ops::lock(&self.sync).push_back(response);
    }

    /// answers every route request between `origin` and `destination`.
    pub fn set_route(&self, origin: &str, destination: &str, response: Scripted<Route>) {
        lock_ops::lock(&self.routes).insert((origin.into(), destination.into()), response);
    }

    pub fn push_active_convoys(&self, response: Scripted<Vec<Convoy>>) {
        lock_ops::lock(&self.active_convoys).push_back(response);
    }

    pub fn push_fleet_status(&self, response: Scripted<Vec<FleetVehicle>>) {
        lock_ops::lock(&self.fleet_status).push_back(response);
    }

    pub fn push_health_check(&self, response: Scripted<HealthStatus>) {
        lock_ops::lock(&self.health_check).push_back(response);
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        lock_ops::lock(&self.calls).clone()
    }

    pub fn call_count(&self, endpoint: Endpoint) -> usize {
        lock_ops::lock(&self.calls)
            .iter()
            .filter(|c| c.endpoint() == endpoint)
            .count()
    }

    fn record(&self, call: ApiCall) {
        lock_ops::lock(&self.calls).push(call);
    }

    async fn respond<T>(endpoint: Endpoint, next: Option<Scripted<T>>) -> Result<T, DashboardError> {
        match next {
            None => Err(DashboardError::network(endpoint, "no scripted response")),
            Some(scripted) => {
                if !scripted.delay.is_zero() {
                    tokio::time::sleep(scripted.delay).await;
                }
                scripted.result
            }
        }
    }
}

impl DashboardApi for ScriptedDashboardApi {
    async fn offline_data(&self) -> Result<OfflineSnapshot, DashboardError> {
        self.record(ApiCall::OfflineData);
        let next = lock_ops::lock(&self.offline_data).pop_front();
        Self::respond(Endpoint::OfflineData, next).await
    }

    async fn sync(&self, request: &SyncRequest) -> Result<SyncDelta, DashboardError> {
        self.record(ApiCall::Sync(request.clone()));
        let next = lock_ops::lock(&self.sync).pop_front();
        Self::respond(Endpoint::Sync, next).await
    }

    async fn smart_route(&self, request: &SmartRouteRequest) -> Result<Route, DashboardError> {
        self.record(ApiCall::SmartRoute(request.clone()));
        let key = (
            request.start_checkpoint_id.clone(),
            request.end_checkpoint_id.clone(),
        );
        let next = lock_ops::lock(&self.routes).get(&key).cloned();
        Self::respond(Endpoint::SmartRoute, next).await
    }

    async fn active_convoys(&self) -> Result<Vec<Convoy>, DashboardError> {
        self.record(ApiCall::ActiveConvoys);
        let next = lock_ops::lock(&self.active_convoys).pop_front();
        Self::respond(Endpoint::ActiveConvoys, next).await
    }

    async fn fleet_status(&self) -> Result<Vec<FleetVehicle>, DashboardError> {
        self.record(ApiCall::FleetStatus);
        let next = lock_ops::lock(&self.fleet_status).pop_front();
        Self::respond(Endpoint::FleetStatus, next).await
    }

    async fn health_check(&self) -> Result<HealthStatus, DashboardError> {
        self.record(ApiCall::HealthCheck);
        let next = lock_ops::lock(&self.health_check).pop_front();
        Self::respond(Endpoint::HealthCheck, next).await
    }
}
