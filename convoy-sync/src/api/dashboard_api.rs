use convoy_core::{
    model::{Convoy, FleetVehicle, HealthStatus, OfflineSnapshot, Route, SyncDelta},
    wire::{SmartRouteRequest, SyncRequest},
    DashboardError,
};

/// contract of the collaborator services consumed by the dashboard. every
/// method is one HTTP exchange and a suspension point; implementations
/// return validated domain values or a [`DashboardError`].
#[allow(async_fn_in_trait)]
pub trait DashboardApi {
    /// bulk checkpoint and route bundle
    async fn offline_data(&self) -> Result<OfflineSnapshot, DashboardError>;

    /// checkpoints changed since `request.last_sync_timestamp`
    async fn sync(&self, request: &SyncRequest) -> Result<SyncDelta, DashboardError>;

    /// route computation and risk scoring between two checkpoints
    async fn smart_route(&self, request: &SmartRouteRequest) -> Result<Route, DashboardError>;

    async fn active_convoys(&self) -> Result<Vec<Convoy>, DashboardError>;

    async fn fleet_status(&self) -> Result<Vec<FleetVehicle>, DashboardError>;

    async fn health_check(&self) -> Result<HealthStatus, DashboardError>;
}
