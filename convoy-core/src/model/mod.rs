mod checkpoint;
mod convoy;
mod convoy_status;
mod entity_id;
mod fleet_vehicle;
mod health_status;
mod offline_snapshot;
mod planned_route;
mod risk_level;
mod route;
mod route_segment;
mod sync_cursor;
mod sync_delta;
mod tari_score;
mod vehicle_status;

pub use checkpoint::Checkpoint;
pub use convoy::Convoy;
pub use convoy_status::ConvoyStatus;
pub use entity_id::EntityId;
pub use fleet_vehicle::FleetVehicle;
pub use health_status::HealthStatus;
pub use offline_snapshot::OfflineSnapshot;
pub use planned_route::PlannedRoute;
pub use risk_level::RiskLevel;
pub use route::Route;
pub use route_segment::RouteSegment;
pub use sync_cursor::SyncCursor;
pub use sync_delta::SyncDelta;
pub use tari_score::TariScore;
pub use vehicle_status::VehicleStatus;
