//! Local mirror of the checkpoint network and fleet data, reconciled against
//! the navigation and operations services over an unreliable link.
pub mod api;
pub mod cache;
pub mod health;

pub use api::{DashboardApi, HttpDashboardApi, HttpDashboardApiConfig};
pub use cache::{CacheSnapshot, FleetPanel, ReconcileOutcome, SyncCache, SyncEvent};
