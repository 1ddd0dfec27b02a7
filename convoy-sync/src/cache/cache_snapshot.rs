use convoy_core::model::{Checkpoint, PlannedRoute, SyncCursor};
use serde::{Deserialize, Serialize};

use super::FleetSnapshot;

/// serializable copy of the cache, used to serve cached data when the
/// server is unreachable at start-up.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct CacheSnapshot {
    pub cursor: SyncCursor,
    pub checkpoints: Vec<Checkpoint>,
    #[serde(default)]
    pub planned_routes: Vec<PlannedRoute>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fleet: Option<FleetSnapshot>,
}
