use serde::{Deserialize, Serialize};

use super::EntityId;

/// a route stored by the navigation service and shipped with the offline
/// bundle. only the summary fields are kept locally.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PlannedRoute {
    pub id: EntityId,
    #[serde(default)]
    pub name: String,
    /// kilometers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_distance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_duration_mins: Option<i64>,
}
