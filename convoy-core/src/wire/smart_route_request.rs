use serde::{Deserialize, Serialize};

use crate::model::EntityId;

/// `POST /navigation/api/get-smart-route/`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SmartRouteRequest {
    pub start_checkpoint_id: EntityId,
    pub end_checkpoint_id: EntityId,
}
