use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{Checkpoint, SyncDelta};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SyncResponse {
    pub current_server_time: DateTime<Utc>,
    #[serde(default)]
    pub updated_checkpoints: Vec<Checkpoint>,
}

impl SyncResponse {
    /// records are range-checked when the cache applies them, so one bad
    /// checkpoint never fails the whole delta.
    pub fn into_domain(self) -> SyncDelta {
        SyncDelta {
            server_time: self.current_server_time,
            updated_checkpoints: self.updated_checkpoints,
        }
    }
}
