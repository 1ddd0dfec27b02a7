use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::SyncCursor;

/// `POST /navigation/api/sync/`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SyncRequest {
    pub last_sync_timestamp: DateTime<Utc>,
}

impl From<SyncCursor> for SyncRequest {
    fn from(value: SyncCursor) -> Self {
        Self {
            last_sync_timestamp: value.timestamp(),
        }
    }
}
