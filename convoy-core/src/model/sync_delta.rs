use chrono::{DateTime, Utc};

use super::Checkpoint;

/// validated result of a delta sync: every checkpoint changed since the
/// requested cursor, plus the server time to use as the next cursor.
#[derive(Debug, Clone, PartialEq)]
pub struct SyncDelta {
    pub server_time: DateTime<Utc>,
    pub updated_checkpoints: Vec<Checkpoint>,
}
