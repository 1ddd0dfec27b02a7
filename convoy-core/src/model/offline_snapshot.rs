use super::{Checkpoint, PlannedRoute};

/// validated contents of the bulk offline-data bundle.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OfflineSnapshot {
    pub checkpoints: Vec<Checkpoint>,
    pub planned_routes: Vec<PlannedRoute>,
}
