use convoy_core::model::{Checkpoint, PlannedRoute};
use serde::Serialize;

/// detail panel for a single checkpoint.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CheckpointDetail {
    pub checkpoint: Checkpoint,
    /// true when the displayed route starts, ends or passes through here
    pub on_displayed_route: bool,
    /// planned routes known to the cache, for context
    pub planned_route_count: usize,
}

impl CheckpointDetail {
    pub fn new(checkpoint: Checkpoint, on_displayed_route: bool, planned: &[PlannedRoute]) -> Self {
        Self {
            checkpoint,
            on_displayed_route,
            planned_route_count: planned.len(),
        }
    }
}
