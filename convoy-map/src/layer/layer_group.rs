use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// the map layer groups. each redraw owns exactly one group and clears only
/// that group before repopulating it.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum LayerGroup {
    /// checkpoint markers plus comms relay markers while that overlay is on
    Checkpoints,
    RouteSegments,
    Convoys,
}

impl LayerGroup {
    pub const ALL: [LayerGroup; 3] = [
        LayerGroup::Checkpoints,
        LayerGroup::RouteSegments,
        LayerGroup::Convoys,
    ];
}

impl Display for LayerGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            LayerGroup::Checkpoints => "checkpoints",
            LayerGroup::RouteSegments => "route_segments",
            LayerGroup::Convoys => "convoys",
        };
        write!(f, "{s}")
    }
}
