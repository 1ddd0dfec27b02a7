use geo::{Coord, LineString};
use serde::{Deserialize, Serialize};

use super::{EntityId, TariScore};

/// one leg of a computed route. `from`/`to` normally hold checkpoint ids but
/// may carry free-text waypoint names, which are displayed as-is.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RouteSegment {
    pub from: EntityId,
    pub to: EntityId,
    /// map coordinates (x = longitude, y = latitude), possibly empty
    pub path: LineString<f64>,
    pub tari_score: TariScore,
}

impl RouteSegment {
    pub fn new(from: &str, to: &str, path: Vec<Coord<f64>>, tari_score: TariScore) -> Self {
        Self {
            from: EntityId::from(from),
            to: EntityId::from(to),
            path: LineString::new(path),
            tari_score,
        }
    }

    pub fn has_path(&self) -> bool {
        self.path.0.len() > 1
    }
}
