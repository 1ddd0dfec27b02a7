use convoy_core::model::{EntityId, TariScore};
use geo::LineString;
use serde::{Deserialize, Serialize};

use super::tari_palette;

/// one rendered route segment.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RouteLine {
    pub from: EntityId,
    pub to: EntityId,
    pub label: String,
    pub path: LineString<f64>,
    pub tari_score: TariScore,
    /// hex color taken from the TARI palette
    pub color: String,
}

impl RouteLine {
    pub fn new(
        from: EntityId,
        to: EntityId,
        label: String,
        path: LineString<f64>,
        tari_score: TariScore,
    ) -> Self {
        Self {
            from,
            to,
            label,
            path,
            tari_score,
            color: tari_palette::color_for(tari_score).to_string(),
        }
    }
}
