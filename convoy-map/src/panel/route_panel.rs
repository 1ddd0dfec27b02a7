use std::fmt::Display;

use convoy_core::model::{EntityId, RiskLevel, Route, TariScore};
use serde::Serialize;

/// one row of the route report.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SegmentEntry {
    pub from: EntityId,
    pub to: EntityId,
    pub from_name: String,
    pub to_name: String,
    pub tari_score: TariScore,
    pub risk: RiskLevel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advisory: Option<&'static str>,
}

impl Display for SegmentEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} -> {}, Risk: {}",
            self.from_name, self.to_name, self.tari_score
        )
    }
}

/// side panel content for a displayed route.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct RoutePanel {
    pub origin_name: String,
    pub destination_name: String,
    pub entries: Vec<SegmentEntry>,
    pub distance: String,
    pub duration: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_risk: Option<f64>,
    pub alternative_count: usize,
}

impl RoutePanel {
    /// builds the panel, naming each endpoint with `name_of`. ids that do not
    /// resolve to a checkpoint are shown as-is.
    pub fn build(
        origin: &EntityId,
        destination: &EntityId,
        route: &Route,
        name_of: impl Fn(&EntityId) -> String,
    ) -> Self {
        let entries = route
            .segments
            .iter()
            .map(|segment| SegmentEntry {
                from: segment.from.clone(),
                to: segment.to.clone(),
                from_name: name_of(&segment.from),
                to_name: name_of(&segment.to),
                tari_score: segment.tari_score,
                risk: segment.tari_score.risk_level(),
                advisory: segment.tari_score.advisory(),
            })
            .collect();
        Self {
            origin_name: name_of(origin),
            destination_name: name_of(destination),
            entries,
            distance: route.distance_label(),
            duration: route.duration_label(),
            average_risk: route.average_risk(),
            alternative_count: route.alternative_count,
        }
    }
}
