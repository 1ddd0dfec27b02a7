use convoy_core::model::EntityId;

use crate::{
    overlay::Overlay,
    panel::{AnalyticsPanel, CheckpointDetail, CheckpointOption, RoutePanel, StatusMessage},
    session::SessionPhase,
};

/// everything a renderer needs besides the map layers themselves.
#[derive(Debug, Clone, PartialEq)]
pub struct MapView {
    pub phase: SessionPhase,
    /// inline validation or route error text
    pub notice: Option<String>,
    pub origin: Option<EntityId>,
    pub destination: Option<EntityId>,
    pub options: Vec<CheckpointOption>,
    pub route: Option<RoutePanel>,
    pub overlays: Vec<Overlay>,
    /// present while the intel analytics overlay is on
    pub analytics: Option<AnalyticsPanel>,
    /// set when the last convoy fetch for the active overlay failed
    pub convoy_notice: Option<String>,
    /// the current status line, if it has not expired
    pub status: Option<StatusMessage>,
    pub online: bool,
    /// cached data is being served after a failed operation
    pub degraded: bool,
    pub detail: Option<CheckpointDetail>,
}
