use convoy_core::{DashboardError, ValidationError};

use crate::panel::RoutePanel;

/// what happened to a route request.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteOutcome {
    /// the route is now on the map
    Displayed(RoutePanel),
    /// the selection failed validation; nothing was sent
    Rejected(ValidationError),
    /// the collaborator failed; any previous route stays visible
    Failed(DashboardError),
    /// a newer selection took over before the response arrived
    Superseded,
}
