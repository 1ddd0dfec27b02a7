use chrono::{DateTime, Utc};
use convoy_core::{model::FleetVehicle, DashboardError};
use serde::{Deserialize, Serialize};

/// what the fleet panel shows. a failed refresh never hides the last good
/// fleet; it is shown as stale alongside the error.
#[derive(Debug, Clone, PartialEq)]
pub enum FleetPanel {
    /// no fleet data has ever been fetched successfully
    NoData { error: Option<DashboardError> },
    Current {
        vehicles: Vec<FleetVehicle>,
        fetched_at: DateTime<Utc>,
    },
    Stale {
        vehicles: Vec<FleetVehicle>,
        fetched_at: DateTime<Utc>,
        error: DashboardError,
    },
}

impl FleetPanel {
    pub fn vehicles(&self) -> &[FleetVehicle] {
        match self {
            FleetPanel::NoData { .. } => &[],
            FleetPanel::Current { vehicles, .. } => vehicles,
            FleetPanel::Stale { vehicles, .. } => vehicles,
        }
    }
}

/// last good fleet fetch, kept for snapshots.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FleetSnapshot {
    pub vehicles: Vec<FleetVehicle>,
    pub fetched_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct FleetState {
    last_good: Option<FleetSnapshot>,
    last_error: Option<DashboardError>,
}

impl FleetState {
    pub fn loaded(&mut self, vehicles: Vec<FleetVehicle>, fetched_at: DateTime<Utc>) {
        self.last_good = Some(FleetSnapshot {
            vehicles,
            fetched_at,
        });
        self.last_error = None;
    }

    pub fn failed(&mut self, error: DashboardError) {
        self.last_error = Some(error);
    }

    pub fn restore(&mut self, snapshot: Option<FleetSnapshot>) {
        self.last_good = snapshot;
        self.last_error = None;
    }

    pub fn last_good(&self) -> Option<&FleetSnapshot> {
        self.last_good.as_ref()
    }

    pub fn panel(&self) -> FleetPanel {
        match (&self.last_good, &self.last_error) {
            (None, error) => FleetPanel::NoData {
                error: error.clone(),
            },
            (Some(good), None) => FleetPanel::Current {
                vehicles: good.vehicles.clone(),
                fetched_at: good.fetched_at,
            },
            (Some(good), Some(error)) => FleetPanel::Stale {
                vehicles: good.vehicles.clone(),
                fetched_at: good.fetched_at,
                error: error.clone(),
            },
        }
    }
}
