use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{EntityId, VehicleStatus};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FleetVehicle {
    pub id: EntityId,
    pub name: String,
    pub status: VehicleStatus,
    #[serde(default, alias = "operatingHours")]
    pub operating_hours: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_maintenance_date: Option<NaiveDate>,
}
