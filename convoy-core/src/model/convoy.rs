use geo::Coord;
use serde::{Deserialize, Serialize};

use super::{ConvoyStatus, EntityId, FleetVehicle};
use crate::util::geo_ops;

/// a convoy currently tracked by the operations service. positions are
/// time-sensitive and are never served from a warm cache.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Convoy {
    pub id: EntityId,
    pub name: String,
    pub status: ConvoyStatus,
    #[serde(alias = "currentLatitude")]
    pub current_latitude: f64,
    #[serde(alias = "currentLongitude")]
    pub current_longitude: f64,
    #[serde(default)]
    pub vehicles: Vec<FleetVehicle>,
}

impl Convoy {
    pub fn coord(&self) -> Coord<f64> {
        geo_ops::coord_from_lat_lon(self.current_latitude, self.current_longitude)
    }

    pub fn validate(&self) -> Result<(), String> {
        if !geo_ops::is_valid_lat_lon(self.current_latitude, self.current_longitude) {
            return Err(format!(
                "convoy {} has invalid position ({}, {})",
                self.id, self.current_latitude, self.current_longitude
            ));
        }
        Ok(())
    }
}
