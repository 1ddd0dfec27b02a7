use chrono::{DateTime, Utc};
use geo::Coord;
use serde::{Deserialize, Serialize};

use super::EntityId;
use crate::util::geo_ops;

/// a named waypoint of the checkpoint network, optionally hosting a
/// communications relay.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Checkpoint {
    pub id: EntityId,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default, alias = "isCommsRelay")]
    pub is_comms_relay: bool,
    /// known traffic choke point
    #[serde(default, alias = "isChokePoint")]
    pub is_choke_point: bool,
    /// server modification time, when the service supplies one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Checkpoint {
    pub fn new(id: impl Into<EntityId>, name: &str, latitude: f64, longitude: f64) -> Self {
        Self {
            id: id.into(),
            name: name.to_string(),
            latitude,
            longitude,
            is_comms_relay: false,
            is_choke_point: false,
            updated_at: None,
        }
    }

    pub fn with_comms_relay(mut self) -> Self {
        self.is_comms_relay = true;
        self
    }

    pub fn coord(&self) -> Coord<f64> {
        geo_ops::coord_from_lat_lon(self.latitude, self.longitude)
    }

    /// decides whether this record may replace `cached`. records only lose
    /// when both carry modification times and this one is older; without
    /// timestamps the most recently synced record wins.
    pub fn supersedes(&self, cached: &Checkpoint) -> bool {
        match (self.updated_at, cached.updated_at) {
            (Some(incoming), Some(current)) => incoming >= current,
            _ => true,
        }
    }

    /// boundary validation applied to every checkpoint received from the
    /// navigation service.
    pub fn validate(&self) -> Result<(), String> {
        if self.id.is_empty() {
            return Err(format!("checkpoint '{}' has an empty id", self.name));
        }
        if !geo_ops::is_valid_lat_lon(self.latitude, self.longitude) {
            return Err(format!(
                "checkpoint {} has invalid coordinates ({}, {})",
                self.id, self.latitude, self.longitude
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use chrono::{TimeZone, Utc};

    use super::Checkpoint;

    #[test]
    fn test_deserialize_navigation_payload() {
        let json = r#"{
            "id": "c0a8",
            "name": "Outpost Sierra",
            "latitude": 34.51,
            "longitude": 69.18,
            "is_choke_point": true
        }"#;
        let cp: Checkpoint = serde_json::from_str(json).expect("test failed");
        assert!(cp.is_choke_point);
        assert!(!cp.is_comms_relay);
        assert!(cp.updated_at.is_none());
    }

    #[test]
    fn test_deserialize_camel_case_relay_flag() {
        let json = r#"{"id": 1, "name": "Relay Hill", "latitude": 1.0, "longitude": 2.0, "isCommsRelay": true}"#;
        let cp: Checkpoint = serde_json::from_str(json).expect("test failed");
        assert!(cp.is_comms_relay);
        assert_eq!(cp.id.as_str(), "1");
    }

    #[test]
    fn test_supersedes_uses_timestamps_when_both_present() {
        let mut older = Checkpoint::new("1", "Base Alpha", 0.0, 0.0);
        let mut newer = older.clone();
        older.updated_at = Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        newer.updated_at = Some(Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap());
        assert!(newer.supersedes(&older));
        assert!(!older.supersedes(&newer));
    }

    #[test]
    fn test_supersedes_without_timestamps_is_last_sync_wins() {
        let mut cached = Checkpoint::new("1", "Base Alpha", 0.0, 0.0);
        cached.updated_at = Some(Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap());
        let incoming = Checkpoint::new("1", "Base Alpha (moved)", 0.1, 0.1);
        assert!(incoming.supersedes(&cached));
    }

    #[test]
    fn test_validate_rejects_bad_coordinates() {
        let cp = Checkpoint::new("1", "Nowhere", 123.0, 0.0);
        assert!(cp.validate().is_err());
    }
}
