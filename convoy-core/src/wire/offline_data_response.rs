use serde::{Deserialize, Serialize};

use crate::model::{Checkpoint, OfflineSnapshot, PlannedRoute};

/// `GET /navigation/api/offline-data/`
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct OfflineDataResponse {
    pub checkpoints: Vec<Checkpoint>,
    #[serde(default)]
    pub routes: Vec<PlannedRoute>,
}

impl OfflineDataResponse {
    pub fn into_domain(self) -> OfflineSnapshot {
        OfflineSnapshot {
            checkpoints: self.checkpoints,
            planned_routes: self.routes,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        wire::{decode, Endpoint},
        DashboardError,
    };

    #[test]
    fn test_offline_bundle_with_nested_routes() {
        let body = r#"{
            "checkpoints": [
                {"id": "a", "name": "Base Alpha", "latitude": 34.1, "longitude": 69.1, "is_choke_point": false},
                {"id": "b", "name": "Outpost Sierra", "latitude": 34.3, "longitude": 69.4, "is_choke_point": true}
            ],
            "routes": [
                {
                    "id": "r1",
                    "name": "MSR Tampa",
                    "start_checkpoint": {"id": "a", "name": "Base Alpha", "latitude": 34.1, "longitude": 69.1},
                    "end_checkpoint": {"id": "b", "name": "Outpost Sierra", "latitude": 34.3, "longitude": 69.4},
                    "total_distance": 45.2,
                    "estimated_duration_mins": 72,
                    "segments": []
                }
            ]
        }"#;
        let snapshot = decode::<OfflineDataResponse>(Endpoint::OfflineData, body)
            .map(OfflineDataResponse::into_domain)
            .expect("test failed");
        assert_eq!(snapshot.checkpoints.len(), 2);
        assert_eq!(snapshot.planned_routes.len(), 1);
        assert_eq!(snapshot.planned_routes[0].total_distance, Some(45.2));
    }

    #[test]
    fn test_missing_checkpoints_is_malformed() {
        let result = decode::<OfflineDataResponse>(Endpoint::OfflineData, r#"{"routes": []}"#);
        assert!(matches!(
            result,
            Err(DashboardError::MalformedResponseError { .. })
        ));
    }

    #[test]
    fn test_invalid_coordinates_are_left_to_the_cache() {
        let body = r#"{"checkpoints": [
            {"id": "a", "name": "Base Alpha", "latitude": 34.1, "longitude": 69.1},
            {"id": "x", "name": "X", "latitude": 95.0, "longitude": 0.0}
        ]}"#;
        let snapshot = decode::<OfflineDataResponse>(Endpoint::OfflineData, body)
            .map(OfflineDataResponse::into_domain)
            .expect("test failed");
        assert_eq!(snapshot.checkpoints.len(), 2);
    }
}
