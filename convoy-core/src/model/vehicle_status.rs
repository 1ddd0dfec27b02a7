use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// operational status of a fleet vehicle. the operations service has used
/// several vocabularies over time, so unknown values are kept verbatim
/// instead of failing the whole fleet fetch.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(from = "String", into = "String")]
pub enum VehicleStatus {
    Idle,
    EnRoute,
    Maintenance,
    Operational,
    MaintenanceDue,
    OutOfService,
    Other(String),
}

impl VehicleStatus {
    pub fn as_str(&self) -> &str {
        match self {
            VehicleStatus::Idle => "idle",
            VehicleStatus::EnRoute => "en_route",
            VehicleStatus::Maintenance => "maintenance",
            VehicleStatus::Operational => "operational",
            VehicleStatus::MaintenanceDue => "maintenance_due",
            VehicleStatus::OutOfService => "out_of_service",
            VehicleStatus::Other(s) => s.as_str(),
        }
    }

    /// vehicles that cannot be assigned to a convoy right now.
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            VehicleStatus::Maintenance | VehicleStatus::OutOfService
        )
    }
}

impl From<String> for VehicleStatus {
    fn from(value: String) -> Self {
        let normalized = value.trim().to_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "idle" => VehicleStatus::Idle,
            "en_route" => VehicleStatus::EnRoute,
            "maintenance" => VehicleStatus::Maintenance,
            "operational" => VehicleStatus::Operational,
            "maintenance_due" => VehicleStatus::MaintenanceDue,
            "out_of_service" => VehicleStatus::OutOfService,
            _ => VehicleStatus::Other(value),
        }
    }
}

impl From<VehicleStatus> for String {
    fn from(value: VehicleStatus) -> Self {
        value.as_str().to_string()
    }
}

impl Display for VehicleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod test {
    use super::VehicleStatus;

    #[test]
    fn test_parse_operations_vocabulary() {
        let parsed: Vec<VehicleStatus> =
            serde_json::from_str(r#"["OPERATIONAL", "MAINTENANCE_DUE", "OUT_OF_SERVICE", "en-route", "idle"]"#)
                .expect("test failed");
        assert_eq!(
            parsed,
            vec![
                VehicleStatus::Operational,
                VehicleStatus::MaintenanceDue,
                VehicleStatus::OutOfService,
                VehicleStatus::EnRoute,
                VehicleStatus::Idle,
            ]
        );
    }

    #[test]
    fn test_unknown_status_is_kept() {
        let parsed: VehicleStatus = serde_json::from_str(r#""REFUELING""#).expect("test failed");
        assert_eq!(parsed, VehicleStatus::Other(String::from("REFUELING")));
        assert_eq!(parsed.to_string(), "REFUELING");
    }
}
