use convoy_core::model::{Convoy, Route, TariScore};
use convoy_sync::FleetPanel;
use itertools::Itertools;
use serde::Serialize;

/// intel analytics overlay content: a risk digest of the displayed route and
/// a census of the fleet and active convoys.
#[derive(Serialize, Debug, Clone, PartialEq, Default)]
pub struct AnalyticsPanel {
    pub segment_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_risk: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_risk: Option<TariScore>,
    pub high_risk_segments: usize,
    /// vehicle count per status, ordered by status name
    pub fleet_status_counts: Vec<(String, usize)>,
    /// true when the fleet figures come from a failed refresh's last good data
    pub fleet_stale: bool,
    pub convoy_count: usize,
}

impl AnalyticsPanel {
    pub fn build(route: Option<&Route>, fleet: &FleetPanel, convoys: &[Convoy]) -> Self {
        let fleet_status_counts = fleet
            .vehicles()
            .iter()
            .counts_by(|v| v.status.as_str().to_string())
            .into_iter()
            .sorted()
            .collect_vec();
        Self {
            segment_count: route.map(|r| r.segments.len()).unwrap_or_default(),
            average_risk: route.and_then(Route::average_risk),
            max_risk: route.and_then(Route::max_risk),
            high_risk_segments: route
                .map(Route::high_risk_segment_count)
                .unwrap_or_default(),
            fleet_status_counts,
            fleet_stale: matches!(fleet, FleetPanel::Stale { .. }),
            convoy_count: convoys.len(),
        }
    }
}

#[cfg(test)]
mod test {
    use chrono::Utc;
    use convoy_core::model::{FleetVehicle, RouteSegment, VehicleStatus};

    use super::*;

    fn vehicle(id: &str, status: VehicleStatus) -> FleetVehicle {
        FleetVehicle {
            id: id.into(),
            name: id.to_string(),
            status,
            operating_hours: 0.0,
            last_maintenance_date: None,
        }
    }

    #[test]
    fn test_build() {
        let route = Route::new(
            vec![
                RouteSegment::new("1", "2", vec![], TariScore::try_from(5).expect("test failed")),
                RouteSegment::new("2", "3", vec![], TariScore::try_from(2).expect("test failed")),
            ],
            10.0,
            20.0,
        );
        let fleet = FleetPanel::Current {
            vehicles: vec![
                vehicle("a", VehicleStatus::Operational),
                vehicle("b", VehicleStatus::MaintenanceDue),
                vehicle("c", VehicleStatus::Operational),
            ],
            fetched_at: Utc::now(),
        };

        let panel = AnalyticsPanel::build(Some(&route), &fleet, &[]);

        assert_eq!(panel.segment_count, 2);
        assert_eq!(panel.high_risk_segments, 1);
        assert_eq!(panel.max_risk, TariScore::try_from(5).ok());
        assert_eq!(
            panel.fleet_status_counts,
            vec![
                (String::from("maintenance_due"), 1),
                (String::from("operational"), 2)
            ]
        );
        assert!(!panel.fleet_stale);
    }

    #[test]
    fn test_build_without_route_or_fleet() {
        let panel = AnalyticsPanel::build(None, &FleetPanel::NoData { error: None }, &[]);
        assert_eq!(panel, AnalyticsPanel::default());
    }
}
