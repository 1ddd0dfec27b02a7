use serde::{Deserialize, Serialize};
use uom::si::{
    f64::{Length, Time},
    length::kilometer,
    time::minute,
};

use super::{RiskLevel, RouteSegment, TariScore};

/// the primary route returned by the route-computation service. a route is
/// superseded by the next successful request, never merged with it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Route {
    pub segments: Vec<RouteSegment>,
    pub total_distance: Length,
    pub estimated_duration: Time,
    /// number of alternative routes offered alongside the primary route
    pub alternative_count: usize,
}

impl Route {
    pub fn new(segments: Vec<RouteSegment>, distance_km: f64, duration_mins: f64) -> Self {
        Self {
            segments,
            total_distance: Length::new::<kilometer>(distance_km),
            estimated_duration: Time::new::<minute>(duration_mins),
            alternative_count: 0,
        }
    }

    pub fn distance_km(&self) -> f64 {
        self.total_distance.get::<kilometer>()
    }

    pub fn duration_mins(&self) -> f64 {
        self.estimated_duration.get::<minute>()
    }

    /// distance as shown on the route report, e.g. `45.2 km`.
    pub fn distance_label(&self) -> String {
        format!("{:.1} km", self.distance_km())
    }

    /// estimated time as shown on the route report, e.g. `1h 12m`.
    pub fn duration_label(&self) -> String {
        let total = self.duration_mins().round() as i64;
        let (hours, mins) = (total / 60, total % 60);
        if hours > 0 {
            format!("{hours}h {mins:02}m")
        } else {
            format!("{mins}m")
        }
    }

    pub fn average_risk(&self) -> Option<f64> {
        if self.segments.is_empty() {
            return None;
        }
        let sum: u32 = self
            .segments
            .iter()
            .map(|s| s.tari_score.value() as u32)
            .sum();
        Some(sum as f64 / self.segments.len() as f64)
    }

    pub fn max_risk(&self) -> Option<TariScore> {
        self.segments.iter().map(|s| s.tari_score).max()
    }

    pub fn high_risk_segment_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|s| s.tari_score.risk_level() == RiskLevel::High)
            .count()
    }
}
