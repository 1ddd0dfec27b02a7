use serde::{Deserialize, Serialize};

use super::Endpoint;
use crate::{
    model::{EntityId, Route, RouteSegment, TariScore},
    util::geo_ops,
    DashboardError,
};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SmartRouteResponse {
    pub primary_route: PrimaryRouteBody,
    #[serde(default)]
    pub alternative_routes: Vec<serde_json::Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PrimaryRouteBody {
    pub segments: Vec<SegmentBody>,
    pub total_distance_km: f64,
    pub estimated_duration_mins: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SegmentBody {
    pub from: EntityId,
    pub to: EntityId,
    /// `[latitude, longitude]` pairs. older route services omit the path.
    #[serde(default)]
    pub path: Vec<[f64; 2]>,
    pub tari_score: TariScore,
}

impl SmartRouteResponse {
    pub fn into_domain(self) -> Result<Route, DashboardError> {
        let malformed = |msg: String| DashboardError::malformed(Endpoint::SmartRoute, msg);
        let body = self.primary_route;
        if body.segments.is_empty() {
            return Err(malformed(String::from("primary_route has no segments")));
        }
        if !body.total_distance_km.is_finite() || body.total_distance_km < 0.0 {
            return Err(malformed(format!(
                "invalid total_distance_km {}",
                body.total_distance_km
            )));
        }
        if !body.estimated_duration_mins.is_finite() || body.estimated_duration_mins < 0.0 {
            return Err(malformed(format!(
                "invalid estimated_duration_mins {}",
                body.estimated_duration_mins
            )));
        }

        let segments = body
            .segments
            .into_iter()
            .enumerate()
            .map(|(idx, seg)| {
                let path = seg
                    .path
                    .iter()
                    .map(|[lat, lon]| {
                        if geo_ops::is_valid_lat_lon(*lat, *lon) {
                            Ok(geo_ops::coord_from_lat_lon(*lat, *lon))
                        } else {
                            Err(malformed(format!(
                                "segment {idx} has invalid path point [{lat}, {lon}]"
                            )))
                        }
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(RouteSegment {
                    from: seg.from,
                    to: seg.to,
                    path: path.into(),
                    tari_score: seg.tari_score,
                })
            })
            .collect::<Result<Vec<_>, DashboardError>>()?;

        let mut route = Route::new(
            segments,
            body.total_distance_km,
            body.estimated_duration_mins,
        );
        route.alternative_count = self.alternative_routes.len();
        Ok(route)
    }
}
