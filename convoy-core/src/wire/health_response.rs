use serde::{Deserialize, Serialize};

use crate::model::HealthStatus;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn into_domain(self) -> HealthStatus {
        if self.status.eq_ignore_ascii_case("ok") {
            HealthStatus::Ok
        } else {
            HealthStatus::Unhealthy(self.status)
        }
    }
}
