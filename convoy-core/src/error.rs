use crate::{model::EntityId, wire::Endpoint};

/// failure modes of any dashboard operation. none of these are fatal to the
/// process; callers absorb them into degraded or error display states.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum DashboardError {
    #[error("network failure calling {endpoint}: {message}")]
    NetworkError { endpoint: Endpoint, message: String },
    #[error("{endpoint} responded with status {status}: {message}")]
    ServerError {
        endpoint: Endpoint,
        status: u16,
        message: String,
    },
    #[error("{0}")]
    ValidationError(#[from] ValidationError),
    #[error("malformed response from {endpoint}: {message}")]
    MalformedResponseError { endpoint: Endpoint, message: String },
}

impl DashboardError {
    pub fn network(endpoint: Endpoint, message: impl ToString) -> Self {
        Self::NetworkError {
            endpoint,
            message: message.to_string(),
        }
    }

    pub fn malformed(endpoint: Endpoint, message: impl ToString) -> Self {
        Self::MalformedResponseError {
            endpoint,
            message: message.to_string(),
        }
    }

    /// true when the failure means the server is unreachable or unhealthy.
    /// transport failures and non-2xx statuses both count; a malformed body
    /// came from a live server.
    pub fn is_connectivity_failure(&self) -> bool {
        matches!(
            self,
            DashboardError::NetworkError { .. } | DashboardError::ServerError { .. }
        )
    }
}

/// local input constraints checked before any route request is issued.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("select an origin checkpoint")]
    EmptyOrigin,
    #[error("select a destination checkpoint")]
    EmptyDestination,
    #[error("origin and destination must differ (both are '{0}')")]
    SameOriginAndDestination(EntityId),
}
