//! JSON schemas of the navigation and operations services. every response is
//! parsed and validated here so that nothing downstream sees a partially
//! populated payload.
mod decode_ops;
mod endpoint;
mod error_body;
mod health_response;
mod offline_data_response;
mod smart_route_request;
mod smart_route_response;
mod sync_request;
mod sync_response;

pub use decode_ops::{decode, error_message};
pub use endpoint::{Endpoint, HttpMethod};
pub use error_body::ErrorBody;
pub use health_response::HealthResponse;
pub use offline_data_response::OfflineDataResponse;
pub use smart_route_request::SmartRouteRequest;
pub use smart_route_response::{PrimaryRouteBody, SegmentBody, SmartRouteResponse};
pub use sync_request::SyncRequest;
pub use sync_response::SyncResponse;
