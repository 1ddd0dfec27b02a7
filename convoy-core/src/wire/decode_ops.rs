use serde::de::DeserializeOwned;

use super::{Endpoint, ErrorBody};
use crate::DashboardError;

const MAX_ERROR_BODY_CHARS: usize = 200;

/// parses a 2xx response body into its schema.
///
/// # Arguments
///
/// * `endpoint` - the endpoint that produced the body, used for error reporting
/// * `body` - raw response text
///
/// # Returns
///
/// * the parsed schema, or a [`DashboardError::MalformedResponseError`]
pub fn decode<T: DeserializeOwned>(endpoint: Endpoint, body: &str) -> Result<T, DashboardError> {
    serde_json::from_str(body).map_err(|e| DashboardError::malformed(endpoint, e))
}

/// user-facing message for a non-2xx response body, preferring the service's
/// own `error` field and falling back to the (truncated) raw text.
pub fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody { error }) => error,
        Err(_) if body.trim().is_empty() => String::from("<empty response body>"),
        Err(_) => body.trim().chars().take(MAX_ERROR_BODY_CHARS).collect(),
    }
}
