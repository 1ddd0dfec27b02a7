//! Shared data model for the convoy operations dashboard.
//!
//! Holds the reference entities mirrored from the navigation and operations
//! services, the JSON schemas spoken at the HTTP boundary, and the error
//! taxonomy used by the sync cache and the map view model.
pub mod error;
pub mod model;
pub mod util;
pub mod wire;

pub use error::{DashboardError, ValidationError};
