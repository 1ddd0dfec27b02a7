//! Map view model for the convoy operations dashboard: route sessions with
//! supersession, independently toggled overlays, and layer groups that are
//! each cleared and redrawn as a unit.
pub mod layer;
pub mod overlay;
pub mod panel;
pub mod session;
pub mod view_model;

pub use layer::{LayerGroup, LayerStore, MapSurface};
pub use overlay::Overlay;
pub use session::{RouteOutcome, SessionPhase};
pub use view_model::{MapView, MapViewModel, MapViewModelConfig};
