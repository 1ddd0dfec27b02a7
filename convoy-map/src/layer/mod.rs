mod layer_group;
mod layer_store;
mod map_surface;
mod marker;
mod route_line;
pub mod tari_palette;

pub use layer_group::LayerGroup;
pub use layer_store::LayerStore;
pub use map_surface::{redraw_markers, MapSurface};
pub use marker::{Marker, MarkerKind};
pub use route_line::RouteLine;
