use geo::Rect;

use super::{LayerGroup, Marker, RouteLine};

/// the drawing contract of a map. any tile or canvas technology can sit
/// behind it; the view model only ever clears whole groups and appends
/// features to them.
pub trait MapSurface {
    /// removes every feature in the group. other groups are untouched.
    fn clear_group(&mut self, group: LayerGroup);

    fn add_marker(&mut self, group: LayerGroup, marker: Marker);

    fn add_line(&mut self, group: LayerGroup, line: RouteLine);

    /// moves the viewport to show `bounds`.
    fn fit_bounds(&mut self, bounds: Rect<f64>);
}

/// convenience for replacing a group's contents in one call.
pub fn redraw_markers<S: MapSurface + ?Sized>(
    surface: &mut S,
    group: LayerGroup,
    markers: impl IntoIterator<Item = Marker>,
) -> usize {
    surface.clear_group(group);
    let mut count = 0;
    for marker in markers {
        surface.add_marker(group, marker);
        count += 1;
    }
    count
}
