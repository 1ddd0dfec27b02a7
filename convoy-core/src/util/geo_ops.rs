use geo::{coord, BoundingRect, Coord, LineString, MultiPoint, Point, Rect};

/// builds a map coordinate from a (latitude, longitude) pair. map coordinates
/// follow the geo convention of x = longitude, y = latitude.
pub fn coord_from_lat_lon(latitude: f64, longitude: f64) -> Coord<f64> {
    coord! { x: longitude, y: latitude }
}

/// true if the pair describes a position on the globe.
pub fn is_valid_lat_lon(latitude: f64, longitude: f64) -> bool {
    latitude.is_finite()
        && longitude.is_finite()
        && (-90.0..=90.0).contains(&latitude)
        && (-180.0..=180.0).contains(&longitude)
}

/// the smallest rectangle containing every coordinate, or None when there are
/// no coordinates to fit.
///
/// # Arguments
///
/// * `coords` - coordinates to fit
///
/// # Returns
///
/// * a bounding rectangle if at least one coordinate was provided
pub fn bounds_of<I>(coords: I) -> Option<Rect<f64>>
where
    I: IntoIterator<Item = Coord<f64>>,
{
    let points = coords.into_iter().map(Point::from).collect::<Vec<_>>();
    MultiPoint::new(points).bounding_rect()
}

/// bounds of a set of line strings, skipping empty lines.
pub fn bounds_of_lines<'a, I>(lines: I) -> Option<Rect<f64>>
where
    I: IntoIterator<Item = &'a LineString<f64>>,
{
    bounds_of(lines.into_iter().flat_map(|l| l.coords().copied()))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_bounds_of_empty_is_none() {
        assert!(bounds_of(vec![]).is_none());
    }

    #[test]
    fn test_bounds_of_points() {
        let bounds = bounds_of(vec![
            coord_from_lat_lon(34.5, 69.1),
            coord_from_lat_lon(34.9, 69.4),
            coord_from_lat_lon(34.2, 68.9),
        ])
        .expect("test failed");
        assert_eq!(bounds.min(), coord! { x: 68.9, y: 34.2 });
        assert_eq!(bounds.max(), coord! { x: 69.4, y: 34.9 });
    }

    #[test]
    fn test_bounds_of_lines_skips_empty() {
        let a = LineString::new(vec![]);
        let b = LineString::from(vec![(1.0, 2.0), (3.0, 4.0)]);
        let bounds = bounds_of_lines([&a, &b]).expect("test failed");
        assert_eq!(bounds.min(), coord! { x: 1.0, y: 2.0 });
        assert_eq!(bounds.max(), coord! { x: 3.0, y: 4.0 });
    }

    #[test]
    fn test_lat_lon_validation() {
        assert!(is_valid_lat_lon(0.0, 0.0));
        assert!(is_valid_lat_lon(-90.0, 180.0));
        assert!(!is_valid_lat_lon(91.0, 0.0));
        assert!(!is_valid_lat_lon(0.0, f64::NAN));
    }
}
