use std::collections::BTreeMap;

use geo::Rect;
use geojson::{feature::Id, Feature, FeatureCollection, JsonObject};
use serde_json::json;

use super::{LayerGroup, MapSurface, Marker, RouteLine};

#[derive(Debug, Clone, Default, PartialEq)]
struct GroupContents {
    markers: Vec<Marker>,
    lines: Vec<RouteLine>,
}

/// in-memory [`MapSurface`]. keeps every group's features and the last
/// fitted viewport, and can export the whole layer set as GeoJSON.
#[derive(Debug, Clone, Default)]
pub struct LayerStore {
    groups: BTreeMap<LayerGroup, GroupContents>,
    viewport: Option<Rect<f64>>,
    clear_count: usize,
}

impl LayerStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn markers(&self, group: LayerGroup) -> &[Marker] {
        self.groups
            .get(&group)
            .map(|g| g.markers.as_slice())
            .unwrap_or_default()
    }

    pub fn lines(&self, group: LayerGroup) -> &[RouteLine] {
        self.groups
            .get(&group)
            .map(|g| g.lines.as_slice())
            .unwrap_or_default()
    }

    pub fn marker_count(&self, group: LayerGroup) -> usize {
        self.markers(group).len()
    }

    pub fn line_count(&self, group: LayerGroup) -> usize {
        self.lines(group).len()
    }

    /// number of features across all groups.
    pub fn feature_count(&self) -> usize {
        self.groups
            .values()
            .map(|g| g.markers.len() + g.lines.len())
            .sum()
    }

    pub fn viewport(&self) -> Option<Rect<f64>> {
        self.viewport
    }

    /// how many times any group has been cleared.
    pub fn clear_count(&self) -> usize {
        self.clear_count
    }

    /// exports every feature, tagged with its layer group, in group order.
    pub fn to_geojson(&self) -> FeatureCollection {
        let mut features = vec![];
        for (group, contents) in self.groups.iter() {
            for marker in contents.markers.iter() {
                let mut properties = JsonObject::new();
                properties.insert(String::from("layer"), json!(group));
                properties.insert(String::from("label"), json!(marker.label));
                properties.insert(String::from("kind"), json!(marker.kind));
                let point = geo::Geometry::Point(geo::Point::from(marker.position));
                features.push(Feature {
                    bbox: None,
                    geometry: Some(geojson::Geometry::from(&point)),
                    id: Some(Id::String(marker.id.to_string())),
                    properties: Some(properties),
                    foreign_members: None,
                });
            }
            for line in contents.lines.iter() {
                let mut properties = JsonObject::new();
                properties.insert(String::from("layer"), json!(group));
                properties.insert(String::from("label"), json!(line.label));
                properties.insert(String::from("tari_score"), json!(line.tari_score));
                properties.insert(String::from("stroke"), json!(line.color));
                let geometry = geo::Geometry::LineString(line.path.clone());
                features.push(Feature {
                    bbox: None,
                    geometry: Some(geojson::Geometry::from(&geometry)),
                    id: None,
                    properties: Some(properties),
                    foreign_members: None,
                });
            }
        }
        FeatureCollection {
            bbox: None,
            features,
            foreign_members: None,
        }
    }
}

impl MapSurface for LayerStore {
    fn clear_group(&mut self, group: LayerGroup) {
        self.groups.remove(&group);
        self.clear_count += 1;
    }

    fn add_marker(&mut self, group: LayerGroup, marker: Marker) {
        self.groups.entry(group).or_default().markers.push(marker);
    }

    fn add_line(&mut self, group: LayerGroup, line: RouteLine) {
        self.groups.entry(group).or_default().lines.push(line);
    }

    fn fit_bounds(&mut self, bounds: Rect<f64>) {
        self.viewport = Some(bounds);
    }
}

#[cfg(test)]
mod test {
    use convoy_core::model::{Checkpoint, RouteSegment, TariScore};

    use super::*;
    use crate::layer::{redraw_markers, tari_palette};

    fn markers() -> Vec<Marker> {
        vec![
            Marker::checkpoint(&Checkpoint::new("1", "Base Alpha", 34.50, 69.10)),
            Marker::checkpoint(&Checkpoint::new("2", "Outpost Sierra", 34.60, 69.30)),
        ]
    }

    #[test]
    fn test_clear_group_leaves_other_groups() {
        let mut store = LayerStore::new();
        redraw_markers(&mut store, LayerGroup::Checkpoints, markers());
        let segment = RouteSegment::new(
            "1",
            "2",
            vec![
                convoy_core::util::geo_ops::coord_from_lat_lon(34.50, 69.10),
                convoy_core::util::geo_ops::coord_from_lat_lon(34.60, 69.30),
            ],
            TariScore::try_from(2).expect("test failed"),
        );
        store.add_line(
            LayerGroup::RouteSegments,
            RouteLine::new(
                segment.from,
                segment.to,
                String::from("Base Alpha -> Outpost Sierra"),
                segment.path,
                segment.tari_score,
            ),
        );

        store.clear_group(LayerGroup::RouteSegments);

        assert_eq!(store.marker_count(LayerGroup::Checkpoints), 2);
        assert_eq!(store.line_count(LayerGroup::RouteSegments), 0);
    }

    #[test]
    fn test_redraw_replaces_group() {
        let mut store = LayerStore::new();
        redraw_markers(&mut store, LayerGroup::Checkpoints, markers());
        redraw_markers(&mut store, LayerGroup::Checkpoints, markers());
        assert_eq!(store.marker_count(LayerGroup::Checkpoints), 2);
    }

    #[test]
    fn test_geojson_export() {
        let mut store = LayerStore::new();
        redraw_markers(&mut store, LayerGroup::Checkpoints, markers());
        store.add_line(
            LayerGroup::RouteSegments,
            RouteLine::new(
                "1".into(),
                "2".into(),
                String::from("Base Alpha -> Outpost Sierra"),
                geo::LineString::from(vec![(69.10, 34.50), (69.30, 34.60)]),
                TariScore::try_from(4).expect("test failed"),
            ),
        );

        let collection = store.to_geojson();

        assert_eq!(collection.features.len(), 3);
        let line = &collection.features[2];
        let props = line.properties.as_ref().expect("test failed");
        assert_eq!(props["stroke"], json!(tari_palette::TARI_4));
        assert_eq!(props["layer"], json!("route_segments"));
        let point = &collection.features[0];
        match &point.geometry.as_ref().expect("test failed").value {
            geojson::Value::Point(position) => assert_eq!(position, &vec![69.10, 34.50]),
            other => panic!("unexpected geometry {other:?}"),
        }
    }
}
