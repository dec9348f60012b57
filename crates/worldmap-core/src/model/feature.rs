// crates/worldmap-core/src/model/feature.rs
use crate::common::{LatLng, LatLngBounds};
use crate::error::{MapError, Result};
use crate::traits::NameMatch;
use geojson::{Feature, FeatureCollection, GeoJson, Geometry, Value};

/// One country from the boundary dataset: its display name plus the source
/// GeoJSON feature (geometry, id and the full properties bag).
#[derive(Debug, Clone)]
pub struct CountryFeature {
    name: String,
    feature: Feature,
}

impl CountryFeature {
    /// Wrap a GeoJSON feature. Returns `None` when `properties.name` is
    /// missing or not a string.
    pub fn from_feature(feature: Feature) -> Option<Self> {
        let name = feature.property("name")?.as_str()?.to_owned();
        Some(Self { name, feature })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn feature(&self) -> &Feature {
        &self.feature
    }

    pub fn geometry(&self) -> Option<&Geometry> {
        self.feature.geometry.as_ref()
    }

    /// Bounding box of every position in the feature's geometry.
    ///
    /// `None` for features with no geometry or no usable positions.
    pub fn bounds(&self) -> Option<LatLngBounds> {
        let mut acc = None;
        if let Some(geometry) = &self.feature.geometry {
            extend_with_value(&geometry.value, &mut acc);
        }
        acc
    }
}

impl NameMatch for CountryFeature {
    fn name_str(&self) -> &str {
        &self.name
    }
}

/// The fetched boundary dataset, in source order.
#[derive(Debug, Clone, Default)]
pub struct CountryDataset {
    features: Vec<CountryFeature>,
}

impl CountryDataset {
    /// Parse a GeoJSON document. The top level must be a `FeatureCollection`.
    pub fn parse(text: &str) -> Result<Self> {
        let geojson: GeoJson = text.parse()?;
        Self::from_geojson(geojson)
    }

    pub fn from_geojson(geojson: GeoJson) -> Result<Self> {
        match geojson {
            GeoJson::FeatureCollection(collection) => Ok(Self::from_collection(collection)),
            GeoJson::Feature(_) => Err(MapError::InvalidData(
                "expected a FeatureCollection, got a single Feature".into(),
            )),
            GeoJson::Geometry(_) => Err(MapError::InvalidData(
                "expected a FeatureCollection, got a bare Geometry".into(),
            )),
        }
    }

    /// Keeps features in order; nameless features are dropped with a warning
    /// since they can be neither labeled nor searched.
    pub fn from_collection(collection: FeatureCollection) -> Self {
        let total = collection.features.len();
        let features: Vec<CountryFeature> = collection
            .features
            .into_iter()
            .filter_map(CountryFeature::from_feature)
            .collect();

        let skipped = total - features.len();
        if skipped > 0 {
            tracing::warn!(skipped, "ignoring boundary features without a name property");
        }
        Self { features }
    }

    pub fn features(&self) -> &[CountryFeature] {
        &self.features
    }

    pub fn get(&self, index: usize) -> Option<&CountryFeature> {
        self.features.get(index)
    }

    /// Exact, case-sensitive name lookup.
    pub fn find_by_name(&self, name: &str) -> Option<&CountryFeature> {
        self.features.iter().find(|f| f.name == name)
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

// GeoJSON positions are [lng, lat, (alt)].
fn extend_with_position(pos: &[f64], acc: &mut Option<LatLngBounds>) {
    let (Some(&lng), Some(&lat)) = (pos.first(), pos.get(1)) else {
        return;
    };
    if !lat.is_finite() || !lng.is_finite() {
        return;
    }
    let p = LatLng::new(lat, lng);
    match acc {
        Some(b) => b.extend(p),
        None => *acc = Some(LatLngBounds::from_point(p)),
    }
}

fn extend_with_value(value: &Value, acc: &mut Option<LatLngBounds>) {
    match value {
        Value::Point(p) => extend_with_position(p, acc),
        Value::MultiPoint(points) | Value::LineString(points) => {
            for p in points {
                extend_with_position(p, acc);
            }
        }
        Value::MultiLineString(lines) | Value::Polygon(lines) => {
            for p in lines.iter().flatten() {
                extend_with_position(p, acc);
            }
        }
        Value::MultiPolygon(polygons) => {
            for p in polygons.iter().flatten().flatten() {
                extend_with_position(p, acc);
            }
        }
        Value::GeometryCollection(geometries) => {
            for g in geometries {
                extend_with_value(&g.value, acc);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_COUNTRIES: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {"type": "Feature", "id": "AAA", "properties": {"name": "Alpha"},
             "geometry": {"type": "MultiPolygon", "coordinates": [
                [[[0, 0], [4, 0], [4, 3], [0, 3], [0, 0]]],
                [[[8, -2, 120.0], [9, -2], [9, -1], [8, -2]]]
             ]}},
            {"type": "Feature", "properties": {"population": 3},
             "geometry": {"type": "Point", "coordinates": [1, 1]}},
            {"type": "Feature", "id": "BBB", "properties": {"name": "Beta"}, "geometry": null}
        ]
    }"#;

    #[test]
    fn parses_and_skips_nameless_features() {
        let ds = CountryDataset::parse(TWO_COUNTRIES).unwrap();
        let names: Vec<_> = ds.features().iter().map(|f| f.name()).collect();
        assert_eq!(names, ["Alpha", "Beta"]);
    }

    #[test]
    fn bounds_cover_all_polygons() {
        let ds = CountryDataset::parse(TWO_COUNTRIES).unwrap();
        let b = ds.find_by_name("Alpha").unwrap().bounds().unwrap();
        assert_eq!(b.south_west, LatLng::new(-2.0, 0.0));
        assert_eq!(b.north_east, LatLng::new(3.0, 9.0));

        assert!(ds.find_by_name("Beta").unwrap().bounds().is_none());
        assert!(ds.find_by_name("beta").is_none());
    }

    #[test]
    fn rejects_non_collections() {
        let err = CountryDataset::parse(r#"{"type": "Point", "coordinates": [1, 2]}"#).unwrap_err();
        assert!(matches!(err, MapError::InvalidData(_)));

        let err = CountryDataset::parse("not json").unwrap_err();
        assert!(err.is_fetch_error());
    }
}
