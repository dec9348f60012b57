// crates/worldmap-core/src/common.rs
//! Geographic primitives shared by the canvas, overlay and search modules.
use serde::{Deserialize, Serialize};

/// A WGS84 coordinate in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Leaflet accepts `[lat, lng]` pairs wherever it takes a `LatLng`.
    pub fn to_array(self) -> [f64; 2] {
        [self.lat, self.lng]
    }
}

/// Axis-aligned geographic box, south-west to north-east.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLngBounds {
    pub south_west: LatLng,
    pub north_east: LatLng,
}

impl LatLngBounds {
    pub fn new(south_west: LatLng, north_east: LatLng) -> Self {
        Self {
            south_west,
            north_east,
        }
    }

    /// Degenerate box around a single point.
    pub fn from_point(p: LatLng) -> Self {
        Self::new(p, p)
    }

    /// Grow the box so it also covers `p`.
    pub fn extend(&mut self, p: LatLng) {
        self.south_west.lat = self.south_west.lat.min(p.lat);
        self.south_west.lng = self.south_west.lng.min(p.lng);
        self.north_east.lat = self.north_east.lat.max(p.lat);
        self.north_east.lng = self.north_east.lng.max(p.lng);
    }

    pub fn center(&self) -> LatLng {
        LatLng::new(
            (self.south_west.lat + self.north_east.lat) / 2.0,
            (self.south_west.lng + self.north_east.lng) / 2.0,
        )
    }

    pub fn contains(&self, p: LatLng) -> bool {
        p.lat >= self.south_west.lat
            && p.lat <= self.north_east.lat
            && p.lng >= self.south_west.lng
            && p.lng <= self.north_east.lng
    }

    pub fn contains_bounds(&self, other: &LatLngBounds) -> bool {
        self.contains(other.south_west) && self.contains(other.north_east)
    }

    /// `[[south, west], [north, east]]`, the shape `map.fitBounds` takes.
    pub fn to_corner_array(&self) -> [[f64; 2]; 2] {
        [self.south_west.to_array(), self.north_east.to_array()]
    }
}

/// Simple aggregate counts for what the widget currently holds.
///
/// `features` is zero until the boundary dataset has been installed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapStats {
    pub landmarks: usize,
    pub statistics: usize,
    pub flags: usize,
    pub features: usize,
    pub dataset_loaded: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extend_grows_in_every_direction() {
        let mut b = LatLngBounds::from_point(LatLng::new(10.0, 10.0));
        b.extend(LatLng::new(-5.0, 20.0));
        b.extend(LatLng::new(15.0, -3.0));

        assert_eq!(b.south_west, LatLng::new(-5.0, -3.0));
        assert_eq!(b.north_east, LatLng::new(15.0, 20.0));
        assert_eq!(b.center(), LatLng::new(5.0, 8.5));
        assert!(b.contains(LatLng::new(0.0, 0.0)));
        assert!(!b.contains(LatLng::new(16.0, 0.0)));
    }
}
