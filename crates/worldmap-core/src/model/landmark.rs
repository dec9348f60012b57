// crates/worldmap-core/src/model/landmark.rs
use crate::common::LatLng;
use serde::{Deserialize, Serialize};

/// A fixed point of interest shown as a marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Landmark {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    pub image_url: String,
    pub wikipedia_url: String,
    pub description: String,
}

impl Landmark {
    pub fn position(&self) -> LatLng {
        LatLng::new(self.lat, self.lng)
    }
}
