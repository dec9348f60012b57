// crates/worldmap-core/src/config.rs
use crate::canvas::{Legend, MarkerIcon, OverlayStyle, TileLayer};
use crate::common::LatLng;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Public GeoJSON of world country boundaries, one feature per country with
/// `properties.name`.
pub const DEFAULT_DATASET_URL: &str =
    "https://raw.githubusercontent.com/johan/world.geo.json/master/countries.geo.json";

pub const DEFAULT_PLACEHOLDER_IMAGE: &str =
    "https://placehold.co/200x150/FFC0CB/000000?text=Image+Unavailable";
pub const DEFAULT_PLACEHOLDER_FLAG: &str = "https://placehold.co/24x16/cccccc/000000?text=?";

/// Every tunable of the widget.
///
/// Missing keys fall back to [`MapConfig::default`], so a host page only
/// spells out what it changes:
///
/// ```rust
/// use worldmap_core::config::MapConfig;
///
/// let cfg = MapConfig::from_json(r#"{"zoom": 5, "searchInputId": "q"}"#).unwrap();
/// assert_eq!(cfg.zoom, 5.0);
/// assert_eq!(cfg.search_input_id, "q");
/// assert_eq!(cfg.container_id, "map");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MapConfig {
    /// Element id of the full-page map container.
    pub container_id: String,
    pub search_input_id: String,
    pub search_results_id: String,

    pub center: LatLng,
    pub zoom: f64,
    pub tiles: TileLayer,
    pub marker_icon: MarkerIcon,

    pub dataset_url: String,
    pub overlay_style: OverlayStyle,
    pub legend: Legend,

    pub placeholder_image_url: String,
    pub placeholder_flag_url: String,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            container_id: "map".to_string(),
            search_input_id: "search-input".to_string(),
            search_results_id: "search-results".to_string(),
            // New York, zoomed out to show most of the globe
            center: LatLng::new(40.7128, -74.0060),
            zoom: 3.0,
            tiles: TileLayer::default(),
            marker_icon: MarkerIcon::default(),
            dataset_url: DEFAULT_DATASET_URL.to_string(),
            overlay_style: OverlayStyle::default(),
            legend: Legend::default(),
            placeholder_image_url: DEFAULT_PLACEHOLDER_IMAGE.to_string(),
            placeholder_flag_url: DEFAULT_PLACEHOLDER_FLAG.to_string(),
        }
    }
}

impl MapConfig {
    pub fn from_json(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }
}
