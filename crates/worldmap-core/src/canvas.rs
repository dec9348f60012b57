// crates/worldmap-core/src/canvas.rs

//! # Map Canvas
//!
//! Layer descriptions handed to a [`MapCanvas`] plus the startup routine
//! that puts the base map and landmark markers on it.
//!
//! The serde shapes of [`TileLayer`], [`MarkerIcon`], [`OverlayStyle`] and
//! [`ControlPosition`] match Leaflet's option objects, so a JS-backed canvas
//! can pass them through unchanged.

use crate::common::LatLng;
use crate::config::MapConfig;
use crate::model::{CountryFeature, Landmark};
use crate::popup;
use crate::traits::MapCanvas;
use geojson::FeatureCollection;
use serde::{Deserialize, Serialize};

pub const OSM_TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const OSM_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

/// Map pin drawn for every landmark.
pub const PIN_SVG: &str = concat!(
    r#"<svg class="svg-icon" xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" "#,
    r#"stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">"#,
    r#"<path d="M21 10c0 7-9 13-9 13s-9-6-9-13a9 9 0 0 1 18 0z"/><circle cx="12" cy="10" r="3"/></svg>"#
);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TileLayer {
    pub url_template: String,
    pub attribution: String,
}

impl Default for TileLayer {
    fn default() -> Self {
        Self {
            url_template: OSM_TILE_URL.to_string(),
            attribution: OSM_ATTRIBUTION.to_string(),
        }
    }
}

/// HTML marker icon (`L.divIcon` options).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MarkerIcon {
    pub html: String,
    pub class_name: String,
    pub icon_size: [u32; 2],
    /// Pixel of the icon that sits on the marker's coordinate.
    pub icon_anchor: [i32; 2],
    /// Popup tip offset relative to `icon_anchor`.
    pub popup_anchor: [i32; 2],
}

impl Default for MarkerIcon {
    fn default() -> Self {
        Self {
            html: PIN_SVG.to_string(),
            class_name: String::new(),
            icon_size: [18, 18],
            icon_anchor: [9, 18],
            popup_anchor: [0, -18],
        }
    }
}

pub struct Marker<'a> {
    pub position: LatLng,
    pub icon: &'a MarkerIcon,
    pub popup: String,
}

/// Path style applied to every country polygon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OverlayStyle {
    pub fill_color: String,
    pub weight: f64,
    pub opacity: f64,
    pub color: String,
    pub fill_opacity: f64,
}

impl Default for OverlayStyle {
    /// Outline only, so the base tiles stay visible.
    fn default() -> Self {
        Self {
            fill_color: "transparent".to_string(),
            weight: 1.0,
            opacity: 1.0,
            color: "white".to_string(),
            fill_opacity: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlPosition {
    TopLeft,
    TopRight,
    BottomLeft,
    #[default]
    BottomRight,
}

/// Static, non-interactive control pinned to a screen corner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Legend {
    pub position: ControlPosition,
    pub class_name: String,
    pub html: String,
}

impl Default for Legend {
    fn default() -> Self {
        Self {
            position: ControlPosition::BottomRight,
            class_name: "info legend".to_string(),
            html: "<h4>Map Legend</h4><i></i> Countries are clickable to view data.".to_string(),
        }
    }
}

/// The country boundary layer: one popup per feature, bound at construction.
pub struct CountryOverlay<'a> {
    pub style: &'a OverlayStyle,
    pub entries: Vec<OverlayEntry<'a>>,
}

pub struct OverlayEntry<'a> {
    pub country: &'a CountryFeature,
    pub popup: String,
}

impl<'a> CountryOverlay<'a> {
    /// The countries that produce a polygon, as one `FeatureCollection`,
    /// plus their popups at the same positions.
    ///
    /// A feature without geometry draws no layer, so a renderer visiting the
    /// drawn layers in order would otherwise hand it the next country's
    /// popup. Such features are left out of both lists.
    pub fn drawable(&self) -> (FeatureCollection, Vec<&str>) {
        let (features, popups) = self
            .entries
            .iter()
            .filter(|e| e.country.geometry().is_some())
            .map(|e| (e.country.feature().clone(), e.popup.as_str()))
            .unzip();

        let collection = FeatureCollection {
            bbox: None,
            features,
            foreign_members: None,
        };
        (collection, popups)
    }
}

/// Set the initial view, add the base tiles and one marker per landmark.
///
/// Returns the number of markers placed.
pub fn setup_canvas<C: MapCanvas + ?Sized>(
    canvas: &mut C,
    config: &MapConfig,
    landmarks: &[Landmark],
) -> usize {
    canvas.set_view(config.center, config.zoom);
    canvas.add_tile_layer(&config.tiles);

    for landmark in landmarks {
        canvas.add_marker(&Marker {
            position: landmark.position(),
            icon: &config.marker_icon,
            popup: popup::landmark_popup(landmark, &config.placeholder_image_url),
        });
    }

    tracing::debug!(markers = landmarks.len(), zoom = config.zoom, "map canvas ready");
    landmarks.len()
}
