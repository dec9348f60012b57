// crates/worldmap-core/src/headless.rs

//! # Headless rendering
//!
//! A [`MapCanvas`] and a [`SearchView`] that draw nothing and remember
//! everything, for tests, demos and server-side previews. The viewport does
//! real Web-Mercator math, so after `fit_bounds` its visible area can be
//! checked against the geometry it was asked to show.

use crate::canvas::{CountryOverlay, Legend, Marker, TileLayer};
use crate::common::{LatLng, LatLngBounds};
use crate::search::SearchRow;
use crate::traits::{MapCanvas, SearchView};
use std::f64::consts::PI;

/// Latitude limit of the Web-Mercator projection.
pub const MAX_LATITUDE: f64 = 85.051_128_779_806_6;
const TILE_SIZE: f64 = 256.0;

/// Pixel-sized window onto a Web-Mercator world.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    pub center: LatLng,
    pub zoom: f64,
    /// Width and height in CSS pixels.
    pub size: (f64, f64),
    pub min_zoom: f64,
    pub max_zoom: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            center: LatLng::new(0.0, 0.0),
            zoom: 0.0,
            size: (width, height),
            min_zoom: 0.0,
            max_zoom: 18.0,
        }
    }

    fn scale(zoom: f64) -> f64 {
        TILE_SIZE * 2f64.powf(zoom)
    }

    /// Geographic → world pixel at `zoom`.
    pub fn project(p: LatLng, zoom: f64) -> (f64, f64) {
        let scale = Self::scale(zoom);
        let lat = p.lat.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();
        let x = (p.lng + 180.0) / 360.0 * scale;
        let y = (1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / PI) / 2.0 * scale;
        (x, y)
    }

    /// World pixel at `zoom` → geographic.
    pub fn unproject(x: f64, y: f64, zoom: f64) -> LatLng {
        let scale = Self::scale(zoom);
        let lng = x / scale * 360.0 - 180.0;
        let n = PI * (1.0 - 2.0 * y / scale);
        let lat = n.sinh().atan().to_degrees();
        LatLng::new(lat, lng)
    }

    /// Geographic box currently on screen.
    pub fn bounds(&self) -> LatLngBounds {
        let (cx, cy) = Self::project(self.center, self.zoom);
        let (hw, hh) = (self.size.0 / 2.0, self.size.1 / 2.0);
        let north_west = Self::unproject(cx - hw, cy - hh, self.zoom);
        let south_east = Self::unproject(cx + hw, cy + hh, self.zoom);
        LatLngBounds::new(
            LatLng::new(south_east.lat, north_west.lng),
            LatLng::new(north_west.lat, south_east.lng),
        )
    }

    /// Highest integer zoom at which `bounds` fits, centered on the bounds'
    /// projected midpoint. Falls back to `min_zoom` if nothing fits.
    pub fn fit_bounds(&mut self, bounds: &LatLngBounds) {
        let mut best_zoom = self.min_zoom;

        for z in (self.min_zoom as i32)..=(self.max_zoom as i32) {
            let zoom = f64::from(z);
            let (w, n) = Self::project(
                LatLng::new(bounds.north_east.lat, bounds.south_west.lng),
                zoom,
            );
            let (e, s) = Self::project(
                LatLng::new(bounds.south_west.lat, bounds.north_east.lng),
                zoom,
            );
            if (e - w).abs() <= self.size.0 && (s - n).abs() <= self.size.1 {
                best_zoom = zoom;
            } else {
                break;
            }
        }

        let (w, n) = Self::project(
            LatLng::new(bounds.north_east.lat, bounds.south_west.lng),
            best_zoom,
        );
        let (e, s) = Self::project(
            LatLng::new(bounds.south_west.lat, bounds.north_east.lng),
            best_zoom,
        );
        self.center = Self::unproject((w + e) / 2.0, (n + s) / 2.0, best_zoom);
        self.zoom = best_zoom;
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MarkerRecord {
    pub position: LatLng,
    pub popup: String,
}

/// One country polygon as it was handed to the canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayRecord {
    pub name: String,
    pub popup: String,
    pub bounds: Option<LatLngBounds>,
}

/// Canvas that records every layer and tracks a viewport.
#[derive(Debug, Clone)]
pub struct HeadlessMap {
    viewport: Viewport,
    tile_layers: Vec<TileLayer>,
    markers: Vec<MarkerRecord>,
    overlays: Vec<Vec<OverlayRecord>>,
    legends: Vec<Legend>,
    fitted: Vec<LatLngBounds>,
}

impl HeadlessMap {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            viewport: Viewport::new(width, height),
            tile_layers: Vec::new(),
            markers: Vec::new(),
            overlays: Vec::new(),
            legends: Vec::new(),
            fitted: Vec::new(),
        }
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn tile_layers(&self) -> &[TileLayer] {
        &self.tile_layers
    }

    pub fn markers(&self) -> &[MarkerRecord] {
        &self.markers
    }

    /// Every overlay layer added, each as its list of country polygons.
    pub fn overlays(&self) -> &[Vec<OverlayRecord>] {
        &self.overlays
    }

    /// Polygon for `name` in the first overlay layer, if any.
    pub fn country(&self, name: &str) -> Option<&OverlayRecord> {
        self.overlays.first()?.iter().find(|o| o.name == name)
    }

    pub fn legends(&self) -> &[Legend] {
        &self.legends
    }

    /// Every `fit_bounds` request, oldest first.
    pub fn fitted(&self) -> &[LatLngBounds] {
        &self.fitted
    }
}

impl Default for HeadlessMap {
    fn default() -> Self {
        Self::new(1024.0, 768.0)
    }
}

impl MapCanvas for HeadlessMap {
    fn set_view(&mut self, center: LatLng, zoom: f64) {
        self.viewport.center = center;
        self.viewport.zoom = zoom.clamp(self.viewport.min_zoom, self.viewport.max_zoom);
    }

    fn add_tile_layer(&mut self, layer: &TileLayer) {
        self.tile_layers.push(layer.clone());
    }

    fn add_marker(&mut self, marker: &Marker<'_>) {
        self.markers.push(MarkerRecord {
            position: marker.position,
            popup: marker.popup.clone(),
        });
    }

    fn add_overlay(&mut self, overlay: &CountryOverlay<'_>) {
        let records = overlay
            .entries
            .iter()
            .map(|e| OverlayRecord {
                name: e.country.name().to_string(),
                popup: e.popup.clone(),
                bounds: e.country.bounds(),
            })
            .collect();
        self.overlays.push(records);
    }

    fn add_legend(&mut self, legend: &Legend) {
        self.legends.push(legend.clone());
    }

    fn fit_bounds(&mut self, bounds: LatLngBounds) {
        self.viewport.fit_bounds(&bounds);
        self.fitted.push(bounds);
    }
}

/// Search box stand-in: an input string and a result list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadlessSearchView {
    input: String,
    visible: bool,
    rows: Vec<SearchRow>,
}

impl HeadlessSearchView {
    pub fn new() -> Self {
        Self::default()
    }

    /// A view whose box already contains `text`, as after the user typed it.
    pub fn with_input(text: impl Into<String>) -> Self {
        Self {
            input: text.into(),
            ..Self::default()
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn rows(&self) -> &[SearchRow] {
        &self.rows
    }
}

impl SearchView for HeadlessSearchView {
    fn show_results(&mut self, rows: &[SearchRow]) {
        self.rows = rows.to_vec();
        self.visible = true;
    }

    fn hide_results(&mut self) {
        self.rows.clear();
        self.visible = false;
    }

    fn clear_input(&mut self) {
        self.input.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projection_round_trips_the_origin() {
        let (x, y) = Viewport::project(LatLng::new(0.0, 0.0), 0.0);
        assert!((x - 128.0).abs() < 1e-9);
        assert!((y - 128.0).abs() < 1e-9);
        let back = Viewport::unproject(x, y, 0.0);
        assert!(back.lat.abs() < 1e-9 && back.lng.abs() < 1e-9);
    }

    #[test]
    fn fit_bounds_encloses_and_zooms_in() {
        let mut vp = Viewport::new(800.0, 600.0);
        let target = LatLngBounds::new(LatLng::new(42.3, -5.2), LatLng::new(51.1, 8.2));
        vp.fit_bounds(&target);

        assert!(vp.zoom >= 4.0, "zoom {}", vp.zoom);
        assert!(vp.bounds().contains_bounds(&target), "{:?}", vp.bounds());

        // One level deeper would no longer fit.
        let mut deeper = vp.clone();
        deeper.zoom += 1.0;
        assert!(!deeper.bounds().contains_bounds(&target));
    }

    #[test]
    fn search_view_clears() {
        let mut view = HeadlessSearchView::with_input("fra");
        view.show_results(&[SearchRow {
            feature_index: 0,
            name: "France".into(),
            flag_url: "fr.png".into(),
        }]);
        assert!(view.is_visible());
        view.hide_results();
        view.clear_input();
        assert!(!view.is_visible());
        assert!(view.rows().is_empty());
        assert_eq!(view.input(), "");
    }
}
