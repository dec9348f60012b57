// crates/worldmap-core/src/traits.rs
use crate::canvas::{CountryOverlay, Legend, Marker, TileLayer};
use crate::common::{LatLng, LatLngBounds};
use crate::error::Result;
use crate::search::SearchRow;
use crate::text::fold_query;

/// Name-based matching for types that expose a canonical display name.
///
/// Matching is case-insensitive only (see [`fold_query`]). Implementors
/// provide a `&str` view of their name via [`NameMatch::name_str`].
///
/// # Examples
/// ```rust
/// use worldmap_core::text::fold_query;
/// use worldmap_core::traits::NameMatch;
///
/// struct Place(&'static str);
/// impl NameMatch for Place {
///     fn name_str(&self) -> &str { self.0 }
/// }
///
/// assert!(Place("France").name_contains_folded(&fold_query("FRA")));
/// assert!(!Place("Côte d'Ivoire").name_contains_folded(&fold_query("cote")));
/// ```
pub trait NameMatch {
    /// Returns the canonical display name used for matching.
    fn name_str(&self) -> &str;

    /// Substring match on the folded name. `folded_q` must already be folded,
    /// so a caller scanning many names folds the query once.
    #[inline]
    fn name_contains_folded(&self, folded_q: &str) -> bool {
        fold_query(self.name_str()).contains(folded_q)
    }
}

/// The map widget's rendering surface.
///
/// Implemented on top of Leaflet in `worldmap-wasm` and by
/// [`crate::headless::HeadlessMap`] for tests and demos. Rendering errors of
/// the underlying library are not surfaced through this trait.
pub trait MapCanvas {
    fn set_view(&mut self, center: LatLng, zoom: f64);
    fn add_tile_layer(&mut self, layer: &TileLayer);
    fn add_marker(&mut self, marker: &Marker<'_>);
    fn add_overlay(&mut self, overlay: &CountryOverlay<'_>);
    fn add_legend(&mut self, legend: &Legend);
    /// Adjust center and zoom so `bounds` is fully visible.
    fn fit_bounds(&mut self, bounds: LatLngBounds);
}

/// The search box and its result list.
pub trait SearchView {
    /// Replace the result list with `rows` and make it visible.
    fn show_results(&mut self, rows: &[SearchRow]);
    fn hide_results(&mut self);
    fn clear_input(&mut self);
}

/// Where the boundary dataset comes from.
///
/// Exactly one `fetch_text` call is made per load; implementations must not
/// retry.
#[allow(async_fn_in_trait)]
pub trait FeatureSource {
    async fn fetch_text(&self, url: &str) -> Result<String>;
}
