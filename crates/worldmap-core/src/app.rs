// crates/worldmap-core/src/app.rs
use crate::canvas::setup_canvas;
use crate::catalog::DataCatalog;
use crate::common::{LatLngBounds, MapStats};
use crate::config::MapConfig;
use crate::error::Result;
use crate::loader::{DatasetSlot, OverlayLoader};
use crate::model::CountryDataset;
use crate::search::{SearchController, SearchState};
use crate::traits::{FeatureSource, MapCanvas, SearchView};

/// The whole widget: a canvas with landmarks on it, the overlay loader and
/// the search controller, sharing one dataset slot.
///
/// ```rust
/// use worldmap_core::prelude::*;
///
/// let catalog = DataCatalog::embedded().unwrap();
/// let mut map = WorldMap::new(HeadlessMap::default(), MapConfig::default(), catalog);
///
/// assert_eq!(map.canvas().markers().len(), catalog.landmarks.len());
/// // Nothing fetched yet: search stays idle whatever is typed.
/// let mut view = HeadlessSearchView::new();
/// assert!(map.on_search_input("fra", &mut view).is_idle());
/// ```
pub struct WorldMap<C: MapCanvas> {
    config: MapConfig,
    canvas: C,
    loader: OverlayLoader,
    search: SearchController,
    landmarks: usize,
    flags: usize,
    statistics: usize,
}

impl<C: MapCanvas> WorldMap<C> {
    /// Build the widget and draw the base map and landmark markers.
    pub fn new(mut canvas: C, config: MapConfig, catalog: &DataCatalog) -> Self {
        let slot = DatasetSlot::new();
        let landmarks = setup_canvas(&mut canvas, &config, &catalog.landmarks);
        let loader = OverlayLoader::new(&config, catalog.statistics.clone(), slot.clone());
        let search = SearchController::new(
            slot,
            catalog.flags.clone(),
            config.placeholder_flag_url.clone(),
        );

        Self {
            landmarks,
            flags: catalog.flags.len(),
            statistics: catalog.statistics.len(),
            config,
            canvas,
            loader,
            search,
        }
    }

    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut C {
        &mut self.canvas
    }

    /// The loader, e.g. to clone it and fetch without holding `self`.
    pub fn loader(&self) -> &OverlayLoader {
        &self.loader
    }

    pub fn search(&self) -> &SearchController {
        &self.search
    }

    pub fn dataset(&self) -> Option<&CountryDataset> {
        self.loader.slot().get()
    }

    pub fn stats(&self) -> MapStats {
        MapStats {
            landmarks: self.landmarks,
            statistics: self.statistics,
            flags: self.flags,
            features: self.dataset().map_or(0, CountryDataset::len),
            dataset_loaded: self.dataset().is_some(),
        }
    }

    /// Fetch the boundary dataset and draw the overlay.
    pub async fn load_overlay<S: FeatureSource + ?Sized>(&mut self, source: &S) -> Result<usize> {
        self.loader.load(source, &mut self.canvas).await
    }

    /// Second half of [`load_overlay`](Self::load_overlay), for callers that
    /// fetched through a cloned [`OverlayLoader`].
    pub fn install_overlay(&mut self, fetched: Result<CountryDataset>) -> Result<usize> {
        self.loader.install(fetched, &mut self.canvas)
    }

    pub fn on_search_input<V: SearchView + ?Sized>(
        &mut self,
        query: &str,
        view: &mut V,
    ) -> &SearchState {
        self.search.on_input(query, view)
    }

    pub fn on_search_select<V: SearchView + ?Sized>(
        &mut self,
        feature_index: usize,
        view: &mut V,
    ) -> Option<LatLngBounds> {
        self.search.select(feature_index, &mut self.canvas, view)
    }
}
