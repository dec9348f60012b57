// crates/worldmap-core/src/loader/mod.rs

//! # Country Overlay Loader
//!
//! Fetches the boundary dataset once, parks it in a [`DatasetSlot`] shared
//! with the search controller, and draws the country overlay (styled
//! polygons, per-country popups, legend) on a [`MapCanvas`].
//!
//! Fetching and installing are split so a caller holding the canvas behind a
//! `RefCell` never keeps it borrowed across the await point.

use crate::canvas::{CountryOverlay, Legend, OverlayEntry, OverlayStyle};
use crate::config::MapConfig;
use crate::error::{MapError, Result};
use crate::model::{CountryDataset, StatisticsTable};
use crate::popup;
use crate::traits::{FeatureSource, MapCanvas};
use once_cell::unsync::OnceCell;
use std::rc::Rc;

#[cfg(feature = "fetch")]
mod http;
mod memory;

#[cfg(feature = "fetch")]
pub use http::HttpSource;
pub use memory::StaticSource;

/// Single-assignment holder for the boundary dataset.
///
/// Clones share the same cell: the loader writes it once, any number of
/// readers (the search controller) observe it afterwards.
#[derive(Debug, Clone, Default)]
pub struct DatasetSlot(Rc<OnceCell<CountryDataset>>);

impl DatasetSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<&CountryDataset> {
        self.0.get()
    }

    pub fn is_loaded(&self) -> bool {
        self.0.get().is_some()
    }

    /// Store the dataset. Fails with [`MapError::AlreadyLoaded`] if the slot
    /// was filled before.
    pub fn fill(&self, dataset: CountryDataset) -> Result<&CountryDataset> {
        self.0.set(dataset).map_err(|_| MapError::AlreadyLoaded)?;
        self.0.get().ok_or(MapError::AlreadyLoaded)
    }
}

#[derive(Debug, Clone)]
pub struct OverlayLoader {
    url: String,
    style: OverlayStyle,
    legend: Legend,
    stats: StatisticsTable,
    slot: DatasetSlot,
}

impl OverlayLoader {
    pub fn new(config: &MapConfig, stats: StatisticsTable, slot: DatasetSlot) -> Self {
        Self {
            url: config.dataset_url.clone(),
            style: config.overlay_style.clone(),
            legend: config.legend.clone(),
            stats,
            slot,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn slot(&self) -> &DatasetSlot {
        &self.slot
    }

    /// Issue the one request for the dataset and parse it.
    pub async fn fetch<S: FeatureSource + ?Sized>(&self, source: &S) -> Result<CountryDataset> {
        tracing::debug!(url = %self.url, "fetching country boundaries");
        let body = source.fetch_text(&self.url).await?;
        CountryDataset::parse(&body)
    }

    /// Put a fetched dataset on the map.
    ///
    /// On error nothing is drawn and the slot stays empty (so search stays
    /// idle); the error is logged and handed back for the caller to drop.
    /// Returns the number of countries drawn.
    pub fn install<C: MapCanvas + ?Sized>(
        &self,
        fetched: Result<CountryDataset>,
        canvas: &mut C,
    ) -> Result<usize> {
        let dataset = match fetched {
            Ok(dataset) => dataset,
            Err(e) => {
                tracing::error!(url = %self.url, error = %e, "error fetching GeoJSON data");
                return Err(e);
            }
        };

        let dataset = self.slot.fill(dataset)?;
        let overlay = self.build_overlay(dataset);
        canvas.add_overlay(&overlay);
        canvas.add_legend(&self.legend);

        tracing::info!(countries = dataset.len(), "country overlay installed");
        Ok(dataset.len())
    }

    /// [`fetch`](Self::fetch) followed by [`install`](Self::install).
    pub async fn load<S, C>(&self, source: &S, canvas: &mut C) -> Result<usize>
    where
        S: FeatureSource + ?Sized,
        C: MapCanvas + ?Sized,
    {
        let fetched = self.fetch(source).await;
        self.install(fetched, canvas)
    }

    /// Bind every feature's popup up front from the statistics table.
    pub fn build_overlay<'a>(&'a self, dataset: &'a CountryDataset) -> CountryOverlay<'a> {
        let entries = dataset
            .features()
            .iter()
            .map(|country| OverlayEntry {
                country,
                popup: popup::country_popup(country.name(), self.stats.get(country.name())),
            })
            .collect();

        CountryOverlay {
            style: &self.style,
            entries,
        }
    }
}
