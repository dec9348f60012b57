// crates/worldmap-core/src/lib.rs

//! worldmap-core: the logic of an interactive world map widget.
//!
//! - landmark markers with photo/description popups
//! - a country boundary overlay fetched once as GeoJSON, each country
//!   carrying a statistics popup (population, GDP, GDP per capita)
//! - a live, case-insensitive country search that zooms to the pick
//!
//! Rendering goes through the [`traits::MapCanvas`] and
//! [`traits::SearchView`] seams; `worldmap-wasm` implements them on Leaflet
//! and the DOM, [`headless`] implements them in memory.
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod app;
pub mod canvas;
pub mod catalog;
pub mod common;
pub mod config;
pub mod error;
pub mod headless;
pub mod loader; // Boundary fetch + overlay construction
pub mod model;
pub mod popup;
pub mod prelude;
pub mod search;
pub mod text;
pub mod traits;

// Re-exports
pub use crate::app::WorldMap;
pub use crate::catalog::DataCatalog;
pub use crate::common::{LatLng, LatLngBounds, MapStats};
pub use crate::config::MapConfig;
pub use crate::error::{MapError, Result};
pub use crate::loader::{DatasetSlot, OverlayLoader};
pub use crate::model::{CountryDataset, CountryFeature, CountryStat, FlagTable, Landmark, StatisticsTable};
pub use crate::search::{SearchController, SearchRow, SearchState};
