//! worldmap prelude: bring common types and traits into scope for examples.

#![allow(unused_imports)]

pub use crate::app::WorldMap;
pub use crate::canvas::{ControlPosition, Legend, MarkerIcon, OverlayStyle, TileLayer};
pub use crate::catalog::DataCatalog;
pub use crate::common::{LatLng, LatLngBounds, MapStats};
pub use crate::config::MapConfig;
pub use crate::error::{MapError, Result};
pub use crate::headless::{HeadlessMap, HeadlessSearchView};
#[cfg(feature = "fetch")]
pub use crate::loader::HttpSource;
pub use crate::loader::{DatasetSlot, OverlayLoader, StaticSource};
pub use crate::model::{CountryDataset, CountryFeature, CountryStat, FlagTable, Landmark, StatisticsTable};
pub use crate::search::{SearchController, SearchRow, SearchState};
pub use crate::text::format_number;
pub use crate::traits::{FeatureSource, MapCanvas, NameMatch, SearchView};
