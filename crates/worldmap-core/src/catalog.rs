// crates/worldmap-core/src/catalog.rs

//! # Static data
//!
//! Landmarks, country statistics and flag URLs ship inside the crate as JSON
//! (`data/*.json`) and are parsed once per process. Hosts may bring their own
//! tables through [`DataCatalog::from_json`].

use crate::error::Result;
use crate::model::{FlagTable, Landmark, StatisticsTable};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

static EMBEDDED_LANDMARKS: &str = include_str!("../data/landmarks.json");
static EMBEDDED_STATISTICS: &str = include_str!("../data/country_stats.json");
static EMBEDDED_FLAGS: &str = include_str!("../data/flags.json");

// Single in-process cache so the embedded JSON is only parsed once.
static EMBEDDED_CATALOG: OnceCell<DataCatalog> = OnceCell::new();

/// The three read-only lookup tables the widget is configured with.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataCatalog {
    pub landmarks: Vec<Landmark>,
    pub statistics: StatisticsTable,
    pub flags: FlagTable,
}

impl DataCatalog {
    /// The catalog bundled with the crate.
    pub fn embedded() -> Result<&'static DataCatalog> {
        EMBEDDED_CATALOG.get_or_try_init(|| {
            Self::from_json(EMBEDDED_LANDMARKS, EMBEDDED_STATISTICS, EMBEDDED_FLAGS)
        })
    }

    /// Parse the three tables from their JSON documents:
    /// an array of landmarks, and two objects keyed by country name.
    pub fn from_json(landmarks: &str, statistics: &str, flags: &str) -> Result<Self> {
        Ok(Self {
            landmarks: serde_json::from_str(landmarks)?,
            statistics: serde_json::from_str(statistics)?,
            flags: serde_json::from_str(flags)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_tables_parse() {
        let catalog = DataCatalog::embedded().unwrap();
        assert!(!catalog.landmarks.is_empty());
        assert!(catalog.statistics.get("France").is_some());
        assert!(catalog.flags.get("France").is_some());

        // Parsed once, shared afterwards.
        assert!(std::ptr::eq(catalog, DataCatalog::embedded().unwrap()));
    }

    #[test]
    fn every_landmark_has_a_valid_coordinate() {
        for l in &DataCatalog::embedded().unwrap().landmarks {
            assert!((-90.0..=90.0).contains(&l.lat), "{} lat {}", l.name, l.lat);
            assert!((-180.0..=180.0).contains(&l.lng), "{} lng {}", l.name, l.lng);
            assert!(l.wikipedia_url.starts_with("https://"), "{}", l.name);
        }
    }

    #[test]
    fn bad_table_is_reported() {
        let err = DataCatalog::from_json("[]", "{\"France\": {}}", "{}").unwrap_err();
        assert!(err.to_string().starts_with("invalid JSON"));
    }
}
