// crates/worldmap-core/src/model/mod.rs
pub mod feature;
pub mod landmark;
pub mod stats;

pub use feature::{CountryDataset, CountryFeature};
pub use landmark::Landmark;
pub use stats::{CountryStat, FlagTable, StatisticsTable};
