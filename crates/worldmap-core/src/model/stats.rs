// crates/worldmap-core/src/model/stats.rs
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Economic figures for one country.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryStat {
    pub population: f64,
    /// Nominal GDP in US dollars.
    pub gdp: f64,
    pub gdp_per_capita: f64,
    /// Reference year of the figures.
    pub year: u16,
}

/// Country name → [`CountryStat`]. Keys must match the boundary dataset's
/// `properties.name` exactly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatisticsTable(HashMap<String, CountryStat>);

impl StatisticsTable {
    /// Case-sensitive exact lookup.
    pub fn get(&self, country: &str) -> Option<&CountryStat> {
        self.0.get(country)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, CountryStat)> for StatisticsTable {
    fn from_iter<I: IntoIterator<Item = (String, CountryStat)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Country name → flag image URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlagTable(HashMap<String, String>);

impl FlagTable {
    /// Case-sensitive exact lookup.
    pub fn get(&self, country: &str) -> Option<&str> {
        self.0.get(country).map(String::as_str)
    }

    /// Flag URL for `country`, or `placeholder` when the table has no entry.
    pub fn url_or<'a>(&'a self, country: &str, placeholder: &'a str) -> &'a str {
        self.get(country).unwrap_or(placeholder)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, String)> for FlagTable {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookups_are_exact() {
        let flags: FlagTable = [("France".to_string(), "fr.png".to_string())]
            .into_iter()
            .collect();
        assert_eq!(flags.get("France"), Some("fr.png"));
        assert_eq!(flags.get("france"), None);
        assert_eq!(flags.url_or("FRANCE", "none.png"), "none.png");
    }

    #[test]
    fn deserializes_camel_case() {
        let table: StatisticsTable = serde_json::from_str(
            r#"{"Iceland": {"population": 382003, "gdp": 27842000000, "gdpPerCapita": 72903.1, "year": 2022}}"#,
        )
        .unwrap();
        let iceland = table.get("Iceland").unwrap();
        assert_eq!(iceland.population, 382_003.0);
        assert_eq!(iceland.year, 2022);
        assert!(table.get("iceland").is_none());
    }

    #[test]
    fn accepts_exponent_and_fractional_figures() {
        let table: StatisticsTable = serde_json::from_str(
            r#"{"Utopia": {"population": 2.5e6, "gdp": 1.5e12, "gdpPerCapita": 600000, "year": 2020}}"#,
        )
        .unwrap();
        let utopia = table.get("Utopia").unwrap();
        assert_eq!(utopia.population, 2_500_000.0);
        assert_eq!(utopia.gdp, 1_500_000_000_000.0);
        assert_eq!(utopia.gdp_per_capita, 600_000.0);
    }
}
