// crates/worldmap-core/src/search.rs

//! # Country search
//!
//! Live filter over the country names of the loaded boundary dataset.
//! Every keystroke re-evaluates the query from scratch; nothing is carried
//! over between evaluations and nothing is debounced.

use crate::common::LatLngBounds;
use crate::loader::DatasetSlot;
use crate::model::{CountryDataset, FlagTable};
use crate::text::{escape_html, fold_query};
use crate::traits::{MapCanvas, NameMatch, SearchView};
use serde::Serialize;

/// Where the search box currently stands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SearchState {
    /// Empty query, or the dataset has not arrived. Results hidden.
    #[default]
    Idle,
    /// Indices (into the dataset) of every feature whose name contains the
    /// query, in dataset order. Results are hidden when `matches` is empty.
    Filtering { query: String, matches: Vec<usize> },
}

impl SearchState {
    pub fn is_idle(&self) -> bool {
        matches!(self, SearchState::Idle)
    }

    /// Whether the result list should be on screen.
    pub fn shows_results(&self) -> bool {
        matches!(self, SearchState::Filtering { matches, .. } if !matches.is_empty())
    }

    pub fn matches(&self) -> &[usize] {
        match self {
            SearchState::Idle => &[],
            SearchState::Filtering { matches, .. } => matches,
        }
    }
}

/// One line of the result list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRow {
    /// Position of the feature in the dataset; what a click selects.
    pub feature_index: usize,
    pub name: String,
    pub flag_url: String,
}

impl SearchRow {
    /// Inner markup of the row's `<li>`.
    pub fn to_html(&self) -> String {
        let name = escape_html(&self.name);
        format!(
            r#"<img src="{}" alt="{name} flag"><span>{name}</span>"#,
            escape_html(&self.flag_url)
        )
    }
}

#[derive(Debug, Clone)]
pub struct SearchController {
    slot: DatasetSlot,
    flags: FlagTable,
    placeholder_flag: String,
    state: SearchState,
}

impl SearchController {
    pub fn new(slot: DatasetSlot, flags: FlagTable, placeholder_flag: impl Into<String>) -> Self {
        Self {
            slot,
            flags,
            placeholder_flag: placeholder_flag.into(),
            state: SearchState::Idle,
        }
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// Evaluate `query` against the current dataset without touching state.
    pub fn evaluate(&self, query: &str) -> SearchState {
        let Some(dataset) = self.slot.get() else {
            return SearchState::Idle;
        };
        if query.is_empty() {
            return SearchState::Idle;
        }

        let folded = fold_query(query);
        let matches = dataset
            .features()
            .iter()
            .enumerate()
            .filter(|(_, f)| f.name_contains_folded(&folded))
            .map(|(i, _)| i)
            .collect();

        SearchState::Filtering {
            query: query.to_string(),
            matches,
        }
    }

    /// Rows for `query`, joined with the flag table.
    pub fn search(&self, query: &str) -> Vec<SearchRow> {
        let state = self.evaluate(query);
        self.rows(state.matches())
    }

    /// Input-change handler: re-filter and re-render the whole result list.
    pub fn on_input<V: SearchView + ?Sized>(&mut self, query: &str, view: &mut V) -> &SearchState {
        self.state = self.evaluate(query);

        if self.state.shows_results() {
            let rows = self.rows(self.state.matches());
            view.show_results(&rows);
        } else {
            view.hide_results();
        }
        &self.state
    }

    /// Row click handler: zoom to the country, hide the list, clear the box.
    ///
    /// Returns the bounds the map was fitted to. An index outside the dataset
    /// does nothing; a feature without geometry is not zoomed to but still
    /// closes the search.
    pub fn select<C, V>(
        &mut self,
        feature_index: usize,
        canvas: &mut C,
        view: &mut V,
    ) -> Option<LatLngBounds>
    where
        C: MapCanvas + ?Sized,
        V: SearchView + ?Sized,
    {
        let feature = self.slot.get()?.get(feature_index)?;

        let bounds = feature.bounds();
        match bounds {
            Some(b) => canvas.fit_bounds(b),
            None => tracing::warn!(country = feature.name(), "selected country has no geometry"),
        }

        view.hide_results();
        view.clear_input();
        self.state = SearchState::Idle;
        bounds
    }

    fn rows(&self, matches: &[usize]) -> Vec<SearchRow> {
        let Some(dataset) = self.slot.get() else {
            return Vec::new();
        };
        matches
            .iter()
            .filter_map(|&i| self.row(dataset, i))
            .collect()
    }

    fn row(&self, dataset: &CountryDataset, index: usize) -> Option<SearchRow> {
        let feature = dataset.get(index)?;
        Some(SearchRow {
            feature_index: index,
            name: feature.name().to_string(),
            flag_url: self
                .flags
                .url_or(feature.name(), &self.placeholder_flag)
                .to_string(),
        })
    }
}
