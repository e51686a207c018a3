//! Incremental catalog search.
//!
//! Every query change re-filters the full catalog: results are never narrowed
//! from a previous result set, so a shorter query can bring back items that a
//! longer one hid. Matching is plain case-insensitive substring containment
//! (no tokenizing, ranking or unicode normalization).

use crate::services::catalog::{Catalog, Category, Vehicle};

/// A normalized search query.
///
/// Keeps the raw text the user typed next to the trimmed, lower-cased term
/// used for matching.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    raw: String,
    term: String,
}

impl SearchQuery {
    pub fn parse(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
            term: raw.trim().to_lowercase(),
        }
    }

    /// The text as typed
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Trimmed, lower-cased term
    pub fn term(&self) -> &str {
        &self.term
    }

    /// Empty or whitespace-only queries don't filter anything
    pub fn is_empty(&self) -> bool {
        self.term.is_empty()
    }

    /// Whether `field` contains the term, ignoring case.
    /// An empty query matches nothing.
    pub fn matches(&self, field: &str) -> bool {
        !self.is_empty() && field.to_lowercase().contains(&self.term)
    }
}

/// A catalog record that takes part in search
pub trait Searchable {
    /// Inclusion test for a non-empty query
    fn matches(&self, query: &SearchQuery) -> bool;
}

impl Searchable for Category {
    fn matches(&self, query: &SearchQuery) -> bool {
        query.matches(&self.name)
    }
}

impl Searchable for Vehicle {
    fn matches(&self, query: &SearchQuery) -> bool {
        query.matches(&self.brand) || query.matches(&self.model)
    }
}

/// Keep the items matching `query`, in catalog order
fn filter<'a, T: Searchable>(items: &'a [T], query: &SearchQuery) -> Vec<&'a T> {
    if query.is_empty() {
        return items.iter().collect();
    }
    items.iter().filter(|item| item.matches(query)).collect()
}

/// Whether a search is currently applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchState {
    /// No query; the full catalogs are shown
    #[default]
    Inactive,
    /// Non-empty query; the filtered subset (possibly empty) is shown
    Active,
}

impl SearchState {
    pub fn is_active(&self) -> bool {
        matches!(self, SearchState::Active)
    }
}

/// Result of applying a query to a catalog.
///
/// Borrows the catalog records, so producing one never copies or mutates the
/// catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredState<'a> {
    pub active: bool,
    pub categories: Vec<&'a Category>,
    pub vehicles: Vec<&'a Vehicle>,
}

impl<'a> FilteredState<'a> {
    /// The unfiltered view of `catalog`
    pub fn full(catalog: &'a Catalog) -> Self {
        Self {
            active: false,
            categories: catalog.categories.iter().collect(),
            vehicles: catalog.vehicles.iter().collect(),
        }
    }

    pub fn state(&self) -> SearchState {
        if self.active {
            SearchState::Active
        } else {
            SearchState::Inactive
        }
    }

    /// Nothing left in either list
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() && self.vehicles.is_empty()
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    pub fn vehicle_count(&self) -> usize {
        self.vehicles.len()
    }
}

/// Filters a catalog by query
#[derive(Debug, Clone, Copy)]
pub struct SearchEngine<'a> {
    catalog: &'a Catalog,
}

impl<'a> SearchEngine<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Filter the catalog for a raw query string
    pub fn set_query(&self, raw: &str) -> FilteredState<'a> {
        self.apply(&SearchQuery::parse(raw))
    }

    /// Filter the catalog for an already parsed query
    pub fn apply(&self, query: &SearchQuery) -> FilteredState<'a> {
        if query.is_empty() {
            return FilteredState::full(self.catalog);
        }

        let state = FilteredState {
            active: true,
            categories: filter(&self.catalog.categories, query),
            vehicles: filter(&self.catalog.vehicles, query),
        };

        tracing::debug!(
            term = query.term(),
            categories = state.category_count(),
            vehicles = state.vehicle_count(),
            "Filtered catalog"
        );

        state
    }

    /// Drop the current search and show the full catalogs
    pub fn clear(&self) -> FilteredState<'a> {
        self.set_query("")
    }

    /// Whether a displayed field should be emphasized for `raw`.
    /// Uses the same inclusion test as [`SearchEngine::set_query`].
    pub fn is_highlighted(field: &str, raw: &str) -> bool {
        SearchQuery::parse(raw).matches(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> SearchEngine<'static> {
        SearchEngine::new(Catalog::sample())
    }

    fn vehicle_models(state: &FilteredState) -> Vec<String> {
        state.vehicles.iter().map(|v| v.model.clone()).collect()
    }

    #[test]
    fn test_query_normalization() {
        let query = SearchQuery::parse("  ToYo  ");
        assert_eq!(query.raw(), "  ToYo  ");
        assert_eq!(query.term(), "toyo");
        assert!(!query.is_empty());
        assert!(SearchQuery::parse(" \t\n").is_empty());
    }

    #[test]
    fn test_empty_query_shows_everything() {
        let state = engine().set_query("");
        assert!(!state.active);
        assert_eq!(state.state(), SearchState::Inactive);
        assert_eq!(state, FilteredState::full(Catalog::sample()));
    }

    #[test]
    fn test_clear_matches_empty_query() {
        let engine = engine();
        assert_eq!(engine.clear(), engine.set_query(""));
        assert_eq!(engine.clear(), engine.set_query("   "));
    }

    #[test]
    fn test_model_match() {
        let state = engine().set_query("i2");
        assert!(state.active);
        assert!(state.categories.is_empty());
        assert_eq!(vehicle_models(&state), vec!["i20"]);
        assert_eq!(state.vehicles[0].brand, "Hyundai");
    }

    #[test]
    fn test_no_match() {
        let state = engine().set_query("zzz");
        assert!(state.active);
        assert!(state.is_empty());
        assert_eq!(state.state(), SearchState::Active);
    }

    #[test]
    fn test_case_insensitive() {
        let engine = engine();
        assert_eq!(
            engine.set_query("TOYOTA").vehicles,
            engine.set_query("toyota").vehicles
        );
        assert_eq!(engine.set_query("toyota").vehicle_count(), 1);
    }

    #[test]
    fn test_category_match() {
        let state = engine().set_query("suv");
        assert_eq!(state.category_count(), 1);
        assert_eq!(state.categories[0].name, "SUV");
        assert!(state.vehicles.is_empty());
    }

    #[test]
    fn test_filtering_is_not_cumulative() {
        let engine = engine();
        let first = engine.set_query("Toy");
        assert_eq!(first.vehicle_count(), 1);

        let second = engine.set_query("i2");
        assert_eq!(vehicle_models(&second), vec!["i20"]);

        // "a" matches Toyota/Yaris, Hyundai and Standard
        let wider = engine.set_query("a");
        assert_eq!(wider.vehicle_count(), 2);
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::default();
        let engine = SearchEngine::new(&catalog);
        assert!(engine.set_query("").is_empty());
        assert!(engine.set_query("x").is_empty());
        assert!(engine.set_query("x").active);
    }

    #[test]
    fn test_highlight() {
        assert!(SearchEngine::is_highlighted("Hyundai", "hyun"));
        assert!(!SearchEngine::is_highlighted("Toyota", "hyun"));
        assert!(SearchEngine::is_highlighted("Yaris iA", "  IA "));
        assert!(!SearchEngine::is_highlighted("Toyota", ""));
        assert!(!SearchEngine::is_highlighted("Toyota", "   "));
    }

    #[test]
    fn test_non_ascii_query() {
        let state = engine().set_query("Škoda");
        assert!(state.active);
        assert!(state.is_empty());
    }
}
