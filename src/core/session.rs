use crate::core::search::{FilteredState, SearchEngine, SearchQuery};
use crate::services::catalog::Catalog;

/// Search state for a vehicle listing screen.
///
/// Owned by whatever renders the listing. Holds the query text, the current
/// results and whether the search dialog is showing.
#[derive(Debug, Clone)]
pub struct SearchSession<'a> {
    engine: SearchEngine<'a>,
    query: SearchQuery,
    results: FilteredState<'a>,
    search_visible: bool,
}

impl<'a> SearchSession<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            engine: SearchEngine::new(catalog),
            query: SearchQuery::default(),
            results: FilteredState::full(catalog),
            search_visible: false,
        }
    }

    pub fn open_search(&mut self) {
        self.search_visible = true;
    }

    /// Hide the search dialog, keeping the query and results
    pub fn dismiss_search(&mut self) {
        self.search_visible = false;
    }

    /// Real-time search as the user types
    pub fn change(&mut self, text: &str) {
        self.query = SearchQuery::parse(text);
        self.results = self.engine.apply(&self.query);
    }

    /// Run the search for the current text and close the dialog
    pub fn submit(&mut self) {
        tracing::debug!(query = self.query.raw(), "Search submitted");
        self.results = self.engine.apply(&self.query);
        self.search_visible = false;
    }

    pub fn clear(&mut self) {
        self.query = SearchQuery::default();
        self.results = self.engine.clear();
    }

    pub fn query(&self) -> &str {
        self.query.raw()
    }

    pub fn results(&self) -> &FilteredState<'a> {
        &self.results
    }

    pub fn is_search_visible(&self) -> bool {
        self.search_visible
    }

    pub fn is_active(&self) -> bool {
        self.results.state().is_active()
    }

    /// Highlight test against the session's current query
    pub fn is_highlighted(&self, field: &str) -> bool {
        self.query.matches(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_inactive() {
        let session = SearchSession::new(Catalog::sample());
        assert_eq!(session.query(), "");
        assert!(!session.is_active());
        assert!(!session.is_search_visible());
        assert_eq!(session.results().vehicle_count(), 2);
        assert_eq!(session.results().category_count(), 3);
    }

    #[test]
    fn test_change_filters_as_you_type() {
        let mut session = SearchSession::new(Catalog::sample());
        session.open_search();

        session.change("h");
        assert!(session.is_active());
        assert_eq!(session.results().vehicle_count(), 1);

        session.change("hy");
        assert_eq!(session.results().vehicles[0].brand, "Hyundai");
        assert!(session.is_highlighted("Hyundai"));
        assert!(!session.is_highlighted("Toyota"));

        // typing doesn't close the dialog
        assert!(session.is_search_visible());
    }

    #[test]
    fn test_submit_closes_dialog() {
        let mut session = SearchSession::new(Catalog::sample());
        session.open_search();
        session.change("yaris");
        session.submit();

        assert!(!session.is_search_visible());
        assert!(session.is_active());
        assert_eq!(session.query(), "yaris");
        assert_eq!(session.results().vehicles[0].model, "Yaris iA");
    }

    #[test]
    fn test_whitespace_change_deactivates() {
        let mut session = SearchSession::new(Catalog::sample());
        session.change("toy");
        assert!(session.is_active());

        session.change("   ");
        assert!(!session.is_active());
        assert_eq!(session.results().vehicle_count(), 2);
        assert!(!session.is_highlighted("Toyota"));
    }

    #[test]
    fn test_clear_resets() {
        let mut session = SearchSession::new(Catalog::sample());
        session.change("zzz");
        assert!(session.results().is_empty());

        session.clear();
        assert_eq!(session.query(), "");
        assert!(!session.is_active());
        assert_eq!(session.results(), &FilteredState::full(Catalog::sample()));
    }

    #[test]
    fn test_dismiss_keeps_results() {
        let mut session = SearchSession::new(Catalog::sample());
        session.open_search();
        session.change("suv");
        session.dismiss_search();

        assert!(!session.is_search_visible());
        assert_eq!(session.results().category_count(), 1);
    }
}
