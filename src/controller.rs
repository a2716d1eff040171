use crate::catalog::Catalog;
use crate::matcher::{matching_indices, normalize};
use crate::presenter::{detail_view, present, View};

/// Search state driven by the front end: the current query text and the
/// view computed from it.
pub struct TerminalSearch {
    catalog: Catalog,
    query: String,
    view: View,
    focus_requested: bool,
}

impl TerminalSearch {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            query: String::new(),
            view: View::Empty,
            focus_requested: false,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    /// Handle a change of the query text.
    pub fn set_query(&mut self, raw: &str) {
        self.query = raw.to_string();
        self.view = View::Empty;

        let query = normalize(raw);
        if query.is_empty() {
            return;
        }

        let matches = matching_indices(&query, self.catalog.records());
        tracing::debug!(query = %query, matches = matches.len(), "terminal search");
        self.view = present(&self.catalog, &matches);
    }

    /// Pick a suggestion: the query becomes the chosen model and the detail
    /// view is shown for that record alone.
    pub fn select(&mut self, index: usize) {
        let Some(record) = self.catalog.get(index) else {
            tracing::warn!(index, "ignoring selection of unknown terminal");
            return;
        };
        self.query = record.model().to_string();
        self.view = View::Detail(detail_view(record));
    }

    pub fn clear(&mut self) {
        self.query.clear();
        self.view = View::Empty;
        self.focus_requested = true;
    }

    /// Returns true once after `clear`, telling the front end to focus the
    /// query field.
    pub fn take_focus_request(&mut self) -> bool {
        std::mem::take(&mut self.focus_requested)
    }
}
