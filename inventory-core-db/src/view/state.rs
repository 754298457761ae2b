use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::view::search::SearchMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Active sort column and direction. An empty key performs no reordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortConfig {
    pub key: String,
    pub direction: SortDirection,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            key: String::new(),
            direction: SortDirection::Ascending,
        }
    }
}

/// # Documentation
/// - Everything the view pipeline derives from: search text, field filters,
///   sort configuration and the current page.
/// - Derived state only: recomputed from the full record set on every
///   change, never persisted.
/// - Changing search text or filters resets the page to 1; sort-only
///   changes keep the current page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    pub search_query: String,
    pub search_mode: SearchMode,
    pub filters: BTreeMap<String, String>,
    pub sort: SortConfig,
    /// 1-based page number.
    pub current_page: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            search_query: String::new(),
            search_mode: SearchMode::default(),
            filters: BTreeMap::new(),
            sort: SortConfig::default(),
            current_page: 1,
        }
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        if query != self.search_query {
            self.search_query = query;
            self.current_page = 1;
        }
    }

    pub fn set_filters(&mut self, filters: BTreeMap<String, String>) {
        if filters != self.filters {
            self.filters = filters;
            self.current_page = 1;
        }
    }

    pub fn set_filter(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let (name, value) = (name.into(), value.into());
        if self.filters.get(&name) != Some(&value) {
            self.filters.insert(name, value);
            self.current_page = 1;
        }
    }

    /// Sort-header click: first click sorts a column ascending, a second
    /// click on the same column flips to descending.
    pub fn toggle_sort(&mut self, key: &str) {
        if self.sort.key == key && self.sort.direction == SortDirection::Ascending {
            self.sort.direction = SortDirection::Descending;
        } else {
            self.sort = SortConfig {
                key: key.to_string(),
                direction: SortDirection::Ascending,
            };
        }
    }

    pub fn set_page(&mut self, page: usize) {
        self.current_page = page.max(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_and_filter_changes_reset_the_page() {
        let mut state = ViewState::new();
        state.set_page(4);
        state.set_search_query("svc");
        assert_eq!(state.current_page, 1);

        state.set_page(3);
        state.set_filter("status", "Deployed");
        assert_eq!(state.current_page, 1);
    }

    #[test]
    fn sort_changes_keep_the_page() {
        let mut state = ViewState::new();
        state.set_page(5);
        state.toggle_sort("model");
        assert_eq!(state.current_page, 5);
        assert_eq!(state.sort.key, "model");
        assert_eq!(state.sort.direction, SortDirection::Ascending);

        state.toggle_sort("model");
        assert_eq!(state.sort.direction, SortDirection::Descending);

        state.toggle_sort("status");
        assert_eq!(state.sort.direction, SortDirection::Ascending);
        assert_eq!(state.current_page, 5);
    }

    #[test]
    fn unchanged_search_keeps_the_page() {
        let mut state = ViewState::new();
        state.set_search_query("svc");
        state.set_page(2);
        state.set_search_query("svc");
        assert_eq!(state.current_page, 2);
    }
}
