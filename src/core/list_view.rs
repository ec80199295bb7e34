//! List view: filtering, sorting and pagination bound to a URL query
//!
//! A [`ListView`] owns one visit's worth of items together with the search
//! term, sort choice and current page. Every user action updates that state
//! and the view's [`ListQuery`] in the same call, so reloading the query
//! string reproduces the exact same view.
//!
//! ```text
//! Idle ──search / sort──▶ Idle (page 1, filter re-applied)
//!  ▲                        │
//!  └──────page click────────┘ (filter unchanged)
//! ```

use crate::config::ListingConfig;
use crate::core::filter::{FilterConfig, FilterState, filter_indices};
use crate::core::item::ListItem;
use crate::core::pagination::Paginator;
use crate::core::query::ListQuery;
use serde::Serialize;
use std::sync::Arc;

/// A rendered page of a list view
#[derive(Debug, Serialize)]
pub struct ListSnapshot<'a, T> {
    pub items: Vec<&'a T>,
    pub page: usize,
    pub total_pages: usize,
    /// Number of items after filtering
    pub total_items: usize,
    pub sort: &'a str,
    pub search: &'a str,
    /// No item survived filtering; render the "no results" affordance
    pub empty: bool,
    /// Query string reproducing this view
    pub query: String,
}

/// Query strings for the navigation controls of a view
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListLinks {
    #[serde(rename = "self")]
    pub current: String,
    pub first: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    pub last: String,
    /// Search, sort and page back to defaults
    pub reset: String,
}

/// Filtering, sorting and pagination over one list of items
#[derive(Debug, Clone)]
pub struct ListView<T: ListItem> {
    config: Arc<FilterConfig<T>>,
    items: Vec<T>,
    /// Indices into `items` of the filtered-and-sorted list
    matched: Vec<usize>,
    filter: FilterState,
    paginator: Paginator,
    /// Page size explicitly requested through the URL
    limit: Option<usize>,
    query: ListQuery,
}

impl<T: ListItem> ListView<T> {
    /// A view on page 1 with no search and the default sort
    pub fn new(config: Arc<FilterConfig<T>>, items: Vec<T>, items_per_page: usize) -> Self {
        let filter = FilterState::for_config(&config);
        let mut view = Self {
            config,
            items,
            matched: Vec::new(),
            filter,
            paginator: Paginator::new(items_per_page),
            limit: None,
            query: ListQuery::default(),
        };
        view.refilter();
        view.sync_query();
        view
    }

    /// Seed a view from URL parameters
    ///
    /// Each parameter falls back to its default on its own: a page that is
    /// not a positive integer or lies past the last page becomes 1, an
    /// unknown sort becomes the first configured option, a missing search
    /// becomes empty.
    pub fn from_query(
        config: Arc<FilterConfig<T>>,
        items: Vec<T>,
        query: &ListQuery,
        listing: &ListingConfig,
    ) -> Self {
        let limit = query
            .limit_number()
            .map(|requested| listing.page_size(Some(requested)));
        let mut view = Self::new(config, items, listing.page_size(limit));
        view.limit = limit;

        if let Some(sort) = query.sort_value().filter(|s| view.config.is_known_sort(s)) {
            view.filter.sort_value = sort.to_string();
        }
        view.filter.search_value = stored_search(query.search_term().to_string());
        view.refilter();

        if let Some(page) = query.page_number() {
            view.paginator.go_to_page(page);
        }
        view.sync_query();
        view
    }

    pub fn config(&self) -> &FilterConfig<T> {
        &self.config
    }

    pub fn filter_state(&self) -> &FilterState {
        &self.filter
    }

    pub fn pagination(&self) -> &Paginator {
        &self.paginator
    }

    pub fn current_page(&self) -> usize {
        self.paginator.current_page()
    }

    pub fn total_pages(&self) -> usize {
        self.paginator.total_pages()
    }

    /// All items, unfiltered
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// The whole filtered-and-sorted list
    pub fn filtered_items(&self) -> Vec<&T> {
        self.matched.iter().map(|&i| &self.items[i]).collect()
    }

    /// Items on the current page
    pub fn page_items(&self) -> Vec<&T> {
        self.paginator
            .slice(&self.matched)
            .iter()
            .map(|&i| &self.items[i])
            .collect()
    }

    /// Whether filtering left nothing to show
    pub fn is_empty_result(&self) -> bool {
        self.matched.is_empty()
    }

    /// URL state of the view
    pub fn query(&self) -> &ListQuery {
        &self.query
    }

    pub fn query_string(&self) -> String {
        self.query.to_query_string()
    }

    /// Apply a new search term; always returns to page 1
    ///
    /// A blank term is stored as "" since the URL drops it.
    pub fn submit_search(&mut self, term: impl Into<String>) {
        self.filter.search_value = stored_search(term.into());
        self.refilter();
        self.paginator.reset_to_first_page();
        self.sync_query();
    }

    /// Choose a sort option; always returns to page 1
    ///
    /// Unknown values are ignored and leave the view untouched.
    pub fn select_sort(&mut self, value: &str) -> bool {
        if !self.config.is_known_sort(value) {
            return false;
        }
        self.filter.sort_value = value.to_string();
        self.refilter();
        self.paginator.reset_to_first_page();
        self.sync_query();
        true
    }

    /// Jump to page `n`; out-of-range pages are ignored
    pub fn go_to_page(&mut self, n: usize) -> bool {
        let moved = self.paginator.go_to_page(n);
        if moved {
            self.sync_query();
        }
        moved
    }

    pub fn next_page(&mut self) -> bool {
        let moved = self.paginator.next_page();
        if moved {
            self.sync_query();
        }
        moved
    }

    pub fn prev_page(&mut self) -> bool {
        let moved = self.paginator.prev_page();
        if moved {
            self.sync_query();
        }
        moved
    }

    /// Clear search, restore the default sort and go to page 1
    pub fn reset(&mut self) {
        self.filter = FilterState::for_config(&self.config);
        self.refilter();
        self.paginator.reset_to_first_page();
        self.sync_query();
    }

    /// Replace the items (e.g. after a refresh), keeping search and sort
    ///
    /// The current page is kept when it still exists.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.refilter();
        self.sync_query();
    }

    /// Render the current page
    pub fn snapshot(&self) -> ListSnapshot<'_, T> {
        ListSnapshot {
            items: self.page_items(),
            page: self.paginator.current_page(),
            total_pages: self.paginator.total_pages(),
            total_items: self.matched.len(),
            sort: &self.filter.sort_value,
            search: &self.filter.search_value,
            empty: self.is_empty_result(),
            query: self.query_string(),
        }
    }

    /// Query strings for first/prev/next/last/reset navigation
    pub fn links(&self) -> ListLinks {
        let last_page = self.paginator.total_pages();
        ListLinks {
            current: self.query_string(),
            first: self.page_query(1),
            prev: self.after(|view| view.prev_page()),
            next: self.after(|view| view.next_page()),
            last: self.page_query(last_page),
            reset: self
                .after(|view| {
                    view.reset();
                    true
                })
                .unwrap_or_default(),
        }
    }

    /// Query string after applying `step` to a copy of the view
    fn after(&self, step: impl FnOnce(&mut Self) -> bool) -> Option<String> {
        let mut next = self.clone();
        step(&mut next).then(|| next.query_string())
    }

    fn page_query(&self, page: usize) -> String {
        ListQuery::from_state(
            page,
            &self.filter.sort_value,
            &self.filter.search_value,
            self.limit,
        )
        .to_query_string()
    }

    fn refilter(&mut self) {
        self.matched = filter_indices(&self.items, &self.config, &self.filter);
        self.paginator.set_item_count(self.matched.len());
    }

    fn sync_query(&mut self) {
        self.query = ListQuery::from_state(
            self.paginator.current_page(),
            &self.filter.sort_value,
            &self.filter.search_value,
            self.limit,
        );
    }
}

fn stored_search(term: String) -> String {
    if term.trim().is_empty() {
        String::new()
    } else {
        term
    }
}
