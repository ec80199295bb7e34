//! URL query parameters for list views and pagination metadata

use crate::core::pagination::Paginator;
use serde::Serialize;

/// List view state as carried in a URL query string
///
/// All values are kept raw; interpretation (and falling back to defaults)
/// happens in [`ListView::from_query`](crate::core::list_view::ListView::from_query),
/// so parsing a query string never fails.
///
/// # Example
/// ```rust,ignore
/// GET /api/products?page=2&sort=Price%3A+Low+to+High&search=helmet
/// GET /api/products?search=yamaha&limit=5
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    /// Page number (starts at 1)
    pub page: Option<String>,

    /// Value of a configured sort option
    pub sort: Option<String>,

    /// Free-text search term
    pub search: Option<String>,

    /// Number of items per page
    pub limit: Option<String>,
}

impl ListQuery {
    /// Parse a raw query string (with or without the leading `?`)
    ///
    /// Unknown keys are ignored. When a key repeats, the first value wins.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.strip_prefix('?').unwrap_or(raw);
        let pairs: Vec<(String, String)> = match serde_urlencoded::from_str(raw) {
            Ok(pairs) => pairs,
            Err(e) => {
                tracing::debug!(error = %e, "ignoring undecodable query string");
                return Self::default();
            }
        };

        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "page" => &mut query.page,
                "sort" => &mut query.sort,
                "search" => &mut query.search,
                "limit" => &mut query.limit,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        query
    }

    /// Canonical query for a list view state
    ///
    /// A blank search term is left out.
    pub fn from_state(page: usize, sort: &str, search: &str, limit: Option<usize>) -> Self {
        Self {
            page: Some(page.to_string()),
            sort: (!sort.is_empty()).then(|| sort.to_string()),
            search: (!search.trim().is_empty()).then(|| search.to_string()),
            limit: limit.map(|l| l.to_string()),
        }
    }

    /// Page number if it is a positive integer
    pub fn page_number(&self) -> Option<usize> {
        parse_positive(self.page.as_deref())
    }

    /// Page size if it is a positive integer
    pub fn limit_number(&self) -> Option<usize> {
        parse_positive(self.limit.as_deref())
    }

    pub fn sort_value(&self) -> Option<&str> {
        self.sort.as_deref()
    }

    /// Search term, empty if absent
    pub fn search_term(&self) -> &str {
        self.search.as_deref().unwrap_or_default()
    }

    /// Encode as `application/x-www-form-urlencoded` (without leading `?`)
    pub fn to_query_string(&self) -> String {
        let pairs: Vec<(&str, &str)> = [
            ("page", &self.page),
            ("sort", &self.sort),
            ("search", &self.search),
            ("limit", &self.limit),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.as_deref().map(|v| (key, v)))
        .collect();

        // string pairs always encode
        serde_urlencoded::to_string(pairs).unwrap_or_default()
    }
}

fn parse_positive(raw: Option<&str>) -> Option<usize> {
    raw.and_then(|s| s.trim().parse::<usize>().ok())
        .filter(|&n| n > 0)
}

/// Pagination metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationMeta {
    /// Current page number (starts at 1)
    pub page: usize,

    /// Number of items per page
    pub limit: usize,

    /// Total number of items (after filters)
    pub total: usize,

    /// Total number of pages (at least 1)
    pub total_pages: usize,

    /// Whether there is a next page
    pub has_next: bool,

    /// Whether there is a previous page
    pub has_prev: bool,
}

impl PaginationMeta {
    pub fn from_paginator(paginator: &Paginator) -> Self {
        Self {
            page: paginator.current_page(),
            limit: paginator.items_per_page(),
            total: paginator.item_count(),
            total_pages: paginator.total_pages(),
            has_next: !paginator.on_last_page(),
            has_prev: !paginator.on_first_page(),
        }
    }
}
