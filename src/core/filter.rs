//! Search and sort stage of the list pipeline
//!
//! Everything here is a pure function of the item list, a [`FilterConfig`]
//! and a [`FilterState`]; it is cheap enough to re-run on every keystroke.

use crate::config::{CatalogConfig, SortOptionConfig};
use crate::core::error::ConfigError;
use crate::core::item::{FieldName, ListItem};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

/// Custom ordering for a sort option, used verbatim when present
pub type Comparator<T> = Arc<dyn Fn(&T, &T) -> Ordering + Send + Sync>;

/// How the values of a sort field are compared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKind {
    /// Case-insensitive lexicographic order
    #[default]
    String,
    /// Numeric order
    Number,
    /// Chronological order
    Date,
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// One entry of the sort dropdown
pub struct SortOption<T: ListItem> {
    /// Identifier written to the `sort` query parameter (e.g. "Name: A-Z")
    pub value: String,
    /// Field to sort by; ignored when `comparator` is set
    pub field: Option<T::Field>,
    pub kind: SortKind,
    pub direction: SortDirection,
    pub comparator: Option<Comparator<T>>,
}

impl<T: ListItem> SortOption<T> {
    /// Sort by a field with the given comparison kind and direction
    pub fn by_field(
        value: impl Into<String>,
        field: T::Field,
        kind: SortKind,
        direction: SortDirection,
    ) -> Self {
        Self {
            value: value.into(),
            field: Some(field),
            kind,
            direction,
            comparator: None,
        }
    }

    /// Sort with a caller-supplied comparator
    pub fn custom(
        value: impl Into<String>,
        comparator: impl Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    ) -> Self {
        Self {
            value: value.into(),
            field: None,
            kind: SortKind::default(),
            direction: SortDirection::default(),
            comparator: Some(Arc::new(comparator)),
        }
    }

    /// Build an option from its configuration entry
    pub fn from_config(config: &SortOptionConfig) -> Result<Self, ConfigError> {
        let field = config
            .field
            .as_deref()
            .map(str::parse::<T::Field>)
            .transpose()?;

        Ok(Self {
            value: config.value.clone(),
            field,
            kind: config.kind,
            direction: config.direction,
            comparator: None,
        })
    }

    /// Compare two items under this option
    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        if let Some(comparator) = &self.comparator {
            return comparator(a, b);
        }
        match (self.key(a), self.key(b)) {
            (Some(left), Some(right)) => self.directed(left.compare(&right)),
            _ => Ordering::Equal,
        }
    }

    /// Stable sort of `indices` into `items`
    ///
    /// Field keys are computed once per item, not once per comparison.
    pub fn sort_indices(&self, items: &[T], indices: &mut [usize]) {
        if let Some(comparator) = &self.comparator {
            indices.sort_by(|&a, &b| comparator(&items[a], &items[b]));
            return;
        }
        if self.field.is_none() {
            return;
        }

        let mut keyed: Vec<(SortKey, usize)> = indices
            .iter()
            .filter_map(|&i| self.key(&items[i]).map(|key| (key, i)))
            .collect();
        // slice::sort_by is stable
        keyed.sort_by(|(a, _), (b, _)| self.directed(a.compare(b)));

        for (slot, (_, i)) in indices.iter_mut().zip(keyed) {
            *slot = i;
        }
    }

    fn key(&self, item: &T) -> Option<SortKey> {
        let value = item.field(self.field?);
        Some(match self.kind {
            SortKind::String => {
                let raw = value.string_key();
                SortKey::Text {
                    folded: raw.to_lowercase(),
                    raw,
                }
            }
            SortKind::Number => SortKey::Number(value.number_key()),
            SortKind::Date => SortKey::Date(value.date_key()),
        })
    }

    fn directed(&self, ordering: Ordering) -> Ordering {
        match self.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

/// Ordering key of one field value under a [`SortKind`]
#[derive(Debug, Clone, PartialEq)]
enum SortKey {
    /// Case-folded text first, raw text to break ties
    Text { folded: String, raw: String },
    Number(f64),
    Date(Option<DateTime<Utc>>),
}

impl SortKey {
    fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (
                SortKey::Text { folded, raw },
                SortKey::Text {
                    folded: other_folded,
                    raw: other_raw,
                },
            ) => folded.cmp(other_folded).then_with(|| raw.cmp(other_raw)),
            (SortKey::Number(a), SortKey::Number(b)) => a.total_cmp(b),
            (SortKey::Date(a), SortKey::Date(b)) => a.cmp(b),
            _ => Ordering::Equal,
        }
    }
}

impl<T: ListItem> Clone for SortOption<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            field: self.field,
            kind: self.kind,
            direction: self.direction,
            comparator: self.comparator.clone(),
        }
    }
}

impl<T: ListItem> fmt::Debug for SortOption<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortOption")
            .field("value", &self.value)
            .field("field", &self.field)
            .field("kind", &self.kind)
            .field("direction", &self.direction)
            .field("custom", &self.comparator.is_some())
            .finish()
    }
}

/// Public description of a sort option, as exposed over HTTP
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SortOptionInfo {
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<&'static str>,
    #[serde(rename = "type")]
    pub kind: SortKind,
    pub direction: SortDirection,
    pub custom: bool,
}

/// Which fields are searchable and which orders are offered for a list
pub struct FilterConfig<T: ListItem> {
    pub search_fields: Vec<T::Field>,
    pub sort_options: Vec<SortOption<T>>,
}

impl<T: ListItem> FilterConfig<T> {
    pub fn new() -> Self {
        Self {
            search_fields: Vec::new(),
            sort_options: Vec::new(),
        }
    }

    /// Add a searchable field
    pub fn search_field(mut self, field: T::Field) -> Self {
        self.search_fields.push(field);
        self
    }

    /// Append a sort option; the first one added is the default
    pub fn sort_option(mut self, option: SortOption<T>) -> Self {
        self.sort_options.push(option);
        self
    }

    /// Build a config from a catalog section of the configuration file
    ///
    /// Fails if a search or sort field is not a field of `T`.
    pub fn from_catalog(catalog: &CatalogConfig) -> Result<Self, ConfigError> {
        let search_fields = catalog
            .search_fields
            .iter()
            .map(|name| name.parse::<T::Field>())
            .collect::<Result<Vec<_>, _>>()?;

        let sort_options = catalog
            .sort_options
            .iter()
            .map(SortOption::from_config)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            search_fields,
            sort_options,
        })
    }

    /// Find the sort option with this value
    pub fn find_sort(&self, value: &str) -> Option<&SortOption<T>> {
        self.sort_options.iter().find(|option| option.value == value)
    }

    pub fn is_known_sort(&self, value: &str) -> bool {
        self.find_sort(value).is_some()
    }

    /// Value of the first sort option, or "" when none are configured
    pub fn default_sort_value(&self) -> &str {
        self.sort_options
            .first()
            .map(|option| option.value.as_str())
            .unwrap_or_default()
    }

    /// Describe the sort options for clients
    pub fn sort_option_infos(&self) -> Vec<SortOptionInfo> {
        self.sort_options
            .iter()
            .map(|option| SortOptionInfo {
                value: option.value.clone(),
                field: option
                    .field
                    .filter(|_| option.comparator.is_none())
                    .map(|field| field.name()),
                kind: option.kind,
                direction: option.direction,
                custom: option.comparator.is_some(),
            })
            .collect()
    }
}

impl<T: ListItem> Default for FilterConfig<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ListItem> Clone for FilterConfig<T> {
    fn clone(&self) -> Self {
        Self {
            search_fields: self.search_fields.clone(),
            sort_options: self.sort_options.clone(),
        }
    }
}

impl<T: ListItem> fmt::Debug for FilterConfig<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterConfig")
            .field("search_fields", &self.search_fields)
            .field("sort_options", &self.sort_options)
            .finish()
    }
}

/// The user's current search term and sort choice
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub search_value: String,
    pub sort_value: String,
}

impl FilterState {
    pub fn new(search_value: impl Into<String>, sort_value: impl Into<String>) -> Self {
        Self {
            search_value: search_value.into(),
            sort_value: sort_value.into(),
        }
    }

    /// Empty search, default sort
    pub fn for_config<T: ListItem>(config: &FilterConfig<T>) -> Self {
        Self::new("", config.default_sort_value())
    }
}

/// Trim and lowercase a search term; blank terms disable searching
fn normalize_term(raw: &str) -> Option<String> {
    let term = raw.trim();
    (!term.is_empty()).then(|| term.to_lowercase())
}

fn matches_term<T: ListItem>(item: &T, fields: &[T::Field], term: &str) -> bool {
    fields.iter().any(|&field| {
        item.field(field)
            .search_text()
            .is_some_and(|text| text.to_lowercase().contains(term))
    })
}

/// Whether `item` survives the search stage for `term`
///
/// Blank terms and configs without search fields match everything.
pub fn search_matches<T: ListItem>(item: &T, config: &FilterConfig<T>, term: &str) -> bool {
    match normalize_term(term) {
        Some(term) if !config.search_fields.is_empty() => {
            matches_term(item, &config.search_fields, &term)
        }
        _ => true,
    }
}

/// Indices into `items` of the filtered-and-sorted list
///
/// The sort is stable: items with equal keys keep their input order.
/// An unknown `sort_value` leaves the filtered list in input order.
pub fn filter_indices<T: ListItem>(
    items: &[T],
    config: &FilterConfig<T>,
    state: &FilterState,
) -> Vec<usize> {
    let mut indices: Vec<usize> = match normalize_term(&state.search_value) {
        Some(term) if !config.search_fields.is_empty() => (0..items.len())
            .filter(|&i| matches_term(&items[i], &config.search_fields, &term))
            .collect(),
        _ => (0..items.len()).collect(),
    };

    if let Some(option) = config.find_sort(&state.sort_value) {
        option.sort_indices(items, &mut indices);
    }

    indices
}

/// Filter and sort `items`
pub fn filter_items<'a, T: ListItem>(
    items: &'a [T],
    config: &FilterConfig<T>,
    state: &FilterState,
) -> Vec<&'a T> {
    filter_indices(items, config, state)
        .into_iter()
        .map(|i| &items[i])
        .collect()
}
