//! Shared test harness for list source backends
//!
//! Provides `TestItem` implementing `ListItem` with fields covering all
//! `FieldValue` variants, plus the `list_source_tests!` conformance suite.
//!
//! # Usage
//!
//! From any integration test file in `tests/`:
//! ```rust,ignore
//! #[macro_use]
//! mod source_harness;
//! use source_harness::*;
//! ```

#![allow(dead_code)]

pub mod source_tests;

use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use storefront::core::field::FieldValue;
use storefront::core::filter::{FilterConfig, SortDirection, SortKind, SortOption};
use storefront::core::item::ListItem;
use uuid::Uuid;

storefront::list_fields! {
    /// Fields of [`TestItem`]
    pub enum TestField {
        Name => "name",
        Email => "email",
        Age => "age",
        Score => "score",
        Active => "active",
        CreatedAt => "created_at",
        Nickname => "nickname",
    }
}

// ---------------------------------------------------------------------------
// TestItem: covers all FieldValue variants
// ---------------------------------------------------------------------------

/// A test item with fields spanning all `FieldValue` variants.
///
/// - `name`, `email`: String
/// - `age`: Integer
/// - `score`: Float
/// - `active`: Boolean
/// - `created_at`: DateTime
/// - `nickname`: Null when absent
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TestItem {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub age: i64,
    pub score: f64,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub nickname: Option<String>,
}

impl ListItem for TestItem {
    type Field = TestField;

    fn resource_name() -> &'static str {
        "test_items"
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn field(&self, field: TestField) -> FieldValue {
        match field {
            TestField::Name => self.name.as_str().into(),
            TestField::Email => self.email.as_str().into(),
            TestField::Age => self.age.into(),
            TestField::Score => self.score.into(),
            TestField::Active => self.active.into(),
            TestField::CreatedAt => self.created_at.into(),
            TestField::Nickname => self.nickname.as_deref().into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Create a test item with deterministic field values
pub fn make_item(index: usize, name: &str) -> TestItem {
    let base = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
    TestItem {
        id: Uuid::new_v4(),
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        age: 20 + index as i64,
        score: index as f64 * 1.5,
        active: index % 2 == 0,
        created_at: base + Duration::days(index as i64),
        nickname: (index % 3 == 0).then(|| format!("nick{}", index)),
    }
}

/// Five items in non-alphabetical insertion order
pub fn sample_items() -> Vec<TestItem> {
    ["Delta", "alpha", "Charlie", "echo", "Bravo"]
        .iter()
        .enumerate()
        .map(|(i, name)| make_item(i, name))
        .collect()
}

/// Search by name and email; sort by name, age and date
pub fn test_filter_config() -> FilterConfig<TestItem> {
    FilterConfig::new()
        .search_field(TestField::Name)
        .search_field(TestField::Email)
        .sort_option(SortOption::by_field(
            "Name",
            TestField::Name,
            SortKind::String,
            SortDirection::Asc,
        ))
        .sort_option(SortOption::by_field(
            "Oldest First",
            TestField::Age,
            SortKind::Number,
            SortDirection::Desc,
        ))
        .sort_option(SortOption::by_field(
            "Newest",
            TestField::CreatedAt,
            SortKind::Date,
            SortDirection::Desc,
        ))
}
