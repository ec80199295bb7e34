//! Field value types used for searching and sorting list items

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A polymorphic field value that can hold different types
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum FieldValue {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    DateTime(DateTime<Utc>),
    Null,
}

impl FieldValue {
    /// Stringified form used for substring search
    ///
    /// `Null` has no text and therefore never matches a search term.
    pub fn search_text(&self) -> Option<String> {
        match self {
            FieldValue::String(s) => Some(s.clone()),
            FieldValue::Integer(i) => Some(i.to_string()),
            FieldValue::Float(f) => Some(f.to_string()),
            FieldValue::Boolean(b) => Some(b.to_string()),
            FieldValue::DateTime(dt) => Some(dt.to_rfc3339()),
            FieldValue::Null => None,
        }
    }

    /// Key for lexicographic ordering; null becomes the empty string
    pub fn string_key(&self) -> String {
        self.search_text().unwrap_or_default()
    }

    /// Key for numeric ordering
    ///
    /// Strings are parsed leniently; anything that is not a number
    /// (including null and the empty string) orders as zero.
    pub fn number_key(&self) -> f64 {
        match self {
            FieldValue::Integer(i) => *i as f64,
            FieldValue::Float(f) => *f,
            FieldValue::Boolean(b) => f64::from(u8::from(*b)),
            FieldValue::DateTime(dt) => dt.timestamp_millis() as f64,
            FieldValue::String(s) => s.trim().parse().unwrap_or(0.0),
            FieldValue::Null => 0.0,
        }
    }

    /// Key for chronological ordering
    ///
    /// Accepts RFC 3339 timestamps, plain `YYYY-MM-DD` dates and epoch
    /// milliseconds. Values that are not dates return `None`, which orders
    /// before every real instant.
    pub fn date_key(&self) -> Option<DateTime<Utc>> {
        match self {
            FieldValue::DateTime(dt) => Some(*dt),
            FieldValue::Integer(millis) => DateTime::from_timestamp_millis(*millis),
            FieldValue::String(s) => parse_date(s.trim()),
            _ => None,
        }
    }
}

fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::String(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::String(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Boolean(value)
    }
}

impl From<DateTime<Utc>> for FieldValue {
    fn from(value: DateTime<Utc>) -> Self {
        FieldValue::DateTime(value)
    }
}

impl<V: Into<FieldValue>> From<Option<V>> for FieldValue {
    fn from(value: Option<V>) -> Self {
        value.map(Into::into).unwrap_or(FieldValue::Null)
    }
}
