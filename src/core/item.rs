//! Item traits defining what a list view can search and sort

use crate::core::error::ConfigError;
use crate::core::field::FieldValue;
use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::str::FromStr;
use uuid::Uuid;

/// A closed set of field names for one item type.
///
/// Usually generated with [`list_fields!`](crate::list_fields), which gives
/// every variant a stable wire name used in configuration files and JSON.
pub trait FieldName:
    Copy + Eq + Hash + Debug + Display + FromStr<Err = ConfigError> + Send + Sync + 'static
{
    /// Wire name of the field (e.g. "price", "created_at")
    fn name(&self) -> &'static str;

    /// Every field of the item type, in declaration order
    fn all() -> &'static [Self];
}

/// A record that can be displayed in a list view.
///
/// Field access goes through the typed [`ListItem::Field`] enum instead of
/// string lookups, so a filter configuration can only name fields the item
/// actually has.
pub trait ListItem: Clone + Send + Sync + 'static {
    /// The field enum for this item type
    type Field: FieldName;

    /// The plural resource name used in URLs (e.g., "products")
    fn resource_name() -> &'static str;

    /// Unique identifier for this item
    fn id(&self) -> Uuid;

    /// Read a field. Missing optional values are [`FieldValue::Null`].
    fn field(&self, field: Self::Field) -> FieldValue;
}
