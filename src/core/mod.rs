//! Core module containing the list pipeline and its fundamental types

pub mod error;
pub mod field;
pub mod filter;
pub mod item;
pub mod list_view;
pub mod notify;
pub mod pagination;
pub mod query;
pub mod source;

pub use error::{ConfigError, RequestError, SourceError, StorefrontError};
pub use field::FieldValue;
pub use filter::{
    Comparator, FilterConfig, FilterState, SortDirection, SortKind, SortOption, filter_items,
};
pub use item::{FieldName, ListItem};
pub use list_view::{ListLinks, ListSnapshot, ListView};
pub use notify::{Toast, ToastLevel, ToastQueue, load_items, report};
pub use pagination::{Page, PaginationState, Paginator, paginate, total_pages};
pub use query::{ListQuery, PaginationMeta};
pub use source::ListSource;
