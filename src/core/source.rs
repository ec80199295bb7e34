//! The boundary to wherever a list's items come from

use crate::core::error::SourceError;
use crate::core::item::ListItem;
use async_trait::async_trait;
use std::sync::Arc;

/// Supplies the full, unfiltered list of items for one resource
///
/// Implementations own loading, timeouts and cancellation. The list
/// pipeline only ever awaits `fetch_all` and never retries.
#[async_trait]
pub trait ListSource<T: ListItem>: Send + Sync {
    /// Fetch every item of the resource
    async fn fetch_all(&self) -> Result<Vec<T>, SourceError>;
}

#[async_trait]
impl<T: ListItem, S: ListSource<T> + ?Sized> ListSource<T> for Arc<S> {
    async fn fetch_all(&self) -> Result<Vec<T>, SourceError> {
        (**self).fetch_all().await
    }
}
