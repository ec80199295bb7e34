//! In-memory implementation of ListSource for testing and development

use crate::core::error::SourceError;
use crate::core::item::ListItem;
use crate::core::source::ListSource;
use async_trait::async_trait;
use std::sync::{Arc, RwLock};

/// In-memory list source
///
/// Useful for testing and development. Uses RwLock for thread-safe access;
/// items are returned in insertion order.
#[derive(Clone)]
pub struct InMemoryListSource<T: ListItem> {
    items: Arc<RwLock<Vec<T>>>,
}

impl<T: ListItem> InMemoryListSource<T> {
    /// Create an empty in-memory source
    pub fn new() -> Self {
        Self::with_items(Vec::new())
    }

    pub fn with_items(items: Vec<T>) -> Self {
        Self {
            items: Arc::new(RwLock::new(items)),
        }
    }

    fn poisoned(e: impl std::fmt::Display) -> SourceError {
        SourceError::Unavailable {
            resource: T::resource_name().to_string(),
            message: format!("Failed to acquire lock: {}", e),
        }
    }

    /// Append an item
    pub fn insert(&self, item: T) -> Result<(), SourceError> {
        let mut items = self.items.write().map_err(Self::poisoned)?;
        items.push(item);
        Ok(())
    }

    /// Replace the whole list
    pub fn replace_all(&self, new_items: Vec<T>) -> Result<(), SourceError> {
        let mut items = self.items.write().map_err(Self::poisoned)?;
        *items = new_items;
        Ok(())
    }

    pub fn len(&self) -> Result<usize, SourceError> {
        Ok(self.items.read().map_err(Self::poisoned)?.len())
    }

    pub fn is_empty(&self) -> Result<bool, SourceError> {
        Ok(self.len()? == 0)
    }
}

impl<T: ListItem> Default for InMemoryListSource<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: ListItem> ListSource<T> for InMemoryListSource<T> {
    async fn fetch_all(&self) -> Result<Vec<T>, SourceError> {
        let items = self.items.read().map_err(Self::poisoned)?;
        Ok(items.clone())
    }
}
