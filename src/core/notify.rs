//! Toast notifications and the error-to-toast adapter
//!
//! Service calls return `Result<T, StorefrontError>`; [`report`] is the one
//! place where a failure becomes something the user sees.

use crate::core::error::StorefrontError;
use crate::core::item::ListItem;
use crate::core::source::ListSource;
use serde::Serialize;
use std::time::{Duration, Instant};

/// How long a toast stays visible unless dismissed
pub const DEFAULT_TOAST_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastLevel {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
    pub expires_at: Instant,
}

/// Queue of visible toasts with time-based auto-dismiss
#[derive(Debug)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    ttl: Duration,
    next_id: u64,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::with_ttl(DEFAULT_TOAST_TTL)
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            toasts: Vec::new(),
            ttl,
            next_id: 1,
        }
    }

    /// Show a toast; returns its id
    pub fn push(&mut self, level: ToastLevel, message: impl Into<String>, now: Instant) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            level,
            message: message.into(),
            expires_at: now + self.ttl,
        });
        id
    }

    pub fn info(&mut self, message: impl Into<String>) -> u64 {
        self.push(ToastLevel::Info, message, Instant::now())
    }

    pub fn success(&mut self, message: impl Into<String>) -> u64 {
        self.push(ToastLevel::Success, message, Instant::now())
    }

    pub fn error(&mut self, message: impl Into<String>) -> u64 {
        self.push(ToastLevel::Error, message, Instant::now())
    }

    /// Close a toast early. Returns `false` if it was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id != id);
        self.toasts.len() != before
    }

    /// Drop every toast that expired at `now`; returns how many were dropped
    pub fn prune(&mut self, now: Instant) -> usize {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.expires_at > now);
        before - self.toasts.len()
    }

    /// Toasts still visible at `now`, oldest first
    pub fn active(&self, now: Instant) -> impl Iterator<Item = &Toast> {
        self.toasts.iter().filter(move |toast| toast.expires_at > now)
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new()
    }
}

/// Turn a failed service call into an error toast
///
/// Returns the value on success and `None` after reporting a failure.
pub fn report<T>(result: Result<T, StorefrontError>, toasts: &mut ToastQueue) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(code = e.error_code(), error = %e, "service call failed");
            toasts.error(e.to_string());
            None
        }
    }
}

/// Fetch a list, reporting failures and treating them as an empty list
///
/// A failed fetch therefore renders the "no results" state of a list view
/// instead of an error page.
pub async fn load_items<T, S>(source: &S, toasts: &mut ToastQueue) -> Vec<T>
where
    T: ListItem,
    S: ListSource<T> + ?Sized,
{
    let result = source.fetch_all().await.map_err(StorefrontError::from);
    match report(result, toasts) {
        Some(items) => {
            tracing::debug!(resource = T::resource_name(), count = items.len(), "items loaded");
            items
        }
        None => Vec::new(),
    }
}
