//! ListSource backed by a remote JSON endpoint

use crate::core::error::SourceError;
use crate::core::item::ListItem;
use crate::core::source::ListSource;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::marker::PhantomData;

/// Keys tried, in order, when the endpoint wraps its list in an object
const CONVENTIONAL_KEYS: &[&str] = &["data", "items", "results"];

/// Fetches a resource with `GET <endpoint>`
///
/// The body may be a JSON array of items, or an object carrying the array
/// under a collection key: the configured one, else `data`, `items`,
/// `results` or the resource name. Any non-2xx status is a fetch failure;
/// there are no retries and no partial results.
pub struct HttpListSource<T> {
    client: reqwest::Client,
    endpoint: String,
    collection_key: Option<String>,
    _item: PhantomData<fn() -> T>,
}

impl<T: ListItem + DeserializeOwned> HttpListSource<T> {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), endpoint)
    }

    pub fn with_client(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            collection_key: None,
            _item: PhantomData,
        }
    }

    /// Read the list from this key when the body is an object
    pub fn collection_key(mut self, key: impl Into<String>) -> Self {
        self.collection_key = Some(key.into());
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn decode_error(message: impl ToString) -> SourceError {
        SourceError::Decode {
            resource: T::resource_name().to_string(),
            message: message.to_string(),
        }
    }

    /// Pull the item array out of a response body
    fn extract_list(&self, body: Value) -> Result<Value, SourceError> {
        match body {
            Value::Array(_) => Ok(body),
            Value::Object(mut object) => {
                let keys = self
                    .collection_key
                    .as_deref()
                    .into_iter()
                    .chain(CONVENTIONAL_KEYS.iter().copied())
                    .chain(std::iter::once(T::resource_name()));

                for key in keys {
                    if let Some(list @ Value::Array(_)) = object.remove(key) {
                        return Ok(list);
                    }
                }
                Err(Self::decode_error("response object carries no item array"))
            }
            other => Err(Self::decode_error(format!(
                "expected a JSON array, got {}",
                json_kind(&other)
            ))),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[async_trait]
impl<T: ListItem + DeserializeOwned> ListSource<T> for HttpListSource<T> {
    async fn fetch_all(&self) -> Result<Vec<T>, SourceError> {
        let resource = T::resource_name();
        tracing::debug!(resource, endpoint = %self.endpoint, "fetching list");

        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| SourceError::Transport {
                resource: resource.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(resource, status = status.as_u16(), "list source returned an error status");
            return Err(SourceError::Status {
                resource: resource.to_string(),
                status: status.as_u16(),
            });
        }

        let body: Value = response.json().await.map_err(Self::decode_error)?;
        let list = self.extract_list(body)?;
        let items: Vec<T> = serde_json::from_value(list).map_err(Self::decode_error)?;

        tracing::debug!(resource, count = items.len(), "list fetched");
        Ok(items)
    }
}
