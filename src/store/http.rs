//! Hosted CRUD REST backend.
//!
//! Thin `reqwest` wrapper over two endpoints:
//! - `GET  {base}/collections/{collection}/items` → `{ "items": [...] }`
//! - `POST {base}/collections/{collection}/items` → created record
//!
//! Response parsing lives in pure functions for testability.

use std::time::Duration;

use reqwest::Url;
use tracing::warn;

use super::{CrudStore, StoreError};
use crate::config::StoreTimeouts;

// =============================================================================
// CLIENT
// =============================================================================

pub struct HttpCrudStore {
    http: reqwest::Client,
    base_url: Url,
    api_key: Option<String>,
}

impl HttpCrudStore {
    /// Build a client for the store at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns `Setup` if the URL is invalid or the HTTP client fails to build.
    pub fn new(base_url: &str, api_key: Option<String>, timeouts: StoreTimeouts) -> Result<Self, StoreError> {
        let base_url = Url::parse(base_url).map_err(|e| StoreError::Setup(format!("CRUD_BASE_URL: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(StoreError::Setup(format!("CRUD_BASE_URL cannot be a base: {base_url}")));
        }
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| StoreError::Setup(e.to_string()))?;
        Ok(Self { http, base_url, api_key })
    }

    fn items_url(&self, collection: &str) -> Url {
        items_url(&self.base_url, collection)
    }

    fn authorize(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_key {
            Some(key) => builder.bearer_auth(key),
            None => builder,
        }
    }

    async fn send(&self, builder: reqwest::RequestBuilder) -> Result<String, StoreError> {
        let response = self
            .authorize(builder)
            .send()
            .await
            .map_err(|e| StoreError::Request(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| StoreError::Request(e.to_string()))?;

        if !status.is_success() {
            warn!(status = status.as_u16(), "store returned error status");
            return Err(StoreError::Status { status: status.as_u16(), body: text });
        }
        Ok(text)
    }
}

#[async_trait::async_trait]
impl CrudStore for HttpCrudStore {
    async fn get_all(&self, collection: &str) -> Result<Vec<serde_json::Value>, StoreError> {
        let text = self.send(self.http.get(self.items_url(collection))).await?;
        parse_items(&text)
    }

    async fn create(&self, collection: &str, record: serde_json::Value) -> Result<serde_json::Value, StoreError> {
        let text = self
            .send(self.http.post(self.items_url(collection)).json(&record))
            .await?;
        Ok(parse_created(&text, record))
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(serde::Deserialize)]
struct ItemsEnvelope {
    items: Vec<serde_json::Value>,
}

// =============================================================================
// PARSING
// =============================================================================

fn items_url(base: &Url, collection: &str) -> Url {
    let mut url = base.clone();
    if let Ok(mut segments) = url.path_segments_mut() {
        segments
            .pop_if_empty()
            .extend(["collections", collection, "items"]);
    }
    url
}

fn parse_items(text: &str) -> Result<Vec<serde_json::Value>, StoreError> {
    let envelope: ItemsEnvelope = serde_json::from_str(text).map_err(|e| StoreError::Payload(e.to_string()))?;
    Ok(envelope.items)
}

/// The created record as echoed by the store. Accepts a bare record or
/// `{ "item": record }`; falls back to what was sent when the body is empty
/// or not JSON.
fn parse_created(text: &str, sent: serde_json::Value) -> serde_json::Value {
    match serde_json::from_str::<serde_json::Value>(text) {
        Ok(serde_json::Value::Object(mut body)) => match body.remove("item") {
            Some(item @ serde_json::Value::Object(_)) => item,
            Some(other) => {
                body.insert("item".into(), other);
                serde_json::Value::Object(body)
            }
            None => serde_json::Value::Object(body),
        },
        _ => sent,
    }
}

#[cfg(test)]
#[path = "http_test.rs"]
mod tests;
