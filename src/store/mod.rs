//! External CRUD store, the only collaborator the site talks to.
//!
//! DESIGN
//! ======
//! The store is opaque: it exposes bulk read and single insert over named
//! collections of JSON records. `CrudStore` is the seam; backends are picked
//! at startup from `AppConfig`. Typed helpers decode rows into the record
//! shapes in `crate::models`.
//!
//! ERROR HANDLING
//! ==============
//! Every backend reports failures as `StoreError` so pages can surface them.
//! A row that fails to decode is skipped with a warning rather than failing
//! the whole bulk read.

pub mod http;
pub mod memory;
pub mod postgres;

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{info, warn};

use crate::config::{AppConfig, StoreBackend};

// =============================================================================
// ERROR
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The request never produced a response (connect, timeout, I/O).
    #[error("store request failed: {0}")]
    Request(String),

    /// The store answered with a non-success HTTP status.
    #[error("store responded with status {status}")]
    Status { status: u16, body: String },

    /// A payload could not be encoded or decoded.
    #[error("store payload invalid: {0}")]
    Payload(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("store setup failed: {0}")]
    Setup(String),
}

// =============================================================================
// TRAIT
// =============================================================================

/// Generic CRUD service over named collections of JSON records.
#[async_trait::async_trait]
pub trait CrudStore: Send + Sync {
    /// Read every record in `collection`. No filtering or pagination.
    async fn get_all(&self, collection: &str) -> Result<Vec<serde_json::Value>, StoreError>;

    /// Insert one record and return the store's echo of it.
    async fn create(&self, collection: &str, record: serde_json::Value) -> Result<serde_json::Value, StoreError>;
}

/// Bulk-read `collection` and decode each row as `T`.
///
/// # Errors
///
/// Returns the backend's error if the read fails.
pub async fn get_all_as<T: DeserializeOwned>(store: &dyn CrudStore, collection: &str) -> Result<Vec<T>, StoreError> {
    let rows = store.get_all(collection).await?;
    let total = rows.len();
    let items: Vec<T> = rows
        .into_iter()
        .filter_map(|row| match serde_json::from_value::<T>(row) {
            Ok(item) => Some(item),
            Err(e) => {
                warn!(error = %e, collection, "skipping undecodable record");
                None
            }
        })
        .collect();

    info!(collection, count = items.len(), skipped = total - items.len(), "loaded collection");
    Ok(items)
}

/// Encode `record` and insert it into `collection`. The echo is not inspected.
///
/// # Errors
///
/// Returns `Payload` if encoding fails, else the backend's error.
pub async fn create_from<T: Serialize + ?Sized>(
    store: &dyn CrudStore,
    collection: &str,
    record: &T,
) -> Result<(), StoreError> {
    let value = serde_json::to_value(record).map_err(|e| StoreError::Payload(e.to_string()))?;
    store.create(collection, value).await?;
    info!(collection, "record created");
    Ok(())
}

/// Record id carried in `_id`, if it is a non-empty string.
pub(crate) fn record_id(record: &serde_json::Value) -> Option<&str> {
    record
        .get("_id")
        .and_then(serde_json::Value::as_str)
        .filter(|id| !id.is_empty())
}

/// Return `record` with an `_id`, generating a UUID when absent.
pub(crate) fn ensure_record_id(mut record: serde_json::Value) -> Result<(String, serde_json::Value), StoreError> {
    if let Some(id) = record_id(&record) {
        return Ok((id.to_owned(), record));
    }
    let Some(object) = record.as_object_mut() else {
        return Err(StoreError::Payload("record must be a JSON object".into()));
    };
    let id = uuid::Uuid::new_v4().to_string();
    object.insert("_id".into(), serde_json::Value::String(id.clone()));
    Ok((id, record))
}

// =============================================================================
// BACKEND SELECTION
// =============================================================================

/// Build the store selected by `config.backend`.
///
/// # Errors
///
/// Returns an error if the backend cannot be initialised (bad URL, database
/// unreachable, unreadable seed file).
pub async fn build_store(config: &AppConfig) -> Result<Arc<dyn CrudStore>, StoreError> {
    match &config.backend {
        StoreBackend::Memory { seed_file } => {
            let store = match seed_file {
                Some(path) => memory::MemoryStore::from_seed_file(path).await?,
                None => memory::MemoryStore::new(),
            };
            info!(seeded = seed_file.is_some(), "using in-memory store");
            Ok(Arc::new(store))
        }
        StoreBackend::Http { base_url, api_key } => {
            let store = http::HttpCrudStore::new(base_url, api_key.clone(), config.timeouts)?;
            info!(%base_url, "using hosted CRUD store");
            Ok(Arc::new(store))
        }
        StoreBackend::Postgres { database_url, max_connections } => {
            let pool = crate::db::init_pool(database_url, *max_connections).await?;
            info!(max_connections, "using postgres store");
            Ok(Arc::new(postgres::PgCrudStore::new(pool)))
        }
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
