//! In-process store for local development and tests.

use std::collections::HashMap;
use std::path::Path;

use tokio::sync::RwLock;

use super::{CrudStore, StoreError, ensure_record_id};

/// Collections held in memory, insertion-ordered per collection.
#[derive(Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, Vec<serde_json::Value>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `records` in `collection`.
    #[must_use]
    pub fn with_records(collection: &str, records: Vec<serde_json::Value>) -> Self {
        let mut collections = HashMap::new();
        collections.insert(collection.to_owned(), records);
        Self { collections: RwLock::new(collections) }
    }

    /// Load a seed file shaped as `{ "<collection>": [record, ...], ... }`.
    ///
    /// # Errors
    ///
    /// Returns `Setup` if the file cannot be read or parsed.
    pub async fn from_seed_file(path: &Path) -> Result<Self, StoreError> {
        let text = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| StoreError::Setup(format!("read {}: {e}", path.display())))?;
        Self::from_seed_json(&text)
    }

    /// Parse seed JSON (see [`MemoryStore::from_seed_file`]).
    ///
    /// # Errors
    ///
    /// Returns `Setup` if the JSON is not a map of record arrays.
    pub fn from_seed_json(text: &str) -> Result<Self, StoreError> {
        let collections: HashMap<String, Vec<serde_json::Value>> =
            serde_json::from_str(text).map_err(|e| StoreError::Setup(format!("seed parse: {e}")))?;
        Ok(Self { collections: RwLock::new(collections) })
    }

    /// Number of records currently in `collection`.
    pub async fn len(&self, collection: &str) -> usize {
        self.collections
            .read()
            .await
            .get(collection)
            .map_or(0, Vec::len)
    }
}

#[async_trait::async_trait]
impl CrudStore for MemoryStore {
    async fn get_all(&self, collection: &str) -> Result<Vec<serde_json::Value>, StoreError> {
        Ok(self
            .collections
            .read()
            .await
            .get(collection)
            .cloned()
            .unwrap_or_default())
    }

    async fn create(&self, collection: &str, record: serde_json::Value) -> Result<serde_json::Value, StoreError> {
        let (_, record) = ensure_record_id(record)?;
        self.collections
            .write()
            .await
            .entry(collection.to_owned())
            .or_default()
            .push(record.clone());
        Ok(record)
    }
}

#[cfg(test)]
#[path = "memory_test.rs"]
mod tests;
