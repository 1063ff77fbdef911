//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds only immutable configuration and the store handle; per-view state
//! (filters, loaded flights, form fields) is built inside each request.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::store::CrudStore;

/// Shared application state. Clone is required by Axum; fields are `Arc`s.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub store: Arc<dyn CrudStore>,
}

impl AppState {
    #[must_use]
    pub fn new(config: AppConfig, store: Arc<dyn CrudStore>) -> Self {
        Self { config: Arc::new(config), store }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use super::*;
    use crate::store::StoreError;
    use crate::store::memory::MemoryStore;

    /// Store double whose every call fails like an unreachable backend.
    pub struct FailingStore;

    #[async_trait::async_trait]
    impl CrudStore for FailingStore {
        async fn get_all(&self, _collection: &str) -> Result<Vec<serde_json::Value>, StoreError> {
            Err(StoreError::Request("connection refused".into()))
        }

        async fn create(&self, _collection: &str, _record: serde_json::Value) -> Result<serde_json::Value, StoreError> {
            Err(StoreError::Status { status: 503, body: "unavailable".into() })
        }
    }

    /// Flight row in store wire format.
    #[must_use]
    pub fn flight_json(id: &str, dep: Option<&str>, arr: Option<&str>, day: Option<&str>) -> serde_json::Value {
        let mut row = serde_json::json!({ "_id": id });
        if let Some(dep) = dep {
            row["departureLocation"] = dep.into();
        }
        if let Some(arr) = arr {
            row["arrivalLocation"] = arr.into();
        }
        if let Some(day) = day {
            row["departureDate"] = day.into();
        }
        row
    }

    /// State over a memory store seeded with `flights` in the default collection.
    #[must_use]
    pub fn test_app_state_with_flights(flights: Vec<serde_json::Value>) -> (AppState, Arc<MemoryStore>) {
        let config = AppConfig::default();
        let store = Arc::new(MemoryStore::with_records(&config.collections.flights, flights));
        (AppState::new(config, store.clone()), store)
    }

    #[must_use]
    pub fn test_app_state() -> (AppState, Arc<MemoryStore>) {
        test_app_state_with_flights(Vec::new())
    }

    #[must_use]
    pub fn failing_app_state() -> AppState {
        AppState::new(AppConfig::default(), Arc::new(FailingStore))
    }
}
