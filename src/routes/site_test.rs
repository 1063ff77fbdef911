use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;
use crate::config::AppConfig;
use crate::state::test_helpers::{failing_app_state, flight_json, test_app_state, test_app_state_with_flights};
use crate::store::memory::MemoryStore;
use crate::store::{CrudStore, StoreError};

fn filled_fields() -> Vec<(String, String)> {
    [
        ("senderName", "Ayşe Yılmaz"),
        ("senderEmail", "ayse@example.com"),
        ("subject", "Bagaj"),
        ("messageContent", "Bagaj hakkım nedir?"),
    ]
    .into_iter()
    .map(|(name, value)| (name.to_owned(), value.to_owned()))
    .collect()
}

/// Memory store that counts bulk reads.
#[derive(Default)]
struct CountingStore {
    inner: MemoryStore,
    reads: AtomicUsize,
}

#[async_trait::async_trait]
impl CrudStore for CountingStore {
    async fn get_all(&self, collection: &str) -> Result<Vec<serde_json::Value>, StoreError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.inner.get_all(collection).await
    }

    async fn create(&self, collection: &str, record: serde_json::Value) -> Result<serde_json::Value, StoreError> {
        self.inner.create(collection, record).await
    }
}

fn query(departure: &str, arrival: &str, date: &str) -> FlightQuery {
    let opt = |s: &str| (!s.is_empty()).then(|| s.to_owned());
    FlightQuery { departure: opt(departure), arrival: opt(arrival), date: opt(date) }
}

#[test]
fn contact_error_to_status_maps_variants() {
    assert_eq!(contact_error_to_status(&ContactError::MissingField(ContactField::Subject)), StatusCode::BAD_REQUEST);
    assert_eq!(contact_error_to_status(&ContactError::AlreadySubmitting), StatusCode::CONFLICT);
    assert_eq!(
        contact_error_to_status(&ContactError::Store(StoreError::Request("down".into()))),
        StatusCode::BAD_GATEWAY
    );
}

#[tokio::test]
async fn home_renders_with_active_nav() {
    let Html(html) = home().await;
    assert!(html.contains("aria-current=\"page\""));
    assert!(html.contains("href=\"/flights\""));
}

#[tokio::test]
async fn flights_page_filters_worked_example() {
    let (state, _) = test_app_state_with_flights(vec![
        flight_json("a", Some("İstanbul"), Some("Ankara"), Some("2024-05-01")),
        flight_json("b", Some("İzmir"), Some("Antalya"), Some("2024-05-02")),
        flight_json("c", Some("Bursa"), Some("Adana"), None),
    ]);

    let (status, Html(html)) = flights_page(State(state), Query(query("", "an", ""))).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("data-id=\"a\""));
    assert!(html.contains("data-id=\"b\""));
    assert!(html.contains("data-id=\"c\""));
}

#[tokio::test]
async fn flights_page_date_filter_excludes_undated_rows() {
    let (state, _) = test_app_state_with_flights(vec![
        flight_json("a", Some("İstanbul"), Some("Ankara"), Some("2024-05-01T09:30:00Z")),
        flight_json("b", Some("İzmir"), Some("Antalya"), Some("2024-05-02")),
        flight_json("c", Some("Bursa"), Some("Adana"), None),
    ]);

    let (status, Html(html)) = flights_page(State(state), Query(query("", "", "2024-05-01"))).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("data-id=\"a\""));
    assert!(!html.contains("data-id=\"b\""));
    assert!(!html.contains("data-id=\"c\""));
    assert!(html.contains("Filtreleri Temizle"));
}

#[tokio::test]
async fn flights_page_shows_empty_state_without_records() {
    let (state, _) = test_app_state();
    let (status, Html(html)) = flights_page(State(state), Query(FlightQuery::default())).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Henüz kayıtlı uçuş bulunmamaktadır."));
}

#[tokio::test]
async fn flights_page_rejects_invalid_date_but_keeps_text_filters() {
    let (state, _) = test_app_state_with_flights(vec![flight_json("a", Some("İzmir"), None, None)]);
    let (status, Html(html)) = flights_page(State(state), Query(query("İz", "", "01.05.2024"))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(html.contains("Geçersiz tarih"));
    assert!(html.contains("value=\"İz\""));
}

#[tokio::test]
async fn flights_page_reports_store_failure() {
    let (status, Html(html)) = flights_page(State(failing_app_state()), Query(FlightQuery::default())).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(html.contains("notice error"));
    assert!(!html.contains("flight-card"));
}

#[tokio::test]
async fn contact_page_renders_empty_form() {
    let Html(html) = contact_page().await;
    assert!(html.contains("action=\"/contact\""));
    assert!(!html.contains("banner"));
}

#[tokio::test]
async fn submit_contact_stores_record_and_shows_banner() {
    let (state, store) = test_app_state();
    let collection = state.config.collections.contact.clone();

    let (status, Html(html)) = submit_contact(State(state), Form(filled_fields())).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("banner success"));
    assert!(!html.contains("Ayşe Yılmaz"));
    assert_eq!(store.len(&collection).await, 1);
}

#[tokio::test]
async fn submit_contact_missing_field_writes_nothing() {
    let (state, store) = test_app_state();
    let collection = state.config.collections.contact.clone();
    let mut fields = filled_fields();
    fields[1].1.clear();

    let (status, Html(html)) = submit_contact(State(state), Form(fields)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(html.contains("banner error"));
    assert_eq!(store.len(&collection).await, 0);
}

#[tokio::test]
async fn submit_contact_store_failure_keeps_fields() {
    let (status, Html(html)) = submit_contact(State(failing_app_state()), Form(filled_fields())).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(html.contains("banner error"));
    assert!(html.contains("Ayşe Yılmaz"));
}

#[tokio::test]
async fn flights_page_invalid_date_skips_store_read() {
    let store = Arc::new(CountingStore::default());
    let state = AppState::new(AppConfig::default(), store.clone());

    let (status, _) = flights_page(State(state.clone()), Query(query("", "", "2024/05/01"))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(store.reads.load(Ordering::SeqCst), 0);

    let (status, _) = flights_page(State(state), Query(query("", "", "2024-05-01"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(store.reads.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn submit_contact_ignores_unknown_form_names() {
    let (state, store) = test_app_state();
    let collection = state.config.collections.contact.clone();
    let mut pairs = filled_fields();
    pairs.push(("website".to_owned(), "spam".to_owned()));

    let (status, _) = submit_contact(State(state), Form(pairs)).await;
    assert_eq!(status, StatusCode::OK);
    let rows = store.get_all(&collection).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["senderName"], "Ayşe Yılmaz");
    assert!(rows[0].get("website").is_none());
}
