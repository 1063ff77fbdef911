//! JSON API over the same listing and contact logic as the pages.

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use serde::Serialize;

use super::site::contact_error_to_status;
use crate::models::{ContactFields, ContactSubmission, FlightRecord};
use crate::services::contact::{self, ContactForm};
use crate::services::flights::{FlightFilter, FlightListing, FlightQuery};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct FlightsResponse {
    pub items: Vec<FlightRecord>,
    /// Size of the unfiltered source set.
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

type ApiError = (StatusCode, Json<ErrorBody>);

fn api_error(status: StatusCode, message: impl Into<String>) -> ApiError {
    (status, Json(ErrorBody { error: message.into() }))
}

/// `GET /api/flights`: filtered flight view.
pub async fn list_flights(
    State(state): State<AppState>,
    Query(query): Query<FlightQuery>,
) -> Result<Json<FlightsResponse>, ApiError> {
    let filter = FlightFilter::from_query(&query).map_err(|e| api_error(StatusCode::BAD_REQUEST, e.to_string()))?;

    let listing = FlightListing::load(state.store.as_ref(), &state.config.collections.flights).await;
    if let FlightListing::Failed(message) = &listing {
        return Err(api_error(StatusCode::BAD_GATEWAY, message.clone()));
    }

    let items = listing.view(&filter).into_iter().cloned().collect();
    Ok(Json(FlightsResponse { items, total: listing.total() }))
}

/// `POST /api/contact`: store one contact submission.
pub async fn create_contact(
    State(state): State<AppState>,
    Json(fields): Json<ContactFields>,
) -> Result<(StatusCode, Json<ContactSubmission>), ApiError> {
    let mut form = ContactForm::with_fields(fields);
    let submission = contact::submit(&mut form, state.store.as_ref(), &state.config.collections.contact)
        .await
        .map_err(|e| api_error(contact_error_to_status(&e), e.to_string()))?;
    Ok((StatusCode::CREATED, Json(submission)))
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;
