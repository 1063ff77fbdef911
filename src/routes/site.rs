//! HTML page handlers.

use std::time::Instant;

use axum::Form;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Html;
use time::OffsetDateTime;
use tracing::warn;

use crate::models::ContactField;
use crate::pages;
use crate::pages::flights::{FlightsView, ListingState};
use crate::services::contact::{self, ContactError, ContactForm};
use crate::services::flights::{FlightFilter, FlightListing, FlightQuery};
use crate::state::AppState;

pub(crate) fn current_year() -> i32 {
    OffsetDateTime::now_utc().year()
}

/// `GET /`: home page.
pub async fn home() -> Html<String> {
    Html(pages::home::render(current_year()))
}

/// `GET /flights`: listing page filtered by the query string.
pub async fn flights_page(
    State(state): State<AppState>,
    Query(query): Query<FlightQuery>,
) -> (StatusCode, Html<String>) {
    let filter = match FlightFilter::from_query(&query) {
        Ok(filter) => filter,
        Err(e) => {
            warn!(error = %e, "rejected flight filter");
            let text_only = FlightFilter {
                departure: query.departure.unwrap_or_default(),
                arrival: query.arrival.unwrap_or_default(),
                date: None,
            };
            let view = FlightsView { filter: &text_only, state: ListingState::InvalidFilter(&e) };
            return (StatusCode::BAD_REQUEST, Html(pages::flights::render(&view, current_year())));
        }
    };

    let listing = FlightListing::load(state.store.as_ref(), &state.config.collections.flights).await;
    let status = match &listing {
        FlightListing::Failed(_) => StatusCode::BAD_GATEWAY,
        FlightListing::Loaded(_) => StatusCode::OK,
    };
    let view = FlightsView { filter: &filter, state: ListingState::Listing(&listing) };
    (status, Html(pages::flights::render(&view, current_year())))
}

/// `GET /contact`: empty contact form.
pub async fn contact_page() -> Html<String> {
    Html(pages::contact::render(&ContactForm::new(), Instant::now(), current_year()))
}

/// `POST /contact`: run the submit flow and re-render with its outcome.
///
/// Posted pairs are applied field by field; unknown names are ignored.
pub async fn submit_contact(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> (StatusCode, Html<String>) {
    let mut form = ContactForm::new();
    for (name, value) in pairs {
        if let Some(field) = ContactField::from_name(&name) {
            form.set_field(field, value);
        }
    }
    let status = match contact::submit(&mut form, state.store.as_ref(), &state.config.collections.contact).await {
        Ok(_) => StatusCode::OK,
        Err(e) => contact_error_to_status(&e),
    };
    (status, Html(pages::contact::render(&form, Instant::now(), current_year())))
}

pub(crate) fn contact_error_to_status(err: &ContactError) -> StatusCode {
    match err {
        ContactError::MissingField(_) => StatusCode::BAD_REQUEST,
        ContactError::AlreadySubmitting => StatusCode::CONFLICT,
        ContactError::Timestamp(_) => StatusCode::INTERNAL_SERVER_ERROR,
        ContactError::Store(_) => StatusCode::BAD_GATEWAY,
    }
}

#[cfg(test)]
#[path = "site_test.rs"]
mod tests;
