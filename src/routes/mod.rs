//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Server-rendered pages live at the site root, the JSON API under `/api`,
//! and static assets (stylesheet, images) under `/assets`. All handlers share
//! `AppState`; request logging and gzip are applied to the whole router.

pub mod api;
pub mod site;

use axum::Router;
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::{get, post};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Full application router.
pub fn app(state: AppState) -> Router {
    let assets = ServeDir::new(&state.config.static_dir);

    Router::new()
        .route("/", get(site::home))
        .route("/flights", get(site::flights_page))
        .route("/contact", get(site::contact_page).post(site::submit_contact))
        .route("/api/flights", get(api::list_flights))
        .route("/api/contact", post(api::create_contact))
        .route("/healthz", get(healthz))
        .nest_service("/assets", assets)
        .fallback(not_found)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

async fn not_found() -> (StatusCode, Html<String>) {
    (StatusCode::NOT_FOUND, Html(crate::pages::render_not_found(site::current_year())))
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
