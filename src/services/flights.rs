//! Flight listing - bulk load plus in-memory filtering.
//!
//! DESIGN
//! ======
//! The listing fetches the whole flights collection once per view and derives
//! the visible subset from three independent predicates combined by AND:
//! departure substring, arrival substring, and calendar-day equality. The
//! derived view is recomputed from scratch on every call; nothing is indexed
//! and the source list is never mutated.
//!
//! ERROR HANDLING
//! ==============
//! A failed bulk read is kept as `FlightListing::Failed` so the page can say
//! so instead of showing an empty list that looks like "no flights".

use serde::Deserialize;
use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use tracing::error;

use crate::models::FlightRecord;
use crate::store::{self, CrudStore, StoreError};

const FILTER_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");
const LISTING_PATH: &str = "/flights";

// =============================================================================
// FILTER
// =============================================================================

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FilterError {
    #[error("invalid date filter: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),
}

/// Raw filter values as they arrive in a query string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FlightQuery {
    pub departure: Option<String>,
    pub arrival: Option<String>,
    pub date: Option<String>,
}

/// The three current filter values. Empty strings and `None` are unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlightFilter {
    pub departure: String,
    pub arrival: String,
    pub date: Option<Date>,
}

impl FlightFilter {
    /// Parse query values. Absent or empty values are unset; text filters are
    /// kept verbatim and a non-blank date must be `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDate` if the date is not a calendar date.
    pub fn from_query(query: &FlightQuery) -> Result<Self, FilterError> {
        let date = match query.date.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(Date::parse(raw, FILTER_DATE).map_err(|_| FilterError::InvalidDate(raw.to_owned()))?),
        };

        Ok(Self {
            departure: query.departure.clone().unwrap_or_default(),
            arrival: query.arrival.clone().unwrap_or_default(),
            date,
        })
    }

    /// True when any of the three values is set.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.departure.is_empty() || !self.arrival.is_empty() || self.date.is_some()
    }

    /// Reset all three values at once.
    #[must_use]
    pub fn cleared() -> Self {
        Self::default()
    }

    /// The date value formatted for an `<input type="date">`.
    #[must_use]
    pub fn date_input_value(&self) -> String {
        self.date
            .and_then(|d| d.format(FILTER_DATE).ok())
            .unwrap_or_default()
    }

    /// Listing URL carrying this filter; the bare listing path when inactive.
    #[must_use]
    pub fn href(&self) -> String {
        let date = self.date_input_value();
        let params: Vec<String> = [
            ("departure", self.departure.as_str()),
            ("arrival", self.arrival.as_str()),
            ("date", date.as_str()),
        ]
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
        .collect();

        if params.is_empty() {
            LISTING_PATH.to_owned()
        } else {
            format!("{LISTING_PATH}?{}", params.join("&"))
        }
    }

    #[must_use]
    pub fn matches(&self, flight: &FlightRecord) -> bool {
        contains_ignore_case(flight.departure_location.as_deref(), &self.departure)
            && contains_ignore_case(flight.arrival_location.as_deref(), &self.arrival)
            && self.matches_date(flight)
    }

    fn matches_date(&self, flight: &FlightRecord) -> bool {
        let Some(wanted) = self.date else {
            return true;
        };
        flight
            .departure_date
            .as_ref()
            .and_then(crate::models::DateValue::calendar_day)
            == Some(wanted)
    }
}

/// Empty needle matches anything; a missing haystack matches only an empty needle.
fn contains_ignore_case(haystack: Option<&str>, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    haystack.is_some_and(|h| h.to_lowercase().contains(&needle.to_lowercase()))
}

/// Project `flights` through `filter`, preserving source order.
#[must_use]
pub fn filter_flights<'a>(flights: &'a [FlightRecord], filter: &FlightFilter) -> Vec<&'a FlightRecord> {
    flights.iter().filter(|f| filter.matches(f)).collect()
}

// =============================================================================
// LISTING
// =============================================================================

/// Result of the single bulk read backing one listing view.
#[derive(Debug, Clone, PartialEq)]
pub enum FlightListing {
    Loaded(Vec<FlightRecord>),
    Failed(String),
}

impl FlightListing {
    /// Bulk-read the flights collection.
    pub async fn load(store: &dyn CrudStore, collection: &str) -> Self {
        match store::get_all_as::<FlightRecord>(store, collection).await {
            Ok(flights) => Self::Loaded(flights),
            Err(e) => {
                error!(error = %e, collection, "flight load failed");
                Self::Failed(load_failure_message(&e))
            }
        }
    }

    /// Visible flights for `filter`; empty when the load failed.
    #[must_use]
    pub fn view(&self, filter: &FlightFilter) -> Vec<&FlightRecord> {
        match self {
            Self::Loaded(flights) => filter_flights(flights, filter),
            Self::Failed(_) => Vec::new(),
        }
    }

    #[must_use]
    pub fn total(&self) -> usize {
        match self {
            Self::Loaded(flights) => flights.len(),
            Self::Failed(_) => 0,
        }
    }
}

fn load_failure_message(err: &StoreError) -> String {
    match err {
        StoreError::Status { status, .. } => format!("Uçuşlar yüklenemedi (sunucu yanıtı {status})."),
        _ => "Uçuşlar yüklenemedi. Lütfen daha sonra tekrar deneyin.".to_owned(),
    }
}

/// Message shown when the derived view is empty.
#[must_use]
pub fn empty_view_message(filter: &FlightFilter) -> &'static str {
    if filter.is_active() {
        "Arama kriterlerinize uygun uçuş bulunamadı."
    } else {
        "Henüz kayıtlı uçuş bulunmamaktadır."
    }
}

#[cfg(test)]
#[path = "flights_test.rs"]
mod tests;
