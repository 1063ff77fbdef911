//! Flight listing page: filter form plus the derived list of flight cards.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use super::{Hero, Layout, NavItem, render_document};
use crate::format::{
    DURATION_PLACEHOLDER, TEXT_PLACEHOLDER, format_date, format_price, format_time, text_or,
};
use crate::models::FlightRecord;
use crate::services::flights::{FilterError, FlightFilter, FlightListing, empty_view_message};

const INVALID_DATE_MESSAGE: &str = "Geçersiz tarih. Lütfen takvimden bir tarih seçin.";

/// What the list area shows: a rejected filter (nothing was loaded) or the
/// outcome of the bulk read.
#[derive(Debug, Clone, Copy)]
pub enum ListingState<'a> {
    InvalidFilter(&'a FilterError),
    Listing(&'a FlightListing),
}

/// Everything the listing page shows for one request.
pub struct FlightsView<'a> {
    pub filter: &'a FlightFilter,
    pub state: ListingState<'a>,
}

#[must_use]
pub fn render(view: &FlightsView<'_>, year: i32) -> String {
    let content = match view.state {
        ListingState::InvalidFilter(_) => ListContent::Notice { text: INVALID_DATE_MESSAGE.to_owned(), error: true },
        ListingState::Listing(FlightListing::Failed(message)) => ListContent::Notice { text: message.clone(), error: true },
        ListingState::Listing(listing) => {
            let visible = listing.view(view.filter);
            if visible.is_empty() {
                ListContent::Notice { text: empty_view_message(view.filter).to_owned(), error: false }
            } else {
                ListContent::Cards(visible.into_iter().cloned().collect())
            }
        }
    };
    let filter = view.filter.clone();

    render_document(move || {
        view! {
            <Layout title=NavItem::Flights.label().to_owned() active=NavItem::Flights year>
                <Hero
                    title="Uçuşlarımız"
                    lead="Geniş destinasyon ağımızla dünyanın her yerine ulaşın. Size en uygun uçuşu bulun."
                />
                <FilterForm filter/>
                <FlightList content/>
            </Layout>
        }
    })
}

enum ListContent {
    Notice { text: String, error: bool },
    Cards(Vec<FlightRecord>),
}

#[component]
fn FilterForm(filter: FlightFilter) -> impl IntoView {
    let date_value = filter.date_input_value();
    let clear_link = filter.is_active().then(|| {
        let href = FlightFilter::cleared().href();
        view! { <a class="clear-filters" href=href>"Filtreleri Temizle"</a> }
    });

    view! {
        <section class="filters">
            <form method="get" action="/flights">
                <label>
                    "Kalkış Yeri"
                    <input type="text" name="departure" placeholder="Şehir ara..." value=filter.departure/>
                </label>
                <label>
                    "Varış Yeri"
                    <input type="text" name="arrival" placeholder="Şehir ara..." value=filter.arrival/>
                </label>
                <label>
                    "Tarih"
                    <input type="date" name="date" value=date_value/>
                </label>
                <button type="submit">"Ara"</button>
                {clear_link}
            </form>
        </section>
    }
}

#[component]
fn FlightList(content: ListContent) -> impl IntoView {
    let inner = match content {
        ListContent::Notice { text, error } => {
            let class = if error { "notice error" } else { "notice" };
            view! { <p class=class>{text}</p> }.into_any()
        }
        ListContent::Cards(flights) => flights
            .into_iter()
            .map(|flight| view! { <FlightCard flight/> })
            .collect_view()
            .into_any(),
    };

    view! { <section class="flight-list">{inner}</section> }
}

#[component]
fn FlightCard(flight: FlightRecord) -> impl IntoView {
    let number = text_or(flight.flight_number.as_deref(), TEXT_PLACEHOLDER).to_owned();
    let departure = text_or(flight.departure_location.as_deref(), TEXT_PLACEHOLDER).to_owned();
    let arrival = text_or(flight.arrival_location.as_deref(), TEXT_PLACEHOLDER).to_owned();
    let departure_time = format_time(flight.departure_time.as_ref());
    let arrival_time = format_time(flight.arrival_time.as_ref());
    let date = format_date(flight.departure_date.as_ref());
    let duration = text_or(flight.duration.as_deref(), DURATION_PLACEHOLDER).to_owned();
    let aircraft = flight
        .aircraft_type
        .filter(|a| !a.is_empty())
        .map(|a| view! { <p class="aircraft">{a}</p> });
    let price = flight.price.map(|p| view! { <p class="price">{format_price(p)}</p> });

    view! {
        <article class="flight-card" data-id=flight.id>
            <div class="flight-number">
                <span>"Uçuş No"</span>
                <p>{number}</p>
            </div>
            <div class="route">
                <div class="leg">
                    <p class="city">{departure}</p>
                    <p class="time">{departure_time}</p>
                </div>
                <div class="arrow"></div>
                <div class="leg">
                    <p class="city">{arrival}</p>
                    <p class="time">{arrival_time}</p>
                </div>
            </div>
            <div class="details">
                <p class="date">{date}</p>
                <p class="duration">{duration}</p>
                {aircraft}
            </div>
            {price}
        </article>
    }
}

#[cfg(test)]
#[path = "flights_test.rs"]
mod tests;
