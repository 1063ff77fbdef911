use leptos::prelude::*;

use super::*;

fn shell(title: &str, active: NavItem, year: i32) -> String {
    let title = title.to_owned();
    render_document(move || {
        view! {
            <Layout title active year>
                <p>"body"</p>
            </Layout>
        }
    })
}

#[test]
fn layout_is_a_complete_document() {
    let html = shell("Uçuşlar", NavItem::Flights, 2024);
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>Uçuşlar | Sky Airlens</title>"));
    assert!(html.contains("href=\"/assets/site.css\""));
    assert!(html.contains("<main><p>body</p></main>"));
}

#[test]
fn layout_marks_only_active_nav_item() {
    let html = shell("Uçuşlar", NavItem::Flights, 2024);
    assert!(html.contains("<a href=\"/flights\" aria-current=\"page\">Uçuşlar</a>"));
    assert!(html.contains("<a href=\"/contact\">İletişim</a>"));
    assert_eq!(html.matches("aria-current").count(), 1);
}

#[test]
fn footer_carries_year_and_contact_details() {
    let html = shell("x", NavItem::Home, 2031);
    assert!(html.contains("© 2031 Sky Airlens. Tüm hakları saklıdır."));
    assert!(html.contains("info@skyairlens.com"));
}

#[test]
fn layout_escapes_title() {
    let html = shell("<script>", NavItem::Home, 2024);
    assert!(html.contains("<title>&lt;script&gt; | Sky Airlens</title>"));
}

#[test]
fn not_found_page_uses_shell() {
    let html = render_not_found(2024);
    assert!(html.contains("Sayfa bulunamadı"));
    assert!(html.contains("class=\"site-header\""));
}
