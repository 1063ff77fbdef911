//! Server-rendered HTML pages.
//!
//! ARCHITECTURE
//! ============
//! Pages are Leptos components rendered to a string on the server. There is
//! no client bundle and no hydration; the only script is the small inline
//! helper on the contact page. Each page module exposes a `render` function
//! from explicit request state to a complete document, and route handlers
//! wrap the result in `Html`. The layout shell (header, footer) lives here.

pub mod contact;
pub mod flights;
pub mod home;

use leptos::prelude::*;
use leptos::reactive::owner::Owner;
use leptos::tachys::view::RenderHtml;

pub const SITE_NAME: &str = "Sky Airlens";

/// Navigation entries in header order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItem {
    Home,
    Flights,
    Contact,
}

impl NavItem {
    const ALL: [Self; 3] = [Self::Home, Self::Flights, Self::Contact];

    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Flights => "/flights",
            Self::Contact => "/contact",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Ana Sayfa",
            Self::Flights => "Uçuşlar",
            Self::Contact => "İletişim",
        }
    }
}

/// Render a page component tree to a complete HTML document.
pub(crate) fn render_document<V, F>(page: F) -> String
where
    F: FnOnce() -> V,
    V: IntoView,
{
    Owner::new().with(|| page().to_html())
}

// =============================================================================
// SHELL
// =============================================================================

/// Document shell: head, site header, `<main>` content, footer.
#[component]
pub fn Layout(title: String, active: NavItem, year: i32, children: Children) -> impl IntoView {
    let document_title = format!("{title} | {SITE_NAME}");
    view! {
        <!DOCTYPE html>
        <html lang="tr">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <title>{document_title}</title>
                <link rel="stylesheet" href="/assets/site.css"/>
            </head>
            <body>
                <SiteHeader active/>
                <main>{children()}</main>
                <SiteFooter year/>
            </body>
        </html>
    }
}

#[component]
fn SiteHeader(active: NavItem) -> impl IntoView {
    let links = NavItem::ALL
        .into_iter()
        .map(|item| {
            let current = (item == active).then_some("page");
            view! { <a href=item.path() aria-current=current>{item.label()}</a> }
        })
        .collect_view();

    view! {
        <header class="site-header">
            <a class="brand" href="/">{SITE_NAME}</a>
            <nav>{links}</nav>
        </header>
    }
}

#[component]
fn SiteFooter(year: i32) -> impl IntoView {
    let copyright = format!("© {year} {SITE_NAME}. Tüm hakları saklıdır.");
    view! {
        <footer class="site-footer">
            <section>
                <h3>{SITE_NAME}</h3>
                <p>"Gökyüzünde güvenle yolculuk edin. Modern filomuz ve deneyimli ekibimizle hizmetinizdeyiz."</p>
            </section>
            <section>
                <h3>"İletişim"</h3>
                <p>"E-posta: info@skyairlens.com"</p>
                <p>"Telefon: +90 212 555 0000"</p>
                <p>"Adres: İstanbul Havalimanı, Terminal 1"</p>
            </section>
            <section>
                <h3>"Çalışma Saatleri"</h3>
                <p>"Pazartesi - Cuma: 24 Saat"</p>
                <p>"Cumartesi - Pazar: 24 Saat"</p>
            </section>
            <p class="copyright">{copyright}</p>
        </footer>
    }
}

/// Hero band shared by the inner pages.
#[component]
pub fn Hero(title: &'static str, lead: &'static str) -> impl IntoView {
    view! {
        <section class="hero">
            <h1>{title}</h1>
            <p>{lead}</p>
        </section>
    }
}

/// Fallback page for unknown paths.
#[must_use]
pub fn render_not_found(year: i32) -> String {
    render_document(move || {
        view! {
            <Layout title="Sayfa bulunamadı".to_owned() active=NavItem::Home year>
                <Hero title="Sayfa bulunamadı" lead="Aradığınız sayfa mevcut değil."/>
            </Layout>
        }
    })
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
