//! Contact page: office details, message form, and submit banners.

use std::time::Instant;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use super::{Hero, Layout, NavItem, render_document};
use crate::models::ContactField;
use crate::services::contact::{ContactForm, SUCCESS_MESSAGE};

/// Render `form` as seen at `now`; an expired success banner is dropped first.
#[must_use]
pub fn render(form: &ContactForm, now: Instant, year: i32) -> String {
    let mut form = form.clone();
    form.dismiss_expired(now);

    let banner = match (form.banner_remaining(now), form.error_message()) {
        (Some(remaining), _) => Banner::Success { dismiss_ms: remaining.as_millis() },
        (None, Some(message)) => Banner::Error(message.to_owned()),
        (None, None) => Banner::None,
    };
    let values = ContactField::ALL.map(|field| (field, form.fields().get(field).to_owned()));
    let submitting = form.is_submitting();

    render_document(move || {
        view! {
            <Layout title=NavItem::Contact.label().to_owned() active=NavItem::Contact year>
                <Hero
                    title="İletişim"
                    lead="Sorularınız, önerileriniz veya rezervasyon talepleriniz için bizimle iletişime geçin."
                />
                <section class="contact">
                    <ContactDetails/>
                    <FormPanel banner values submitting/>
                </section>
            </Layout>
        }
    })
}

enum Banner {
    None,
    Success { dismiss_ms: u128 },
    Error(String),
}

#[component]
fn ContactDetails() -> impl IntoView {
    view! {
        <div class="contact-details">
            <h2>"Bize Ulaşın"</h2>
            <h3>"E-posta"</h3>
            <p>"info@skyairlens.com"</p>
            <p>"destek@skyairlens.com"</p>
            <h3>"Telefon"</h3>
            <p>"+90 212 555 0000"</p>
            <p>"+90 212 555 0001 (Rezervasyon)"</p>
            <h3>"Adres"</h3>
            <p>"İstanbul Havalimanı"<br/>"Terminal 1, Kat 3"<br/>"Arnavutköy, İstanbul"</p>
            <h3>"Çalışma Saatleri"</h3>
            <p>"Müşteri Hizmetleri: 7/24"</p>
            <p>"Rezervasyon: 08:00 - 22:00"</p>
        </div>
    }
}

#[component]
fn FormPanel(banner: Banner, values: [(ContactField, String); 4], submitting: bool) -> impl IntoView {
    let banner = match banner {
        Banner::Success { dismiss_ms } => view! {
            <div class="banner success" role="status" data-dismiss-ms=dismiss_ms.to_string()>
                <p>{SUCCESS_MESSAGE}</p>
            </div>
        }
        .into_any(),
        Banner::Error(message) => view! {
            <div class="banner error" role="alert">
                <p>{message}</p>
            </div>
        }
        .into_any(),
        Banner::None => ().into_any(),
    };
    let controls = values
        .into_iter()
        .map(|(field, value)| {
            let label = format!("{} *", field.label());
            view! {
                <label>
                    {label}
                    <FieldControl field value/>
                </label>
            }
        })
        .collect_view();
    let caption = if submitting { "Gönderiliyor..." } else { "Mesajı Gönder" };

    view! {
        <div class="contact-form">
            <h2>"Mesaj Gönderin"</h2>
            {banner}
            <form method="post" action="/contact" data-single-submit="">
                {controls}
                <button type="submit" disabled=submitting>{caption}</button>
            </form>
            <script inner_html=FORM_SCRIPT></script>
        </div>
    }
}

#[component]
fn FieldControl(field: ContactField, value: String) -> impl IntoView {
    let name = field.name();
    match field {
        ContactField::MessageContent => view! {
            <textarea name=name rows="6" required placeholder="Mesajınızı buraya yazın...">{value}</textarea>
        }
        .into_any(),
        ContactField::SenderEmail => view! {
            <input type="email" name=name required placeholder="ornek@email.com" value=value/>
        }
        .into_any(),
        ContactField::SenderName => view! {
            <input type="text" name=name required placeholder="Ad Soyad" value=value/>
        }
        .into_any(),
        ContactField::Subject => view! {
            <input type="text" name=name required placeholder="Mesaj konusu" value=value/>
        }
        .into_any(),
    }
}

/// Disables the button while the POST is in flight and hides the success
/// banner once its remaining lifetime elapses.
const FORM_SCRIPT: &str = "\
document.querySelectorAll('form[data-single-submit]').forEach(function (f) {\n\
  f.addEventListener('submit', function () {\n\
    var b = f.querySelector('button[type=submit]');\n\
    if (b) { b.disabled = true; b.textContent = 'Gönderiliyor...'; }\n\
  });\n\
});\n\
document.querySelectorAll('[data-dismiss-ms]').forEach(function (el) {\n\
  setTimeout(function () { el.hidden = true; }, Number(el.dataset.dismissMs));\n\
});\n";

#[cfg(test)]
#[path = "contact_test.rs"]
mod tests;
