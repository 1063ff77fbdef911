//! Home page: hero, vision, services, and call to action. Static content.

use leptos::prelude::*;

use super::{Layout, NavItem, SITE_NAME, render_document};

const IMAGE_BASE: &str = "https://static.wixstatic.com/media/12d367_71ebdd7141d041e4be3d91d80d4578dd~mv2.png";

struct Service {
    title: &'static str,
    description: &'static str,
    image_id: &'static str,
}

const SERVICES: [Service; 4] = [
    Service {
        title: "Modern Filo",
        description: "En yeni teknolojiye sahip uçaklarımızla güvenli yolculuk.",
        image_id: "service-fleet",
    },
    Service {
        title: "Konforlu Koltuklar",
        description: "Geniş ve rahat koltuklar ile keyifli bir deneyim.",
        image_id: "service-seats",
    },
    Service {
        title: "İkram Servisi",
        description: "Özenle hazırlanmış yemek ve içecek seçenekleri.",
        image_id: "service-food",
    },
    Service {
        title: "7/24 Destek",
        description: "Her an yanınızda olan müşteri hizmetleri ekibimiz.",
        image_id: "service-support",
    },
];

#[must_use]
pub fn render(year: i32) -> String {
    render_document(move || {
        view! {
            <Layout title=NavItem::Home.label().to_owned() active=NavItem::Home year>
                <HomeHero/>
                <Vision/>
                <Services/>
                <CallToAction/>
            </Layout>
        }
    })
}

fn image_url(id: &str) -> String {
    format!("{IMAGE_BASE}?id={id}")
}

#[component]
fn HomeHero() -> impl IntoView {
    view! {
        <section class="home-hero">
            <h1>"SKY"<br/>"AIRLENS"</h1>
            <p>"Est. 2024 • Global Aviation"</p>
            <img src=image_url("hero-left-plane") alt="Cabin Interior"/>
            <img src=image_url("hero-right-cockpit") alt="Cockpit View"/>
            <img src=image_url("hero-bottom-cloud") alt="Sky View"/>
        </section>
    }
}

#[component]
fn Vision() -> impl IntoView {
    let intro = format!(
        "{SITE_NAME}, modern havacılık standartlarını en üst seviyede tutarak yolcularına konforlu ve \
         güvenli bir yolculuk deneyimi sunmaktadır."
    );
    view! {
        <section class="vision">
            <span>"01 — Vizyonumuz"</span>
            <h2>"Gökyüzünde"<br/>"Standart."</h2>
            <p>{intro}</p>
            <p>
                "Deneyimli pilotlarımız ve son teknoloji uçaklarımızla, her uçuşta mükemmelliği hedefliyoruz. \
                 Geniş rota ağımız ile dünyanın dört bir yanına ulaşmanızı sağlıyor, her yolculuğunuzda \
                 unutulmaz anılar biriktirmenize yardımcı oluyoruz."
            </p>
        </section>
    }
}

#[component]
fn Services() -> impl IntoView {
    let cards = SERVICES
        .iter()
        .enumerate()
        .map(|(index, service)| {
            let class = if index % 2 == 0 { "service service-left" } else { "service service-right" };
            view! {
                <article class=class>
                    <img src=image_url(service.image_id) alt=service.title/>
                    <h3>{service.title}</h3>
                    <p>{service.description}</p>
                    <a href="/flights">"Detaylı Bilgi"</a>
                </article>
            }
        })
        .collect_view();

    view! {
        <section class="services">
            <span>"02 — Hizmetlerimiz"</span>
            <h2>"Ayrıcalıklı Bir Deneyim"</h2>
            {cards}
        </section>
    }
}

#[component]
fn CallToAction() -> impl IntoView {
    view! {
        <section class="cta">
            <img src=image_url("cta-sky-view") alt="Sky View"/>
            <h2>"Dünyayı Keşfet"</h2>
            <p>"Geniş destinasyon ağımız ve uygun fiyatlarımızla hayalinizdeki yolculuğa çıkın."</p>
            <a class="button" href="/flights">"Uçuşları Görüntüle"</a>
        </section>
    }
}

#[cfg(test)]
#[path = "home_test.rs"]
mod tests;
