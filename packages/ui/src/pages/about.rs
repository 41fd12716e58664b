use dioxus::prelude::*;

use crate::section::{
    Background, Button, ContentSection, ImageWithText, InfoCard, SectionHeader, Side,
};
use crate::{t, use_lang, AnimatedSection, HeroMediaFull};

const HERO_IMAGE: &str = "https://images.unsplash.com/photo-1542744173-8e7e53415bb0?q=80&w=2940&auto=format&fit=crop";
const DIFFERENT_IMAGE: &str = "https://images.unsplash.com/photo-1581092921462-282928a4939a?q=80&w=2787&auto=format&fit=crop";
const OFFER_IMAGE: &str = "https://images.unsplash.com/photo-1616422285623-13ff0162193c?q=80&w=2787&auto=format&fit=crop";

#[component]
pub fn AboutPage() -> Element {
    let lang = use_lang();
    rsx! {
        HeroMediaFull {
            headline: t(lang, "about.hero.headline"),
            body: t(lang, "about.hero.body"),
            image_src: HERO_IMAGE.to_string(),
            alt_text: t(lang, "about.hero.alt"),
        }

        ContentSection {
            AnimatedSection { class: "narrow centered_text",
                SectionHeader { title: t(lang, "about.story.title") }
                p { class: "lead", {t(lang, "about.story.body")} }
            }
            AnimatedSection { class: "narrow centered_text spaced",
                SectionHeader { title: t(lang, "about.philosophy.title") }
                p { class: "lead", {t(lang, "about.philosophy.body")} }
            }
        }

        ContentSection { background: Background::Divider,
            SectionHeader { title: t(lang, "about.principles.title") }
            div { class: "card_grid three",
                for i in 1..=3u32 {
                    InfoCard {
                        key: "{i}",
                        title: t(lang, &format!("about.principles.p{i}Title")),
                        body: t(lang, &format!("about.principles.p{i}Body")),
                        delay: (i - 1) * 150,
                    }
                }
            }
        }

        ContentSection {
            ImageWithText {
                image_url: DIFFERENT_IMAGE.to_string(),
                image_alt: t(lang, "about.different.alt"),
                image_side: Side::Left,
                SectionHeader { title: t(lang, "about.different.title"), centered: false }
                p { class: "lead", {t(lang, "about.different.body")} }
            }
        }

        ContentSection { background: Background::Divider,
            ImageWithText {
                image_url: OFFER_IMAGE.to_string(),
                image_alt: t(lang, "about.offer.alt"),
                image_side: Side::Right,
                SectionHeader { title: t(lang, "about.offer.title"), centered: false }
                p { class: "lead", {t(lang, "about.offer.body")} }
            }
        }

        ContentSection {
            AnimatedSection { class: "narrow centered_text",
                SectionHeader { title: t(lang, "about.promise.title") }
                p { class: "lead", {t(lang, "about.promise.body")} }
                div { class: "cta_row centered",
                    Button { to: "/suppliers", {t(lang, "about.promise.cta")} }
                }
            }
        }
    }
}
