use dioxus::prelude::*;

use super::category::ProductCategory;
use crate::section::{
    ArrowLink, Background, Button, ButtonVariant, ContentSection, ImageWithText, SectionHeader, Side,
};
use crate::{t, use_lang, AnimatedSection, Cta, HeroMediaFull};

const HERO_IMAGE: &str = "https://images.unsplash.com/photo-1556228724-4ce3a5948348?q=80&w=2787&auto=format&fit=crop";
const SUPPORT_IMAGE: &str = "https://images.unsplash.com/photo-1556742502-ec7c0e9f34b1?q=80&w=2787&auto=format&fit=crop";

#[component]
pub fn ProductsPage() -> Element {
    let lang = use_lang();
    rsx! {
        HeroMediaFull {
            headline: t(lang, "products.hero.headline"),
            subhead: t(lang, "products.hero.subhead"),
            body: t(lang, "products.hero.body"),
            primary_cta: Cta::new(t(lang, "products.hero.primaryCta"), &ProductCategory::DermoCosmetics.path()),
            image_src: HERO_IMAGE.to_string(),
            alt_text: t(lang, "products.hero.alt"),
        }

        ContentSection {
            ImageWithText {
                image_url: SUPPORT_IMAGE.to_string(),
                image_alt: t(lang, "products.support.alt"),
                image_side: Side::Right,
                SectionHeader { title: t(lang, "products.support.title"), centered: false }
                p { class: "lead", {t(lang, "products.support.body1")} }
                h3 { class: "block_title", {t(lang, "products.support.subheading")} }
                p { class: "lead", {t(lang, "products.support.body2")} }
            }
        }

        ContentSection { background: Background::Divider,
            SectionHeader {
                title: t(lang, "products.promise.title"),
                subtitle: t(lang, "products.promise.subtitle"),
            }
            p { class: "lead centered_text narrow", {t(lang, "products.promise.body")} }
        }

        ContentSection {
            SectionHeader { title: t(lang, "products.categories.title") }
            div { class: "card_grid two narrow_wide",
                for (i, category) in ProductCategory::ALL.iter().copied().enumerate() {
                    AnimatedSection { key: "{i}", delay: i as u32 * 100,
                        div { class: "category_card",
                            h3 { {t(lang, &format!("products.categories.cat{}Title", i + 1))} }
                            p { {t(lang, &format!("products.categories.cat{}Body", i + 1))} }
                            ArrowLink { to: category.path(),
                                {t(lang, &format!("products.categories.cat{}Cta", i + 1))}
                            }
                        }
                    }
                }
            }
        }

        ContentSection { background: Background::Divider,
            SectionHeader {
                title: t(lang, "products.excellence.title"),
                subtitle: t(lang, "products.excellence.subtitle"),
            }
            p { class: "lead centered_text narrow", {t(lang, "products.excellence.body")} }
            div { class: "cta_row centered",
                Button { to: "/distribution", {t(lang, "products.excellence.cta")} }
            }
        }

        ContentSection {
            SectionHeader {
                title: t(lang, "products.next.title"),
                subtitle: t(lang, "products.next.subtitle"),
            }
            p { class: "lead centered_text narrow", {t(lang, "products.next.body")} }
            div { class: "cta_row centered",
                Button { to: "/products", variant: ButtonVariant::Secondary, {t(lang, "products.next.cta")} }
            }
        }

        ContentSection { background: Background::Dark, class: "centered_text",
            AnimatedSection {
                h2 { class: "band_title", {t(lang, "products.success")} }
            }
        }
    }
}
