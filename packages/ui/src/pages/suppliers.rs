use dioxus::prelude::*;

use crate::section::{
    ArrowLink, Background, Button, ButtonVariant, ContentSection, ImageWithText, InfoCard,
    QuoteCard, SectionHeader, Side,
};
use crate::{t, use_lang, AnimatedSection, Cta, HeroMediaFull};

const HERO_IMAGE: &str = "https://images.unsplash.com/photo-1556742502-ec7c0e9f34b1?q=80&w=2787&auto=format&fit=crop";
const BELIEVE_IMAGE: &str = "https://images.unsplash.com/photo-1571173729953-2a033f183e13?q=80&w=2940&auto=format&fit=crop";

const FINAL_LINKS: &[(&str, &str)] = &[
    ("suppliers.finalCta.link1", "/contact"),
    ("suppliers.finalCta.link2", "/supplier-application"),
    ("suppliers.finalCta.link3", "/brand-partners"),
];

/// Served at both `/suppliers` and `/brand-partners`.
#[component]
pub fn SuppliersPage() -> Element {
    let lang = use_lang();
    rsx! {
        HeroMediaFull {
            headline: t(lang, "suppliers.hero.headline"),
            subhead: t(lang, "suppliers.hero.subhead"),
            body: t(lang, "suppliers.hero.body"),
            primary_cta: Cta::new(t(lang, "suppliers.hero.primaryCta"), "/supplier-application"),
            image_src: HERO_IMAGE.to_string(),
            alt_text: t(lang, "suppliers.hero.alt"),
        }

        ContentSection {
            ImageWithText {
                image_url: BELIEVE_IMAGE.to_string(),
                image_alt: t(lang, "suppliers.believe.alt"),
                image_side: Side::Left,
                SectionHeader { title: t(lang, "suppliers.believe.title"), centered: false }
                p { class: "lead", {t(lang, "suppliers.believe.body")} }
                h3 { class: "block_title", {t(lang, "suppliers.believe.whatWeDeliver")} }
                ol { class: "numbered_list",
                    for i in 1..=5u32 {
                        li { key: "{i}",
                            span { class: "number_badge", "{i}" }
                            div {
                                h4 { {t(lang, &format!("suppliers.believe.item{i}Title"))} }
                                p { {t(lang, &format!("suppliers.believe.item{i}Text"))} }
                            }
                        }
                    }
                }
            }
        }

        ContentSection { background: Background::Divider,
            SectionHeader { title: t(lang, "suppliers.strategy.title") }
            p { class: "lead centered_text narrow", {t(lang, "suppliers.strategy.body")} }
            div { class: "card_grid three",
                for i in 1..=3u32 {
                    InfoCard {
                        key: "{i}",
                        title: t(lang, &format!("suppliers.strategy.item{i}Title")),
                        body: t(lang, &format!("suppliers.strategy.item{i}Text")),
                        delay: (i - 1) * 100,
                    }
                }
            }
        }

        ContentSection { background: Background::Dark, class: "centered_text",
            AnimatedSection {
                SectionHeader { title: t(lang, "suppliers.responsibility.title") }
                p { class: "lead narrow", {t(lang, "suppliers.responsibility.body")} }
                div { class: "cta_row centered",
                    Button { to: "/supplier-application", variant: ButtonVariant::Accent,
                        {t(lang, "suppliers.responsibility.cta")}
                    }
                }
            }
        }

        ContentSection { background: Background::Divider,
            div { class: "split_grid",
                AnimatedSection {
                    SectionHeader { title: t(lang, "suppliers.systems.title"), centered: false }
                    p { class: "lead", {t(lang, "suppliers.systems.body")} }
                    div { class: "cta_row",
                        Button { to: "/distribution", variant: ButtonVariant::Secondary,
                            {t(lang, "suppliers.systems.cta")}
                        }
                    }
                }
                AnimatedSection { delay: 150,
                    div { class: "highlight_box",
                        h3 { {t(lang, "suppliers.systems.boxTitle")} }
                        p { {t(lang, "suppliers.systems.boxBody")} }
                    }
                }
            }
        }

        ContentSection {
            SectionHeader { title: t(lang, "suppliers.partnersSay.title") }
            div { class: "card_grid three",
                for i in 1..=3u32 {
                    QuoteCard {
                        key: "{i}",
                        quote: t(lang, &format!("suppliers.partnersSay.quote{i}")),
                        author: t(lang, &format!("suppliers.partnersSay.author{i}")),
                        delay: (i - 1) * 150,
                    }
                }
            }
        }

        ContentSection { background: Background::Divider,
            SectionHeader { title: t(lang, "suppliers.resources.title") }
            div { class: "card_grid two narrow",
                for i in 1..=2u32 {
                    AnimatedSection { key: "{i}", delay: (i - 1) * 150,
                        div { class: "resource_card",
                            h3 { {t(lang, &format!("suppliers.resources.res{i}Title"))} }
                            p { {t(lang, &format!("suppliers.resources.res{i}Body"))} }
                            ArrowLink { to: "/supplier-application",
                                {t(lang, &format!("suppliers.resources.res{i}Cta"))}
                            }
                        }
                    }
                }
            }
        }

        ContentSection { class: "centered_text",
            h2 { class: "section_title", {t(lang, "suppliers.finalCta.title")} }
            div { class: "link_row",
                for (key, to) in FINAL_LINKS.iter().copied() {
                    ArrowLink { key: "{key}", to: to.to_string(), {t(lang, key)} }
                }
            }
        }
    }
}
