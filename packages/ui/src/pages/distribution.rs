use dioxus::prelude::*;

use crate::icons::{Icon, IconKind};
use crate::section::{
    Background, Button, CheckList, ContentSection, ImageWithText, InfoCard, SectionHeader, Side,
};
use crate::{t, t_list, use_lang, AnimatedSection, Animation, Cta, HeroMediaFull, StatCounter};

const HERO_IMAGE: &str = "https://images.unsplash.com/photo-1565522194378-385012354a33?q=80&w=2874&auto=format&fit=crop";
const FOOTPRINT_IMAGE: &str = "https://images.unsplash.com/photo-1586528116311-06924151d15a?q=80&w=2940&auto=format&fit=crop";
const INTEGRITY_IMAGE: &str = "https://images.unsplash.com/photo-1581092921462-282928a4939a?q=80&w=2787&auto=format&fit=crop";

/// Glance figures: `None` renders the label as the headline instead.
const GLANCE: &[(Option<(u64, &str)>, &str)] = &[
    (Some((1200, "+")), "distribution.glance.stat1"),
    (Some((100, "+")), "distribution.glance.stat2"),
    (Some((3, "")), "distribution.glance.stat3"),
    (None, "distribution.glance.stat4"),
    (Some((10, "+")), "distribution.glance.stat5"),
];

#[component]
pub fn DistributionPage() -> Element {
    let lang = use_lang();
    rsx! {
        HeroMediaFull {
            headline: t(lang, "distribution.hero.headline"),
            subhead: t(lang, "distribution.hero.subhead"),
            body: t(lang, "distribution.hero.body"),
            primary_cta: Cta::new(t(lang, "distribution.hero.primaryCta"), "/retail-application"),
            secondary_cta: Cta::new(t(lang, "distribution.hero.secondaryCta"), "/supplier-application"),
            image_src: HERO_IMAGE.to_string(),
            alt_text: t(lang, "distribution.hero.alt"),
        }

        ContentSection {
            ImageWithText {
                image_url: FOOTPRINT_IMAGE.to_string(),
                image_alt: t(lang, "distribution.footprint.alt"),
                image_side: Side::Right,
                SectionHeader { title: t(lang, "distribution.footprint.title"), centered: false }
                p { class: "lead", {t(lang, "distribution.footprint.body")} }
            }
        }

        ContentSection { background: Background::Divider,
            SectionHeader { title: t(lang, "distribution.strength.title") }
            div { class: "card_grid three",
                for i in 1..=3u32 {
                    InfoCard {
                        key: "{i}",
                        title: t(lang, &format!("distribution.strength.s{i}Title")),
                        body: t(lang, &format!("distribution.strength.s{i}Body")),
                        delay: (i - 1) * 100,
                    }
                }
            }
        }

        ContentSection {
            SectionHeader { title: t(lang, "distribution.map.title") }
            AnimatedSection { animation: Animation::ZoomIn, class: "spaced",
                div { class: "map_placeholder",
                    p { {t(lang, "distribution.map.placeholder")} }
                }
            }
            p { class: "lead centered_text narrow", {t(lang, "distribution.map.body")} }
            div { class: "cta_row centered",
                Button { to: "/contact", {t(lang, "distribution.map.cta")} }
            }
        }

        ContentSection { background: Background::Divider,
            SectionHeader { title: t(lang, "distribution.glance.title") }
            p { class: "lead centered_text narrow", {t(lang, "distribution.glance.body")} }
            div { class: "card_grid five",
                for (i, (figure, key)) in GLANCE.iter().copied().enumerate() {
                    AnimatedSection { key: "{i}", delay: i as u32 * 100, class: "glance_card",
                        Icon { kind: IconKind::Check, class: "glance_icon" }
                        match figure {
                            Some((value, suffix)) => rsx! {
                                h3 { class: "stat_value",
                                    StatCounter { value: value, suffix: suffix.to_string() }
                                }
                                p { class: "stat_label", {t(lang, key)} }
                            },
                            None => rsx! {
                                h3 { class: "stat_value text_stat", {t(lang, key)} }
                            },
                        }
                    }
                }
            }
        }

        ContentSection {
            ImageWithText {
                image_url: INTEGRITY_IMAGE.to_string(),
                image_alt: t(lang, "distribution.integrity.alt"),
                image_side: Side::Left,
                SectionHeader { title: t(lang, "distribution.integrity.title"), centered: false }
                p { class: "lead", {t(lang, "distribution.integrity.body")} }
                CheckList { items: t_list(lang, "distribution.integrity.checks") }
            }
        }
    }
}
