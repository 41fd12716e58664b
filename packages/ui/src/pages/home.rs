use dioxus::prelude::*;

use crate::section::{
    Background, Button, ButtonVariant, CheckList, ContentSection, FeatureCard, ImageWithText,
    QuoteCard, SectionHeader, Side, Stat, StatBand, StatValue,
};
use crate::{t, t_list, use_lang, AnimatedSection, Animation, Cta, HeroMediaFull};

const HERO_VIDEO: &str = "https://videos.pexels.com/video-files/5993353/5993353-hd.mp4";
const HERO_IMAGE: &str = "https://images.unsplash.com/photo-1617104679092-b2c453347989?q=80&w=2835&auto=format&fit=crop";
const THRIVE_IMAGE: &str = "https://images.unsplash.com/photo-1556742502-ec7c0e9f34b1?q=80&w=2787&auto=format&fit=crop";
const EXPERTISE_IMAGE: &str = "https://images.unsplash.com/photo-1522071820081-009f0129c71c?q=80&w=2940&auto=format&fit=crop";

/// (title/body/cta key prefix, target, image)
const TILES: &[(&str, &str, &str)] = &[
    (
        "home.deliver.tile1",
        "/distribution",
        "https://images.unsplash.com/photo-1590922634321-551eb24aaa74?q=80&w=2811&auto=format&fit=crop",
    ),
    (
        "home.deliver.tile2",
        "/products",
        "https://images.unsplash.com/photo-1620916566398-39f168a27e48?q=80&w=2787&auto=format&fit=crop",
    ),
    (
        "home.deliver.tile3",
        "/suppliers",
        "https://images.unsplash.com/photo-1571173729953-2a033f183e13?q=80&w=2940&auto=format&fit=crop",
    ),
];

#[component]
pub fn HomePage() -> Element {
    let lang = use_lang();

    let stats = vec![
        Stat {
            value: StatValue::Count { value: 1000, suffix: "+" },
            label: t(lang, "home.stats.locations"),
        },
        Stat {
            value: StatValue::Count { value: 50, suffix: "+" },
            label: t(lang, "home.stats.partners"),
        },
        Stat {
            value: StatValue::Text(t(lang, "home.stats.coverage")),
            label: t(lang, "home.stats.coverageLabel"),
        },
    ];

    rsx! {
        HeroMediaFull {
            headline: t(lang, "home.hero.headline"),
            subhead: t(lang, "home.hero.subhead"),
            body: t(lang, "home.hero.body"),
            primary_cta: Cta::new(t(lang, "home.hero.primaryCta"), "/distribution"),
            secondary_cta: Cta::new(t(lang, "home.hero.secondaryCta"), "/suppliers"),
            video_src: HERO_VIDEO.to_string(),
            image_src: HERO_IMAGE.to_string(),
            alt_text: t(lang, "home.hero.alt"),
        }

        ContentSection { background: Background::White,
            div { class: "split_grid",
                AnimatedSection { animation: Animation::SlideInLeft,
                    SectionHeader { title: t(lang, "home.sharedGrowth.title"), centered: false }
                }
                AnimatedSection { animation: Animation::SlideInRight,
                    div { class: "prose_block",
                        p { class: "lead", {t(lang, "home.sharedGrowth.p1")} }
                        p { class: "lead", {t(lang, "home.sharedGrowth.p2")} }
                        div { class: "cta_row",
                            Button { to: "/distribution", variant: ButtonVariant::Secondary,
                                {t(lang, "home.sharedGrowth.cta")}
                            }
                        }
                    }
                }
            }
        }

        div { class: "bg_base",
            section { class: "image_banner",
                img { src: THRIVE_IMAGE, alt: t(lang, "home.thrive.alt") }
                div { class: "image_banner_overlay" }
                div { class: "container image_banner_content",
                    AnimatedSection { class: "banner_text",
                        h2 { {t(lang, "home.thrive.title")} }
                        p { {t(lang, "home.thrive.body")} }
                    }
                }
            }
            ContentSection { background: Background::Dark, class: "overlap_band",
                AnimatedSection { delay: 200,
                    StatBand { stats: stats, duration: 3000 }
                }
            }
        }

        ContentSection {
            SectionHeader { title: t(lang, "home.deliver.title") }
            div { class: "card_grid three",
                for (i, (prefix, to, image)) in TILES.iter().copied().enumerate() {
                    AnimatedSection { key: "{i}", delay: i as u32 * 100,
                        FeatureCard {
                            title: t(lang, &format!("{prefix}Title")),
                            body: t(lang, &format!("{prefix}Body")),
                            cta: Cta::new(t(lang, &format!("{prefix}Cta")), to),
                            image_url: image.to_string(),
                            image_alt: t(lang, &format!("{prefix}Title")),
                        }
                    }
                }
            }
        }

        ContentSection { background: Background::Divider,
            ImageWithText {
                image_url: EXPERTISE_IMAGE.to_string(),
                image_alt: t(lang, "home.expertise.alt"),
                image_side: Side::Left,
                SectionHeader {
                    title: t(lang, "home.expertise.title"),
                    subtitle: t(lang, "home.expertise.subtitle"),
                    centered: false,
                }
                p { class: "lead", {t(lang, "home.expertise.body")} }
                CheckList { items: t_list(lang, "home.expertise.checks") }
            }
        }

        ContentSection {
            SectionHeader { title: t(lang, "home.voices.title"), subtitle: t(lang, "home.voices.subtitle") }
            div { class: "card_grid two narrow",
                QuoteCard { quote: t(lang, "home.voices.quote1"), author: t(lang, "home.voices.author1") }
                QuoteCard { quote: t(lang, "home.voices.quote2"), author: t(lang, "home.voices.author2"), delay: 150 }
            }
        }

        ContentSection { background: Background::Divider,
            div { class: "card_grid two",
                AnimatedSection {
                    div { class: "promo_card",
                        h3 { {t(lang, "home.careers.title")} }
                        p { {t(lang, "home.careers.body")} }
                        Button { to: "/careers", {t(lang, "home.careers.cta")} }
                    }
                }
                AnimatedSection { delay: 150,
                    div { class: "promo_card",
                        h3 { {t(lang, "home.about.title")} }
                        p { {t(lang, "home.about.body")} }
                        Button { to: "/about", {t(lang, "home.about.cta")} }
                    }
                }
            }
        }
    }
}
