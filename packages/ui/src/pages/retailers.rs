use dioxus::prelude::*;

use crate::accordion::Accordion;
use crate::icons::{Icon, IconKind};
use crate::section::{
    ArrowLink, Background, Button, ButtonVariant, CheckList, ContentSection, ImageWithText,
    QuoteCard, SectionHeader, Side,
};
use crate::{t, t_list, use_lang, AnimatedSection, Animation, Cta, HeroMediaFull};

const HERO_IMAGE: &str = "https://images.unsplash.com/photo-1604719312566-8912e9227c6a?q=80&w=2787&auto=format&fit=crop";
const PERFORMANCE_IMAGE: &str = "https://images.unsplash.com/photo-1556742502-ec7c0e9f34b1?q=80&w=2787&auto=format&fit=crop";

/// Value propositions: target of the entry's button and its picture.
const VALUE_PROPS: &[(&str, &str)] = &[
    ("/distribution", "https://images.unsplash.com/photo-1576793369168-baa05a2b3baa?q=80&w=2787&auto=format&fit=crop"),
    ("/products", "https://images.unsplash.com/photo-1620916566398-39f168a27e48?q=80&w=2787&auto=format&fit=crop"),
    ("/distribution", "https://images.unsplash.com/photo-1586528116311-06924151d15a?q=80&w=2940&auto=format&fit=crop"),
    ("/retailers", "https://images.unsplash.com/photo-1547916937-248c8541a0ab?q=80&w=2787&auto=format&fit=crop"),
    ("/distribution", "https://images.unsplash.com/photo-1543269865-cbf427effbad?q=80&w=2940&auto=format&fit=crop"),
];

const QUESTION_LINKS: &[(&str, &str)] = &[
    ("retailers.question.link1", "/contact"),
    ("retailers.question.link2", "/retail-application"),
    ("retailers.question.link3", "/suppliers"),
];

#[component]
fn ValueAccordion() -> Element {
    let lang = use_lang();
    let mut accordion = use_signal(Accordion::default);
    let active = accordion().active_index();

    rsx! {
        div { class: "split_grid",
            AnimatedSection { animation: Animation::SlideInLeft,
                div { class: "accordion_media",
                    for (i, (_, image)) in VALUE_PROPS.iter().copied().enumerate() {
                        img {
                            key: "{i}",
                            src: image,
                            alt: t(lang, &format!("retailers.value.item{}Title", i + 1)),
                            class: if i == active { "accordion_image shown" } else { "accordion_image" },
                        }
                    }
                }
            }
            AnimatedSection { animation: Animation::SlideInRight,
                div { class: "accordion",
                    for (i, (to, _)) in VALUE_PROPS.iter().copied().enumerate() {
                        div { key: "{i}", class: "accordion_entry",
                            button {
                                r#type: "button",
                                class: if accordion().is_open(i) { "accordion_trigger open" } else { "accordion_trigger" },
                                "aria-expanded": "{accordion().is_open(i)}",
                                "aria-controls": "accordion-content-{i}",
                                onclick: move |_| accordion.write().toggle(i),
                                span { class: "accordion_index", "0{i + 1}." }
                                h3 { {t(lang, &format!("retailers.value.item{}Title", i + 1))} }
                                Icon { kind: IconKind::ChevronDown, class: "accordion_chevron" }
                            }
                            div {
                                id: "accordion-content-{i}",
                                class: if accordion().is_open(i) { "accordion_panel open" } else { "accordion_panel" },
                                div { class: "accordion_body",
                                    p { {t(lang, &format!("retailers.value.item{}Text", i + 1))} }
                                    Button { to: to.to_string(),
                                        {t(lang, &format!("retailers.value.item{}Cta", i + 1))}
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn RetailersPage() -> Element {
    let lang = use_lang();
    rsx! {
        HeroMediaFull {
            headline: t(lang, "retailers.hero.headline"),
            subhead: t(lang, "retailers.hero.subhead"),
            primary_cta: Cta::new(t(lang, "retailers.hero.primaryCta"), "/retail-application"),
            image_src: HERO_IMAGE.to_string(),
            alt_text: t(lang, "retailers.hero.alt"),
        }

        ContentSection {
            ImageWithText {
                image_url: PERFORMANCE_IMAGE.to_string(),
                image_alt: t(lang, "retailers.performance.alt"),
                image_side: Side::Left,
                SectionHeader {
                    title: t(lang, "retailers.performance.title"),
                    subtitle: t(lang, "retailers.performance.subtitle"),
                    centered: false,
                }
                p { class: "lead", {t(lang, "retailers.performance.p1")} }
                p { class: "lead", {t(lang, "retailers.performance.p2")} }
                h3 { class: "block_title", {t(lang, "retailers.performance.subheading")} }
                p { class: "lead", {t(lang, "retailers.performance.p3")} }
            }
        }

        ContentSection { background: Background::Divider,
            SectionHeader { title: t(lang, "retailers.value.title") }
            ValueAccordion {}
        }

        ContentSection {
            div { class: "narrow centered_text",
                SectionHeader {
                    title: t(lang, "retailers.elevate.title"),
                    subtitle: t(lang, "retailers.elevate.subtitle"),
                }
                CheckList { class: "inline_list", items: t_list(lang, "retailers.elevate.checks") }
            }
        }

        ContentSection { background: Background::Dark, class: "centered_text",
            AnimatedSection {
                h2 { class: "band_title", {t(lang, "retailers.success.title")} }
                div { class: "cta_row centered",
                    Button { to: "/retail-application", variant: ButtonVariant::Accent,
                        {t(lang, "retailers.success.cta")}
                    }
                }
            }
        }

        ContentSection { background: Background::Divider,
            div { class: "split_grid",
                AnimatedSection {
                    div { class: "text_panel",
                        h3 { {t(lang, "retailers.excellence.title1")} }
                        p { {t(lang, "retailers.excellence.body1")} }
                        ArrowLink { to: "/distribution", {t(lang, "retailers.excellence.cta1")} }
                    }
                }
                AnimatedSection { delay: 150,
                    div { class: "text_panel",
                        h3 { {t(lang, "retailers.excellence.title2")} }
                        p { {t(lang, "retailers.excellence.body2")} }
                    }
                }
            }
        }

        ContentSection {
            AnimatedSection { class: "narrow centered_text",
                SectionHeader { title: t(lang, "retailers.next.title") }
                p { class: "lead", {t(lang, "retailers.next.body")} }
                div { class: "cta_row centered",
                    Button { to: "/retail-application", {t(lang, "retailers.next.cta")} }
                }
            }
        }

        ContentSection { background: Background::Divider,
            SectionHeader { title: t(lang, "retailers.voices.title") }
            div { class: "card_grid three",
                for i in 1..=3u32 {
                    QuoteCard {
                        key: "{i}",
                        quote: t(lang, &format!("retailers.voices.quote{i}")),
                        author: t(lang, &format!("retailers.voices.author{i}")),
                        delay: (i - 1) * 150,
                    }
                }
            }
        }

        ContentSection { class: "centered_text",
            h2 { class: "section_title", {t(lang, "retailers.question.title")} }
            div { class: "link_row",
                for (key, to) in QUESTION_LINKS.iter().copied() {
                    ArrowLink { key: "{key}", to: to.to_string(), {t(lang, key)} }
                }
            }
        }
    }
}
