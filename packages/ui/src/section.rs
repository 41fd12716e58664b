use dioxus::prelude::*;

use crate::icons::{Icon, IconKind};
use crate::{AnimatedSection, Animation, Cta, StatCounter};

const SECTIONS_CSS: Asset = asset!("/assets/styling/sections.css");

#[component]
pub fn SectionHeader(
    title: String,
    subtitle: Option<String>,
    #[props(default = true)] centered: bool,
    #[props(default)] class: String,
) -> Element {
    let align = if centered { "section_header centered" } else { "section_header" };
    rsx! {
        div { class: "{align} {class}",
            if let Some(subtitle) = subtitle {
                p { class: "section_subtitle", "{subtitle}" }
            }
            h2 { class: "section_title", dangerous_inner_html: "{title}" }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Background {
    #[default]
    Base,
    Divider,
    White,
    Dark,
}

impl Background {
    fn class(self) -> &'static str {
        match self {
            Background::Base => "bg_base",
            Background::Divider => "bg_divider",
            Background::White => "bg_white",
            Background::Dark => "bg_dark",
        }
    }
}

#[component]
pub fn ContentSection(
    #[props(default)] background: Background,
    #[props(default)] class: String,
    #[props(default)] id: String,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: SECTIONS_CSS }
        section { id: "{id}", class: "content_section {background.class()} {class}",
            div { class: "container content_inner", {children} }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Side {
    #[default]
    Left,
    Right,
}

/// Two columns: a picture sliding in from its side, text from the other.
#[component]
pub fn ImageWithText(
    image_url: String,
    image_alt: String,
    #[props(default)] image_side: Side,
    children: Element,
) -> Element {
    let (image_anim, order) = match image_side {
        Side::Left => (Animation::SlideInLeft, "image_left"),
        Side::Right => (Animation::SlideInRight, "image_right"),
    };
    rsx! {
        div { class: "image_with_text {order}",
            div { class: "image_col",
                AnimatedSection { animation: image_anim,
                    img { class: "rounded_image", src: "{image_url}", alt: "{image_alt}" }
                }
            }
            div { class: "text_col",
                AnimatedSection { animation: image_anim.opposite(), {children} }
            }
        }
    }
}

#[component]
pub fn FeatureCard(title: String, body: String, cta: Cta, image_url: String, image_alt: String) -> Element {
    rsx! {
        Link { class: "feature_card", to: cta.to,
            div { class: "feature_card_media",
                img { src: "{image_url}", alt: "{image_alt}" }
            }
            div { class: "feature_card_body",
                h3 { "{title}" }
                p { "{body}" }
                span { class: "feature_card_cta",
                    "{cta.text}"
                    Icon { kind: IconKind::ArrowRight }
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Accent,
}

/// Pill-shaped link with a trailing arrow.
#[component]
pub fn Button(
    to: String,
    #[props(default)] variant: ButtonVariant,
    #[props(default)] class: String,
    children: Element,
) -> Element {
    let variant = match variant {
        ButtonVariant::Primary => "btn_primary",
        ButtonVariant::Secondary => "btn_secondary",
        ButtonVariant::Accent => "btn_accent",
    };
    rsx! {
        Link { class: "btn pill {variant} {class}", to: to,
            {children}
            Icon { kind: IconKind::ArrowRight }
        }
    }
}

/// Inline text link with a trailing arrow.
#[component]
pub fn ArrowLink(to: String, children: Element) -> Element {
    rsx! {
        Link { class: "arrow_link", to: to,
            {children}
            Icon { kind: IconKind::ArrowRight }
        }
    }
}

#[component]
pub fn CheckListItem(#[props(default)] class: String, children: Element) -> Element {
    rsx! {
        div { class: "check_item {class}",
            Icon { kind: IconKind::Check, class: "check_mark" }
            div { class: "check_text", {children} }
        }
    }
}

/// A translated list rendered as check-list items.
#[component]
pub fn CheckList(items: Vec<String>, #[props(default)] class: String) -> Element {
    rsx! {
        div { class: "check_list {class}",
            for (i, item) in items.into_iter().enumerate() {
                CheckListItem { key: "{i}", "{item}" }
            }
        }
    }
}

#[component]
pub fn QuoteCard(quote: String, author: String, role: Option<String>, #[props(default)] delay: u32) -> Element {
    rsx! {
        AnimatedSection { delay: delay,
            blockquote { class: "quote_card",
                p { class: "quote_text", "\u{201c}{quote}\u{201d}" }
                footer { class: "quote_author",
                    "{author}"
                    if let Some(role) = role {
                        span { class: "quote_role", "{role}" }
                    }
                }
            }
        }
    }
}

/// A statistic: either a counting number or a piece of text.
#[derive(Debug, Clone, PartialEq)]
pub enum StatValue {
    Count { value: u64, suffix: &'static str },
    Text(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Stat {
    pub value: StatValue,
    pub label: String,
}

#[component]
pub fn StatBand(stats: Vec<Stat>, #[props(default = 2000)] duration: u64) -> Element {
    rsx! {
        div { class: "stat_band",
            for (i, stat) in stats.into_iter().enumerate() {
                div { key: "{i}", class: "stat_cell",
                    h3 { class: "stat_value",
                        match stat.value {
                            StatValue::Count { value, suffix } => rsx! {
                                StatCounter { value: value, suffix: suffix.to_string(), duration: duration }
                            },
                            StatValue::Text(text) => rsx! { "{text}" },
                        }
                    }
                    p { class: "stat_label", "{stat.label}" }
                }
            }
        }
    }
}

/// Card with a heading, copy and one button.
#[component]
pub fn InfoCard(title: String, body: String, cta: Option<Cta>, #[props(default)] delay: u32) -> Element {
    rsx! {
        AnimatedSection { delay: delay, class: "info_card_wrap",
            div { class: "info_card",
                h3 { "{title}" }
                p { "{body}" }
                if let Some(cta) = cta {
                    Button { to: cta.to, variant: ButtonVariant::Secondary, "{cta.text}" }
                }
            }
        }
    }
}

/// Page-level confirmation shown in place of a submitted form.
#[component]
pub fn SuccessPanel(title: String, body: String, primary: Cta, secondary: Cta) -> Element {
    rsx! {
        ContentSection {
            div { class: "success_panel",
                Icon { kind: IconKind::CheckCircle, class: "success_icon" }
                SectionHeader { title: title }
                p { class: "lead", "{body}" }
                div { class: "cta_row centered",
                    Button { to: primary.to, "{primary.text}" }
                    Button { to: secondary.to, variant: ButtonVariant::Secondary, "{secondary.text}" }
                }
            }
        }
    }
}
