use dioxus::prelude::*;

use crate::browser::use_prefers_reduced_motion;

const HERO_CSS: Asset = asset!("/assets/styling/hero.css");

/// Label plus internal path for a call-to-action link.
#[derive(Debug, Clone, PartialEq)]
pub struct Cta {
    pub text: String,
    pub to: String,
}

impl Cta {
    pub fn new(text: String, to: &str) -> Self {
        Self {
            text,
            to: to.to_string(),
        }
    }
}

/// Full-bleed hero with a background video, or its poster image when
/// there is no video or the visitor prefers reduced motion.
///
/// `headline` may carry inline markup from the dictionary.
#[component]
pub fn HeroMediaFull(
    headline: String,
    subhead: Option<String>,
    body: Option<String>,
    primary_cta: Option<Cta>,
    secondary_cta: Option<Cta>,
    video_src: Option<String>,
    image_src: String,
    #[props(default)] alt_text: String,
) -> Element {
    let reduced_motion = use_prefers_reduced_motion();
    let video = video_src.filter(|_| !reduced_motion());

    rsx! {
        document::Link { rel: "stylesheet", href: HERO_CSS }

        section { class: "hero_media",
            div { class: "hero_media_bg",
                if let Some(src) = video {
                    video {
                        src: "{src}",
                        poster: "{image_src}",
                        autoplay: true,
                        r#loop: true,
                        muted: true,
                        playsinline: true,
                        "aria-hidden": "true",
                    }
                } else {
                    img {
                        src: "{image_src}",
                        alt: "{alt_text}",
                        "aria-hidden": if alt_text.is_empty() { "true" } else { "false" },
                    }
                }
            }
            div { class: "hero_media_overlay" }
            div { class: "hero_media_content container",
                div { class: "hero_media_text",
                    if let Some(subhead) = subhead {
                        p { class: "hero_subhead", "{subhead}" }
                    }
                    h1 { dangerous_inner_html: "{headline}" }
                    if let Some(body) = body {
                        p { class: "hero_body", "{body}" }
                    }
                    if primary_cta.is_some() || secondary_cta.is_some() {
                        div { class: "cta_row",
                            if let Some(cta) = primary_cta {
                                Link { class: "btn hero_primary", to: cta.to, "{cta.text}" }
                            }
                            if let Some(cta) = secondary_cta {
                                Link { class: "btn hero_secondary", to: cta.to, "{cta.text}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
