use dioxus::prelude::*;

use crate::icons::{Icon, IconKind};
use crate::section::ContentSection;
use crate::{t, use_lang, AnimatedSection, HeroMediaFull};

const HERO_IMAGE: &str = "https://images.unsplash.com/photo-1457369804613-52c61a468e7d?q=80&w=2940&auto=format&fit=crop";

/// Cover image per post; copy lives under `blog.posts.post{n}`.
const POST_IMAGES: [&str; 6] = [
    "https://images.unsplash.com/photo-1522204523234-8729aa6e3d5f?q=80&w=2940&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1586528116311-06924151d15a?q=80&w=2940&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1580894908361-967195033215?q=80&w=2940&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1590439471364-192aa70c0b53?q=80&w=2787&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1587095951333-7251357697b0?q=80&w=2940&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1600880292203-757bb62b4baf?q=80&w=2940&auto=format&fit=crop",
];

/// Posts are not published yet, so the card goes nowhere.
#[component]
fn PostCard(n: usize) -> Element {
    let lang = use_lang();
    let field = move |f: &str| t(lang, &format!("blog.posts.post{n}.{f}"));
    let title = field("title");
    let image = POST_IMAGES.get(n - 1).copied().unwrap_or_default();

    rsx! {
        a { class: "feature_card", href: "#", onclick: |e: MouseEvent| e.prevent_default(),
            div { class: "feature_card_media",
                img { src: image, alt: "{title}" }
            }
            div { class: "feature_card_body",
                span { class: "post_date", {field("date")} }
                h3 { "{title}" }
                p { {field("excerpt")} }
                span { class: "feature_card_cta",
                    {t(lang, "blog.readMore")}
                    Icon { kind: IconKind::ArrowRight }
                }
            }
        }
    }
}

#[component]
pub fn BlogPage() -> Element {
    let lang = use_lang();
    rsx! {
        HeroMediaFull {
            headline: t(lang, "blog.hero.headline"),
            subhead: t(lang, "blog.hero.subhead"),
            body: t(lang, "blog.hero.body"),
            image_src: HERO_IMAGE.to_string(),
            alt_text: t(lang, "blog.hero.alt"),
        }

        ContentSection {
            div { class: "card_grid three",
                for n in 1..=POST_IMAGES.len() {
                    AnimatedSection { key: "{n}", delay: ((n - 1) % 3) as u32 * 100,
                        PostCard { n: n }
                    }
                }
            }
        }
    }
}
