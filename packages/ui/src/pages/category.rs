//! The four product-category pages share one layout driven by
//! [`CategoryContent`].

use dioxus::prelude::*;

use crate::section::{Background, Button, ContentSection, ImageWithText, SectionHeader, Side};
use crate::{t, use_lang, AnimatedSection, HeroMediaFull};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductCategory {
    DermoCosmetics,
    WellnessNutrition,
    BeautyCare,
    ProfessionalSalon,
}

/// A titled block of copy, optionally set beside a picture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    pub key: &'static str,
    pub image: Option<(&'static str, Side)>,
}

impl Block {
    const fn text(key: &'static str) -> Self {
        Self { key, image: None }
    }

    const fn pictured(key: &'static str, url: &'static str, side: Side) -> Self {
        Self {
            key,
            image: Some((url, side)),
        }
    }
}

/// Dictionary layout of one category page. Every key lives under
/// `namespace`; `approach` holds `item{1..3}Title/Body` and `closing` a `cta`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryContent {
    pub namespace: &'static str,
    pub hero_image: &'static str,
    pub intro: Block,
    pub feature: Option<Block>,
    pub approach: &'static str,
    pub closing: &'static str,
}

impl ProductCategory {
    pub const ALL: [ProductCategory; 4] = [
        ProductCategory::DermoCosmetics,
        ProductCategory::WellnessNutrition,
        ProductCategory::BeautyCare,
        ProductCategory::ProfessionalSalon,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            ProductCategory::DermoCosmetics => "dermo-cosmetics",
            ProductCategory::WellnessNutrition => "wellness-nutrition",
            ProductCategory::BeautyCare => "beauty-care",
            ProductCategory::ProfessionalSalon => "professional-salon",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.slug() == slug)
    }

    pub fn path(self) -> String {
        format!("/products/{}", self.slug())
    }

    pub fn content(self) -> CategoryContent {
        match self {
            ProductCategory::DermoCosmetics => CategoryContent {
                namespace: "skincare",
                hero_image: "https://images.unsplash.com/photo-1598440947619-2c35fc9aa908?q=80&w=2787&auto=format&fit=crop",
                intro: Block::text("confidence"),
                feature: None,
                approach: "approach",
                closing: "promise",
            },
            ProductCategory::WellnessNutrition => CategoryContent {
                namespace: "wellness",
                hero_image: "https://images.unsplash.com/photo-1607962837359-5e7e89f86776?q=80&w=2787&auto=format&fit=crop",
                intro: Block::text("access"),
                feature: Some(Block::pictured(
                    "functional",
                    "https://images.unsplash.com/photo-1544893343-41a45b6f4c80?q=80&w=2787&auto=format&fit=crop",
                    Side::Left,
                )),
                approach: "approach",
                closing: "confidence",
            },
            ProductCategory::BeautyCare => CategoryContent {
                namespace: "beauty",
                hero_image: "https://images.unsplash.com/photo-1563903530908-afdd155d057a?q=80&w=2787&auto=format&fit=crop",
                intro: Block::pictured(
                    "confidence",
                    "https://images.unsplash.com/photo-1556228720-195a672e8a03?q=80&w=2787&auto=format&fit=crop",
                    Side::Right,
                ),
                feature: None,
                approach: "philosophy",
                closing: "trust",
            },
            ProductCategory::ProfessionalSalon => CategoryContent {
                namespace: "professionalCare",
                hero_image: "https://images.unsplash.com/photo-1512290923902-8a9f31c83659?q=80&w=2787&auto=format&fit=crop",
                intro: Block::text("knowledge"),
                feature: None,
                approach: "approach",
                closing: "precision",
            },
        }
    }
}

impl CategoryContent {
    pub fn key(&self, section: &str, field: &str) -> String {
        format!("{}.{section}.{field}", self.namespace)
    }

    /// Every dictionary key the page reads.
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = ["headline", "subhead", "body", "alt"]
            .iter()
            .map(|f| self.key("hero", f))
            .collect();
        for block in std::iter::once(self.intro).chain(self.feature) {
            keys.push(self.key(block.key, "title"));
            keys.push(self.key(block.key, "body"));
            if block.image.is_some() {
                keys.push(self.key(block.key, "alt"));
            }
        }
        keys.push(self.key(self.approach, "title"));
        for i in 1..=3 {
            keys.push(self.key(self.approach, &format!("item{i}Title")));
            keys.push(self.key(self.approach, &format!("item{i}Body")));
        }
        for field in ["title", "body", "cta"] {
            keys.push(self.key(self.closing, field));
        }
        keys
    }
}

#[component]
fn CategoryBlock(content: CategoryContent, block: Block) -> Element {
    let lang = use_lang();
    let title = t(lang, &content.key(block.key, "title"));
    let body = t(lang, &content.key(block.key, "body"));

    match block.image {
        Some((url, side)) => rsx! {
            ImageWithText {
                image_url: url.to_string(),
                image_alt: t(lang, &content.key(block.key, "alt")),
                image_side: side,
                SectionHeader { title: title, centered: false }
                p { class: "lead", "{body}" }
            }
        },
        None => rsx! {
            SectionHeader { title: title }
            p { class: "lead centered_text narrow", "{body}" }
        },
    }
}

#[component]
pub fn CategoryPage(category: ProductCategory) -> Element {
    let lang = use_lang();
    let content = category.content();
    let key = move |section: &str, field: &str| t(lang, &content.key(section, field));

    rsx! {
        HeroMediaFull {
            headline: key("hero", "headline"),
            subhead: key("hero", "subhead"),
            body: key("hero", "body"),
            image_src: content.hero_image.to_string(),
            alt_text: key("hero", "alt"),
        }

        ContentSection {
            CategoryBlock { content: content, block: content.intro }
        }

        if let Some(feature) = content.feature {
            ContentSection { background: Background::Divider,
                CategoryBlock { content: content, block: feature }
            }
        }

        ContentSection { background: if content.feature.is_some() { Background::Base } else { Background::Divider },
            SectionHeader { title: key(content.approach, "title") }
            div { class: "card_grid three narrow_wide",
                for i in 1..=3u32 {
                    AnimatedSection { key: "{i}", delay: (i - 1) * 150,
                        div { class: "step_card",
                            span { class: "step_number", "{i}" }
                            h3 { {key(content.approach, &format!("item{i}Title"))} }
                            p { {key(content.approach, &format!("item{i}Body"))} }
                        }
                    }
                }
            }
        }

        ContentSection { background: if content.feature.is_some() { Background::Divider } else { Background::Base },
            SectionHeader { title: key(content.closing, "title") }
            p { class: "lead centered_text narrow", {key(content.closing, "body")} }
            div { class: "cta_row centered",
                Button { to: "/suppliers", {key(content.closing, "cta")} }
            }
        }
    }
}

#[component]
pub fn SkincarePage() -> Element {
    rsx! { CategoryPage { category: ProductCategory::DermoCosmetics } }
}

#[component]
pub fn WellnessPage() -> Element {
    rsx! { CategoryPage { category: ProductCategory::WellnessNutrition } }
}

#[component]
pub fn BeautyPage() -> Element {
    rsx! { CategoryPage { category: ProductCategory::BeautyCare } }
}

#[component]
pub fn ProfessionalCarePage() -> Element {
    rsx! { CategoryPage { category: ProductCategory::ProfessionalSalon } }
}
