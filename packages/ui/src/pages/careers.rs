use dioxus::prelude::*;

use crate::icons::{Icon, IconKind};
use crate::section::{Background, CheckListItem, ContentSection, ImageWithText, SectionHeader, Side};
use crate::{t, use_lang, HeroMediaFull};

const HERO_IMAGE: &str = "https://images.unsplash.com/photo-1521737852577-6848222851c5?q=80&w=2940&auto=format&fit=crop";
const CULTURE_IMAGE: &str = "https://images.unsplash.com/photo-1522071820081-009f0129c71c?q=80&w=2940&auto=format&fit=crop";

/// `mailto:` link with a pre-filled subject line.
pub fn mailto(address: &str, subject: &str) -> String {
    format!("mailto:{address}?subject={}", urlencoding::encode(subject))
}

#[component]
pub fn CareersPage() -> Element {
    let lang = use_lang();
    let subject = t(lang, "careers.join.mailSubject");

    rsx! {
        HeroMediaFull {
            headline: t(lang, "careers.hero.headline"),
            subhead: t(lang, "careers.hero.subhead"),
            body: t(lang, "careers.hero.body"),
            image_src: HERO_IMAGE.to_string(),
            alt_text: t(lang, "careers.hero.alt"),
        }

        ContentSection {
            ImageWithText {
                image_url: CULTURE_IMAGE.to_string(),
                image_alt: t(lang, "careers.culture.alt"),
                image_side: Side::Right,
                SectionHeader {
                    title: t(lang, "careers.culture.title"),
                    subtitle: t(lang, "careers.culture.subtitle"),
                    centered: false,
                }
                p { class: "lead", {t(lang, "careers.culture.body")} }
                div { class: "check_list",
                    for i in 1..=4 {
                        CheckListItem { key: "{i}", {t(lang, &format!("careers.culture.check{i}"))} }
                    }
                }
            }
        }

        ContentSection { background: Background::Divider,
            SectionHeader {
                title: t(lang, "careers.join.title"),
                subtitle: t(lang, "careers.join.subtitle"),
            }
            p { class: "lead centered_text narrow", {t(lang, "careers.join.body")} }
            div { class: "cta_row centered",
                a { class: "btn pill btn_primary", href: mailto("careers@glowizon.com", &subject),
                    {t(lang, "careers.join.cta1")}
                    Icon { kind: IconKind::ArrowRight }
                }
                a { class: "btn pill btn_secondary", href: mailto("hr@glowizon.com", &subject),
                    {t(lang, "careers.join.cta2")}
                    Icon { kind: IconKind::ArrowRight }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mailto_encodes_the_subject() {
        assert_eq!(
            mailto("hr@glowizon.com", "Candidature spontanée & CV"),
            "mailto:hr@glowizon.com?subject=Candidature%20spontan%C3%A9e%20%26%20CV"
        );
    }
}
