use dioxus::prelude::*;

use crate::fields::{FormInput, FormTextarea};
use crate::forms::{FormState, CONTACT};
use crate::icons::{Icon, IconKind};
use crate::section::{Background, ContentSection, InfoCard, SectionHeader};
use crate::{t, use_lang, Cta, HeroMediaFull};

const HERO_IMAGE: &str = "https://images.unsplash.com/photo-1556740738-b6a63e2775df?q=80&w=2940&auto=format&fit=crop";
const PHONE: &str = "+1 (980) 425-1097";
const EMAIL: &str = "info@glowizon.com";

/// (key prefix, target)
const PATHS: &[(&str, &str)] = &[
    ("contact.path.brands", "/supplier-application"),
    ("contact.path.retailers", "/retail-application"),
    ("contact.path.careers", "/careers"),
];

#[component]
fn InquiryDetails() -> Element {
    let lang = use_lang();
    rsx! {
        SectionHeader { title: t(lang, "contact.inquiries.title"), centered: false }
        p { class: "lead", {t(lang, "contact.inquiries.body")} }
        dl { class: "contact_details",
            div {
                dt { {t(lang, "contact.inquiries.hq")} }
                dd { {t(lang, "contact.inquiries.hqValue")} }
            }
            div {
                dt { {t(lang, "contact.inquiries.phone")} }
                dd { a { href: "tel:+19804251097", "{PHONE}" } }
            }
            div {
                dt { {t(lang, "contact.inquiries.email")} }
                dd { a { href: "mailto:{EMAIL}", "{EMAIL}" } }
            }
            div {
                dt { {t(lang, "contact.inquiries.hours")} }
                dd { {t(lang, "contact.inquiries.hoursValue")} }
            }
        }
    }
}

#[component]
fn ContactForm() -> Element {
    let lang = use_lang();
    let mut state = use_signal(FormState::default);

    if state.read().is_submitted() {
        return rsx! {
            div { class: "form_card thank_you", role: "status",
                Icon { kind: IconKind::CheckCircle, class: "success_icon" }
                h3 { {t(lang, "contact.inquiries.successTitle")} }
                p { class: "lead", {t(lang, "contact.inquiries.successBody")} }
            }
        };
    }

    let label = move |key: &str| t(lang, &format!("contact.inquiries.{key}"));

    rsx! {
        form {
            class: "form_card",
            novalidate: true,
            onsubmit: move |e: FormEvent| {
                e.prevent_default();
                state.write().submit(&CONTACT);
            },
            h3 { {label("formTitle")} }
            FormInput { form: state, name: "name", label: label("name"), autocomplete: "name", required: true }
            FormInput { form: state, name: "email", label: label("emailAddress"), input_type: "email", autocomplete: "email", required: true }
            FormInput { form: state, name: "subject", label: label("subject"), required: true }
            FormTextarea { form: state, name: "message", label: label("message"), required: true }
            button { r#type: "submit", class: "btn submit_btn",
                {label("submit")}
                Icon { kind: IconKind::ArrowRight }
            }
        }
    }
}

#[component]
pub fn ContactPage() -> Element {
    let lang = use_lang();
    rsx! {
        HeroMediaFull {
            headline: t(lang, "contact.hero.headline"),
            body: t(lang, "contact.hero.body"),
            image_src: HERO_IMAGE.to_string(),
            alt_text: t(lang, "contact.hero.alt"),
        }

        ContentSection {
            SectionHeader { title: t(lang, "contact.path.title") }
            div { class: "card_grid three",
                for (i, (prefix, to)) in PATHS.iter().copied().enumerate() {
                    InfoCard {
                        key: "{prefix}",
                        title: t(lang, &format!("{prefix}Title")),
                        body: t(lang, &format!("{prefix}Body")),
                        cta: Cta::new(t(lang, &format!("{prefix}Cta")), to),
                        delay: i as u32 * 150,
                    }
                }
            }
        }

        ContentSection { background: Background::Divider,
            div { class: "contact_grid",
                div { class: "contact_info", InquiryDetails {} }
                div { class: "contact_form", ContactForm {} }
            }
        }
    }
}
