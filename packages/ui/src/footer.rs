use dioxus::prelude::*;
use gloo_timers::future::sleep;

use crate::browser::{alert, copy_text, current_year};
use crate::icons::{Icon, IconKind};
use crate::nav::{sitemap, NavLink, FOOTER_COLUMNS};
use crate::newsletter::{Newsletter, SubscribeState};
use crate::{t, use_config, use_lang, AnimatedSection};

const SHELL_CSS: Asset = asset!("/assets/styling/shell.css");
const SITE_ORIGIN: &str = "https://glowizon.com";
const SLOGAN_IMAGE: &str = "https://images.unsplash.com/photo-1536679219481-0c5f214f1b1a?q=80&w=2940&auto=format&fit=crop";

const SOCIAL: &[(IconKind, &str)] = &[
    (IconKind::XSocial, "X"),
    (IconKind::Instagram, "Instagram"),
    (IconKind::LinkedIn, "LinkedIn"),
];

/// Full-width band with the company slogan, shown above the footer.
#[component]
pub fn SloganBand() -> Element {
    let lang = use_lang();
    rsx! {
        section { class: "slogan_band", style: "background-image: url({SLOGAN_IMAGE});",
            div { class: "slogan_overlay", "aria-hidden": "true" }
            div { class: "container slogan_inner",
                AnimatedSection {
                    h2 { class: "slogan_text", {t(lang, "slogan")} }
                }
            }
        }
    }
}

#[component]
fn NewsletterForm() -> Element {
    let lang = use_lang();
    let config = use_config();
    let mut newsletter = use_signal(Newsletter::default);

    let onsubmit = move |e: FormEvent| {
        e.prevent_default();
        let Some(ticket) = newsletter.write().submit() else {
            return;
        };
        // owned by this scope: unmounting the footer drops the pending steps
        spawn(async move {
            sleep(config.newsletter_delay()).await;
            let Some(ticket) = newsletter.write().complete(ticket) else {
                return;
            };
            sleep(config.newsletter_reset()).await;
            newsletter.write().reset(ticket);
        });
    };

    let current = newsletter.read().clone();
    let busy = current.is_busy();
    let error = current
        .error()
        .filter(|_| current.state() == SubscribeState::Error);

    rsx! {
        div { class: "newsletter",
            div { class: "newsletter_caption",
                Icon { kind: IconKind::Envelope }
                span { class: "footer_caption", {t(lang, "footer.newsletter")} }
            }
            if current.state() == SubscribeState::Submitted {
                div { class: "newsletter_success", role: "status",
                    Icon { kind: IconKind::CheckCircle }
                    p { {t(lang, "footer.subscribeSuccess")} }
                }
            } else {
                form { class: "newsletter_form", novalidate: true, onsubmit: onsubmit,
                    div { class: "newsletter_row",
                        label { r#for: "footer-email", class: "sr_only", {t(lang, "footer.enterEmail")} }
                        input {
                            id: "footer-email",
                            r#type: "email",
                            placeholder: t(lang, "footer.enterEmail"),
                            value: "{current.email()}",
                            disabled: busy,
                            "aria-invalid": "{error.is_some()}",
                            "aria-describedby": error.map(|_| "footer-email-error"),
                            oninput: move |e| newsletter.write().set_email(e.value()),
                        }
                        button { r#type: "submit", class: "newsletter_submit", disabled: busy,
                            if busy {
                                {t(lang, "footer.subscribing")}
                            } else {
                                {t(lang, "footer.subscribe")}
                            }
                        }
                    }
                    if let Some(key) = error {
                        p { id: "footer-email-error", class: "newsletter_error", {t(lang, key)} }
                    }
                }
            }
        }
    }
}

/// Copies the list of site URLs. A refused clipboard is reported with an
/// alert since there is no other way to surface it.
#[component]
fn CopySitemapButton() -> Element {
    let lang = use_lang();
    let config = use_config();
    let mut copied = use_signal(|| false);

    let onclick = move |_| {
        spawn(async move {
            let origin = document::eval("return window.location.origin;")
                .await
                .ok()
                .and_then(|v| v.as_str().map(str::to_string))
                .unwrap_or_else(|| SITE_ORIGIN.to_string());
            match copy_text(&sitemap(&origin)).await {
                Ok(()) => {
                    copied.set(true);
                    sleep(config.copy_reset()).await;
                    copied.set(false);
                }
                Err(e) => {
                    tracing::warn!("sitemap copy failed: {e}");
                    alert(&t(lang, "footer.copyFailed")).await;
                }
            }
        });
    };

    rsx! {
        button {
            r#type: "button",
            class: "copy_sitemap",
            disabled: copied(),
            "aria-live": "polite",
            onclick: onclick,
            if copied() {
                Icon { kind: IconKind::CheckCircle, class: "copied_icon" }
                span { {t(lang, "footer.copied")} }
            } else {
                Icon { kind: IconKind::Clipboard }
                span { {t(lang, "footer.copySitemap")} }
            }
        }
    }
}

#[component]
fn FooterLink(link: NavLink) -> Element {
    let lang = use_lang();
    if link.is_placeholder() {
        return rsx! {
            a { class: "footer_link", href: "#", onclick: |e: MouseEvent| e.prevent_default(), {t(lang, link.key)} }
        };
    }
    rsx! {
        Link { class: "footer_link", to: link.path.to_string(), {t(lang, link.key)} }
    }
}

#[component]
fn Copyright() -> Element {
    let lang = use_lang();
    let year = use_resource(current_year);
    let line = t(lang, "footer.copyright");

    rsx! {
        p { class: "copyright",
            "\u{a9} "
            if let Some(Some(year)) = year() {
                "{year} "
            }
            "{line}"
        }
    }
}

#[component]
pub fn Footer() -> Element {
    let lang = use_lang();
    rsx! {
        document::Link { rel: "stylesheet", href: SHELL_CSS }

        footer { class: "site_footer",
            div { class: "container",
                div { class: "footer_top",
                    NewsletterForm {}
                    div { class: "footer_connect",
                        span { class: "footer_caption", {t(lang, "footer.connectWithUs")} }
                        div { class: "social_links",
                            for (kind, label) in SOCIAL.iter().copied() {
                                a {
                                    key: "{label}",
                                    class: "social_link",
                                    href: "#",
                                    "aria-label": "{label}",
                                    onclick: |e: MouseEvent| e.prevent_default(),
                                    Icon { kind: kind }
                                }
                            }
                        }
                        CopySitemapButton {}
                    }
                }

                div { class: "footer_main",
                    div { class: "footer_brand",
                        Link { class: "brand", to: "/".to_string(), "Glowizon" }
                        p { {t(lang, "footer.companyDescription")} }
                    }
                    div { class: "footer_columns",
                        for column in FOOTER_COLUMNS.iter() {
                            div { key: "{column.key}", class: "footer_column",
                                h3 { {t(lang, column.key)} }
                                ul {
                                    for link in column.links.iter().copied() {
                                        li { key: "{link.key}", FooterLink { link: link } }
                                    }
                                }
                            }
                        }
                    }
                }
            }
            div { class: "footer_bottom",
                div { class: "container", Copyright {} }
            }
        }
    }
}
