use dioxus::prelude::*;

use crate::fields::{FormInput, PasswordField};
use crate::forms::{FormState, LOGIN};
use crate::icons::{Icon, IconKind};
use crate::section::{Background, ContentSection, SectionHeader};
use crate::{t, use_lang, use_toasts, AnimatedSection, HeroMediaFull};

const HERO_IMAGE: &str = "https://images.unsplash.com/photo-1556742502-ec7c0e9f34b1?q=80&w=2787&auto=format&fit=crop";

/// Sign-in is presentational: there is no account backend, so an accepted
/// form only raises a toast and forgets the password.
#[component]
pub fn LoginPage() -> Element {
    let lang = use_lang();
    let toasts = use_toasts();
    let mut state = use_signal(FormState::default);

    let onsubmit = move |e: FormEvent| {
        e.prevent_default();
        if state.write().submit(&LOGIN) {
            state.write().clear("password");
            toasts.success(t(lang, "login.success.title"), Some(t(lang, "login.success.body")));
        }
    };

    let password_error = state.read().error("password").map(|key| t(lang, key));
    let password = state.read().text("password").to_string();

    rsx! {
        HeroMediaFull {
            headline: t(lang, "login.hero.headline"),
            body: t(lang, "login.hero.body"),
            image_src: HERO_IMAGE.to_string(),
            alt_text: t(lang, "login.hero.alt"),
        }

        ContentSection { background: Background::Base,
            AnimatedSection { class: "login_wrap",
                div { class: "form_card login_card",
                    SectionHeader { title: t(lang, "login.form.title") }
                    form { novalidate: true, onsubmit: onsubmit,
                        FormInput {
                            form: state,
                            name: "email",
                            label: t(lang, "login.form.emailLabel"),
                            input_type: "email",
                            autocomplete: "email",
                            required: true,
                        }
                        PasswordField {
                            id: "password",
                            label: t(lang, "login.form.passwordLabel"),
                            value: password,
                            oninput: move |v: String| state.write().set_text("password", v),
                            error: password_error,
                            required: true,
                        }
                        div { class: "login_forgot",
                            a {
                                href: "#",
                                onclick: move |e: MouseEvent| {
                                    e.prevent_default();
                                    toasts.info(t(lang, "login.form.forgotUnavailable"), None);
                                },
                                {t(lang, "login.form.forgotPassword")}
                            }
                        }
                        button { r#type: "submit", class: "btn submit_btn",
                            {t(lang, "login.form.signInButton")}
                            Icon { kind: IconKind::ArrowRight }
                        }
                    }
                    p { class: "login_footer",
                        {t(lang, "login.form.noAccount")}
                        " "
                        Link { class: "text_link", to: "/retail-application".to_string(), {t(lang, "login.form.partnerWithUs")} }
                    }
                }
            }
        }
    }
}
