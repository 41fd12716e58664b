use dioxus::prelude::*;

use crate::browser::{scroll_into_view, scroll_to_top};
use crate::fields::{FormCheckbox, FormInput, FormRadio, FormSelect, FormTextarea, InputField};
use crate::forms::{FormState, RETAIL_APPLICATION};
use crate::icons::{Icon, IconKind};
use crate::section::{CheckListItem, ContentSection, SectionHeader, SuccessPanel};
use crate::{t, t_list, use_lang, AnimatedSection, Cta};

const HERO_CSS: Asset = asset!("/assets/styling/hero.css");
const HERO_IMAGE: &str = "https://images.unsplash.com/photo-1521737604893-d14cc237f11d?q=80&w=2940&auto=format&fit=crop";
const FORM_ANCHOR: &str = "retail-form";

#[component]
fn RetailHero() -> Element {
    let lang = use_lang();
    rsx! {
        document::Link { rel: "stylesheet", href: HERO_CSS }

        section { class: "hero_media hero_tall",
            div { class: "hero_media_bg",
                img { src: HERO_IMAGE, alt: t(lang, "retailApplication.hero.alt") }
            }
            div { class: "hero_media_overlay" }
            div { class: "hero_media_content container",
                AnimatedSection { class: "hero_media_text centered_text",
                    p { class: "hero_subhead", {t(lang, "retailApplication.hero.subtitle")} }
                    h1 { dangerous_inner_html: t(lang, "retailApplication.hero.title") }
                    p { class: "hero_body", {t(lang, "retailApplication.hero.body")} }
                    div { class: "hero_benefits",
                        h3 { {t(lang, "retailApplication.hero.benefitsTitle")} }
                        div { class: "benefit_grid",
                            for i in 1..=4 {
                                CheckListItem { key: "{i}", class: "on_dark",
                                    {t(lang, &format!("retailApplication.hero.benefit{i}"))}
                                }
                            }
                        }
                    }
                    div { class: "cta_row centered",
                        button {
                            r#type: "button",
                            class: "btn hero_primary",
                            onclick: move |_| scroll_into_view(FORM_ANCHOR),
                            {t(lang, "retailApplication.hero.cta")}
                            Icon { kind: IconKind::ArrowRight }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn RetailApplicationPage() -> Element {
    let lang = use_lang();
    let mut state = use_signal(FormState::default);

    if state.read().is_submitted() {
        return rsx! {
            SuccessPanel {
                title: t(lang, "retailApplication.success.title"),
                body: t(lang, "retailApplication.success.body"),
                primary: Cta::new(t(lang, "retailApplication.success.ctaBrands"), "/products"),
                secondary: Cta::new(t(lang, "retailApplication.success.ctaHome"), "/"),
            }
        };
    }

    let label = move |key: &str| t(lang, &format!("retailApplication.form.{key}"));

    rsx! {
        RetailHero {}

        div { id: FORM_ANCHOR, class: "scroll_anchor",
            ContentSection {
                SectionHeader { title: label("title") }
                p { class: "lead centered_text narrow", {label("intro")} }

                form {
                    class: "application_form",
                    novalidate: true,
                    onsubmit: move |e: FormEvent| {
                        e.prevent_default();
                        if state.write().submit(&RETAIL_APPLICATION) {
                            scroll_to_top();
                        }
                    },

                    fieldset {
                        legend { {label("legend1")} }
                        FormRadio {
                            form: state,
                            name: "accountType",
                            label: label("accountTypeLabel"),
                            options: t_list(lang, "retailApplication.form.accountTypeOptions"),
                            required: true,
                        }
                    }

                    fieldset {
                        legend { {label("legend2")} }
                        FormInput { form: state, name: "legalName", label: label("legalName"), required: true }
                        FormInput { form: state, name: "storeName", label: label("storeName"), required: true }
                        FormInput { form: state, name: "ein", label: label("ein"), required: true }
                        FormSelect {
                            form: state,
                            name: "businessType",
                            label: label("businessTypeLabel"),
                            placeholder: label("businessTypePlaceholder"),
                            options: t_list(lang, "retailApplication.form.businessTypeOptions"),
                            required: true,
                        }
                    }

                    fieldset {
                        legend { {label("legend3")} }
                        FormInput { form: state, name: "website", label: label("website"), input_type: "url", required: true }
                        FormInput { form: state, name: "productCategories", label: label("productCategories"), required: true }
                        InputField {
                            id: "photos",
                            label: label("photos"),
                            value: "",
                            oninput: |_: String| {},
                            hint: label("photosHint"),
                            input_type: "file",
                        }
                    }

                    fieldset {
                        legend { {label("legend4")} }
                        FormInput { form: state, name: "address", label: label("address"), autocomplete: "street-address", required: true }
                        div { class: "field_row three",
                            FormInput { form: state, name: "city", label: label("city"), autocomplete: "address-level2", required: true }
                            FormInput { form: state, name: "state", label: label("state"), autocomplete: "address-level1", required: true }
                            FormInput { form: state, name: "zip", label: label("zip"), autocomplete: "postal-code", required: true }
                        }
                        FormInput { form: state, name: "deliveryContact", label: label("deliveryContact"), required: true }
                        FormTextarea {
                            form: state,
                            name: "deliveryInstructions",
                            label: label("deliveryInstructions"),
                            hint: label("deliveryInstructionsHint"),
                        }
                    }

                    fieldset {
                        legend { {label("legend5")} }
                        FormInput { form: state, name: "ownerName", label: label("ownerName"), autocomplete: "name", required: true }
                        FormInput { form: state, name: "ownerMobile", label: label("ownerMobile"), input_type: "tel", autocomplete: "tel", required: true }
                        FormInput { form: state, name: "ownerEmail", label: label("ownerEmail"), input_type: "email", autocomplete: "email", required: true }
                        FormInput { form: state, name: "purchasingContact", label: label("purchasingContact"), required: true }
                        FormInput { form: state, name: "accountsContact", label: label("accountsContact"), required: true }
                    }

                    fieldset {
                        legend { {label("legend6")} }
                        FormCheckbox { form: state, name: "confirmLicensed", label: label("confirmLicensed") }
                        FormCheckbox { form: state, name: "confirmTrade", label: label("confirmTrade") }
                        FormCheckbox { form: state, name: "confirmStockist", label: label("confirmStockist") }
                        FormCheckbox { form: state, name: "subscribe", label: label("subscribe") }
                    }

                    button { r#type: "submit", class: "btn submit_btn",
                        {label("submitButton")}
                        Icon { kind: IconKind::ArrowRight }
                    }
                }
            }
        }
    }
}
