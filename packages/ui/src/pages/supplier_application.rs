use dioxus::prelude::*;

use crate::fields::{FormCheckbox, FormInput, FormRadio, FormTextarea, InputField};
use crate::forms::{FormState, SUPPLIER_APPLICATION};
use crate::section::{ContentSection, SectionHeader, SuccessPanel};
use crate::{t, t_list, use_lang, Cta, HeroMediaFull};

const HERO_IMAGE: &str = "https://images.unsplash.com/photo-1454165804606-c3d57bc86b40?q=80&w=2940&auto=format&fit=crop";

#[component]
pub fn SupplierApplicationPage() -> Element {
    let lang = use_lang();
    let mut state = use_signal(FormState::default);

    if state.read().is_submitted() {
        return rsx! {
            SuccessPanel {
                title: t(lang, "supplierApplication.success.title"),
                body: t(lang, "supplierApplication.success.body"),
                primary: Cta::new(t(lang, "supplierApplication.success.ctaHome"), "/"),
                secondary: Cta::new(t(lang, "supplierApplication.success.ctaRetail"), "/retailers"),
            }
        };
    }

    let label = move |key: &str| t(lang, &format!("supplierApplication.form.{key}"));
    let options = move |key: &str| t_list(lang, &format!("supplierApplication.form.{key}Options"));

    rsx! {
        HeroMediaFull {
            headline: t(lang, "supplierApplication.hero.headline"),
            subhead: t(lang, "supplierApplication.hero.subhead"),
            body: t(lang, "supplierApplication.hero.body"),
            secondary_cta: Cta::new(t(lang, "supplierApplication.hero.cta"), "/suppliers"),
            image_src: HERO_IMAGE.to_string(),
            alt_text: t(lang, "supplierApplication.hero.alt"),
        }

        ContentSection {
            SectionHeader { title: t(lang, "supplierApplication.form.title") }
            p { class: "lead centered_text narrow", {t(lang, "supplierApplication.form.intro")} }

            form {
                class: "application_form",
                novalidate: true,
                onsubmit: move |e: FormEvent| {
                    e.prevent_default();
                    state.write().submit(&SUPPLIER_APPLICATION);
                },

                fieldset {
                    legend { {label("legend1")} }
                    FormInput { form: state, name: "companyName", label: label("companyName"), required: true }
                    FormInput { form: state, name: "contactName", label: label("contactName"), required: true }
                    FormInput { form: state, name: "email", label: label("email"), input_type: "email", autocomplete: "email", required: true }
                    FormInput { form: state, name: "phone", label: label("phone"), input_type: "tel", autocomplete: "tel", required: true }
                    FormInput { form: state, name: "website", label: label("website"), input_type: "url", required: true }
                    FormRadio { form: state, name: "businessType", label: label("businessTypeLabel"), options: options("businessType"), required: true }
                }

                fieldset {
                    legend { {label("legend2")} }
                    FormRadio { form: state, name: "productCategory", label: label("productCategoryLabel"), options: options("productCategory"), required: true }
                    FormTextarea { form: state, name: "brandDescription", label: label("brandDescriptionLabel"), hint: label("brandDescriptionHint") }
                    FormRadio { form: state, name: "marketPresence", label: label("marketPresenceLabel"), options: options("marketPresence"), required: true }
                    FormRadio { form: state, name: "partnershipModel", label: label("partnershipModelLabel"), options: options("partnershipModel"), required: true }
                }

                fieldset {
                    legend { {label("legend3")} }
                    FormRadio { form: state, name: "fdaCompliant", label: label("fdaCompliantLabel"), options: options("fdaCompliant"), required: true }
                    FormRadio { form: state, name: "tempControl", label: label("tempControlLabel"), options: options("tempControl"), required: true }
                    FormRadio { form: state, name: "shelfLife", label: label("shelfLifeLabel"), options: options("shelfLife") }
                    // the file itself is never read
                    InputField {
                        id: "deck",
                        label: label("catalogueLabel"),
                        value: "",
                        oninput: |_: String| {},
                        hint: label("catalogueHint"),
                        input_type: "file",
                    }
                }

                fieldset {
                    legend { {label("legend4")} }
                    FormTextarea { form: state, name: "goals", label: label("goalsLabel"), hint: label("goalsHint") }
                    FormRadio { form: state, name: "howHeard", label: label("howHeardLabel"), options: options("howHeard") }
                }

                fieldset {
                    legend { {label("legend5")} }
                    FormCheckbox { form: state, name: "confirmAuth", label: label("confirmAuthLabel") }
                    FormCheckbox { form: state, name: "confirmContact", label: label("confirmContactLabel") }
                }

                button { r#type: "submit", class: "btn submit_btn", {label("submitButton")} }
            }
        }
    }
}
