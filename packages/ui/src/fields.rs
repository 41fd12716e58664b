//! Labeled, controlled form inputs. Each shows its error below itself and
//! wires `aria-invalid`/`aria-describedby` to it.

use dioxus::prelude::*;

use crate::forms::FormState;
use crate::icons::{Icon, IconKind};
use crate::{t, use_lang, Lang};

const FORMS_CSS: Asset = asset!("/assets/styling/forms.css");

fn described_by(id: &str, error: bool, hint: bool) -> Option<String> {
    let mut ids = Vec::new();
    if error {
        ids.push(format!("{id}-error"));
    }
    if hint {
        ids.push(format!("{id}-hint"));
    }
    (!ids.is_empty()).then(|| ids.join(" "))
}

/// Radio input ids: `name-` plus the option position.
fn option_id(name: &str, index: usize) -> String {
    format!("{name}-{index}")
}

#[component]
fn FieldLabel(id: String, label: String, required: bool, invalid: bool) -> Element {
    let lang = use_lang();
    rsx! {
        div { class: "field_label_row",
            label { r#for: "{id}", class: if invalid { "field_label invalid" } else { "field_label" }, "{label}" }
            if required {
                span { class: "field_required", {t(lang, "form.required")} }
            }
        }
    }
}

#[component]
fn FieldError(id: String, message: String) -> Element {
    rsx! {
        div { id: "{id}-error", class: "field_error", role: "alert",
            Icon { kind: IconKind::ExclamationCircle }
            span { "{message}" }
        }
    }
}

#[component]
pub fn InputField(
    id: String,
    label: String,
    value: String,
    oninput: EventHandler<String>,
    error: Option<String>,
    hint: Option<String>,
    #[props(default)] required: bool,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default)] autocomplete: String,
) -> Element {
    let invalid = error.is_some();
    let describedby = described_by(&id, invalid, hint.is_some());
    rsx! {
        document::Link { rel: "stylesheet", href: FORMS_CSS }
        div { class: "field",
            FieldLabel { id: id.clone(), label: label, required: required, invalid: invalid }
            input {
                id: "{id}",
                name: "{id}",
                r#type: "{input_type}",
                class: if invalid { "field_input invalid" } else { "field_input" },
                value: "{value}",
                autocomplete: "{autocomplete}",
                required: required,
                "aria-invalid": "{invalid}",
                "aria-describedby": describedby,
                oninput: move |e| oninput.call(e.value()),
            }
            if let Some(hint) = hint.filter(|_| !invalid) {
                p { id: "{id}-hint", class: "field_hint", "{hint}" }
            }
            if let Some(message) = error {
                FieldError { id: id.clone(), message: message }
            }
        }
    }
}

#[component]
pub fn PasswordField(
    id: String,
    label: String,
    value: String,
    oninput: EventHandler<String>,
    error: Option<String>,
    #[props(default)] required: bool,
) -> Element {
    let lang = use_lang();
    let mut visible = use_signal(|| false);
    let invalid = error.is_some();
    let describedby = described_by(&id, invalid, false);
    let (toggle_text, toggle_aria) = if visible() {
        (t(lang, "form.hide"), t(lang, "form.hidePassword"))
    } else {
        (t(lang, "form.show"), t(lang, "form.showPassword"))
    };

    rsx! {
        document::Link { rel: "stylesheet", href: FORMS_CSS }
        div { class: "field",
            div { class: "field_label_row",
                label { r#for: "{id}", class: if invalid { "field_label invalid" } else { "field_label" }, "{label}" }
                div { class: "field_label_tools",
                    if required {
                        span { class: "field_required", {t(lang, "form.required")} }
                    }
                    button {
                        r#type: "button",
                        class: "password_toggle",
                        "aria-label": "{toggle_aria}",
                        onclick: move |_| visible.toggle(),
                        "{toggle_text}"
                    }
                }
            }
            input {
                id: "{id}",
                name: "{id}",
                r#type: if visible() { "text" } else { "password" },
                class: if invalid { "field_input invalid" } else { "field_input" },
                value: "{value}",
                autocomplete: "current-password",
                required: required,
                "aria-invalid": "{invalid}",
                "aria-describedby": describedby,
                oninput: move |e| oninput.call(e.value()),
            }
            if let Some(message) = error {
                FieldError { id: id.clone(), message: message }
            }
        }
    }
}

#[component]
pub fn TextareaField(
    id: String,
    label: String,
    value: String,
    oninput: EventHandler<String>,
    error: Option<String>,
    hint: Option<String>,
    #[props(default)] required: bool,
) -> Element {
    let invalid = error.is_some();
    let describedby = described_by(&id, invalid, hint.is_some());
    rsx! {
        document::Link { rel: "stylesheet", href: FORMS_CSS }
        div { class: "field",
            FieldLabel { id: id.clone(), label: label, required: required, invalid: invalid }
            textarea {
                id: "{id}",
                name: "{id}",
                rows: 4,
                class: if invalid { "field_input invalid" } else { "field_input" },
                value: "{value}",
                required: required,
                "aria-invalid": "{invalid}",
                "aria-describedby": describedby,
                oninput: move |e| oninput.call(e.value()),
            }
            if let Some(hint) = hint.filter(|_| !invalid) {
                p { id: "{id}-hint", class: "field_hint", "{hint}" }
            }
            if let Some(message) = error {
                FieldError { id: id.clone(), message: message }
            }
        }
    }
}

#[component]
pub fn CheckboxField(
    id: String,
    label: String,
    checked: bool,
    onchange: EventHandler<bool>,
    error: Option<String>,
) -> Element {
    let invalid = error.is_some();
    rsx! {
        document::Link { rel: "stylesheet", href: FORMS_CSS }
        div { class: "field checkbox_field",
            div { class: "checkbox_row",
                input {
                    id: "{id}",
                    name: "{id}",
                    r#type: "checkbox",
                    checked: checked,
                    "aria-invalid": "{invalid}",
                    onchange: move |e| onchange.call(e.checked()),
                }
                label { r#for: "{id}", "{label}" }
            }
            if let Some(message) = error {
                FieldError { id: id.clone(), message: message }
            }
        }
    }
}

/// Radio buttons over translated options. The stored value is the
/// option's position, so a language switch keeps the selection.
#[component]
pub fn RadioGroup(
    name: String,
    label: String,
    options: Vec<String>,
    selected: String,
    onchange: EventHandler<String>,
    error: Option<String>,
    #[props(default)] required: bool,
) -> Element {
    let lang = use_lang();
    let invalid = error.is_some();
    rsx! {
        document::Link { rel: "stylesheet", href: FORMS_CSS }
        div { class: "field",
            role: "radiogroup",
            "aria-labelledby": "{name}-label",
            div { class: "field_label_row",
                span { id: "{name}-label", class: if invalid { "field_label invalid" } else { "field_label" }, "{label}" }
                if required {
                    span { class: "field_required", {t(lang, "form.required")} }
                }
            }
            div { class: "radio_options",
                for (i, option) in options.into_iter().enumerate() {
                    div { key: "{i}", class: "radio_option",
                        input {
                            id: option_id(&name, i),
                            name: "{name}",
                            r#type: "radio",
                            value: "{i}",
                            checked: selected == i.to_string(),
                            onchange: move |_| onchange.call(i.to_string()),
                        }
                        label { r#for: option_id(&name, i), "{option}" }
                    }
                }
            }
            if let Some(message) = error {
                FieldError { id: name.clone(), message: message }
            }
        }
    }
}

#[component]
pub fn SelectField(
    id: String,
    label: String,
    placeholder: String,
    options: Vec<String>,
    selected: String,
    onchange: EventHandler<String>,
    error: Option<String>,
    #[props(default)] required: bool,
) -> Element {
    let invalid = error.is_some();
    let describedby = described_by(&id, invalid, false);
    rsx! {
        document::Link { rel: "stylesheet", href: FORMS_CSS }
        div { class: "field",
            FieldLabel { id: id.clone(), label: label, required: required, invalid: invalid }
            select {
                id: "{id}",
                name: "{id}",
                class: if invalid { "field_input invalid" } else { "field_input" },
                required: required,
                "aria-invalid": "{invalid}",
                "aria-describedby": describedby,
                onchange: move |e| onchange.call(e.value()),
                option { value: "", selected: selected.is_empty(), "{placeholder}" }
                for (i, option) in options.into_iter().enumerate() {
                    option { key: "{i}", value: "{i}", selected: selected == i.to_string(), "{option}" }
                }
            }
            if let Some(message) = error {
                FieldError { id: id.clone(), message: message }
            }
        }
    }
}

fn error_text(form: Signal<FormState>, lang: Lang, name: &str) -> Option<String> {
    form.read().error(name).map(|key| t(lang, key))
}

/// `InputField` bound to one entry of a `FormState`.
#[component]
pub fn FormInput(
    form: Signal<FormState>,
    name: &'static str,
    label: String,
    hint: Option<String>,
    #[props(default)] required: bool,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default)] autocomplete: String,
) -> Element {
    let lang = use_lang();
    let mut form = form;
    rsx! {
        InputField {
            id: name.to_string(),
            label: label,
            value: form.read().text(name).to_string(),
            oninput: move |v: String| form.write().set_text(name, v),
            error: error_text(form, lang, name),
            hint: hint,
            required: required,
            input_type: input_type,
            autocomplete: autocomplete,
        }
    }
}

#[component]
pub fn FormTextarea(
    form: Signal<FormState>,
    name: &'static str,
    label: String,
    hint: Option<String>,
    #[props(default)] required: bool,
) -> Element {
    let lang = use_lang();
    let mut form = form;
    rsx! {
        TextareaField {
            id: name.to_string(),
            label: label,
            value: form.read().text(name).to_string(),
            oninput: move |v: String| form.write().set_text(name, v),
            error: error_text(form, lang, name),
            hint: hint,
            required: required,
        }
    }
}

#[component]
pub fn FormCheckbox(form: Signal<FormState>, name: &'static str, label: String) -> Element {
    let lang = use_lang();
    let mut form = form;
    rsx! {
        CheckboxField {
            id: name.to_string(),
            label: label,
            checked: form.read().checked(name),
            onchange: move |v: bool| form.write().set_checked(name, v),
            error: error_text(form, lang, name),
        }
    }
}

#[component]
pub fn FormRadio(
    form: Signal<FormState>,
    name: &'static str,
    label: String,
    options: Vec<String>,
    #[props(default)] required: bool,
) -> Element {
    let lang = use_lang();
    let mut form = form;
    rsx! {
        RadioGroup {
            name: name.to_string(),
            label: label,
            options: options,
            selected: form.read().text(name).to_string(),
            onchange: move |v: String| form.write().set_text(name, v),
            error: error_text(form, lang, name),
            required: required,
        }
    }
}

#[component]
pub fn FormSelect(
    form: Signal<FormState>,
    name: &'static str,
    label: String,
    placeholder: String,
    options: Vec<String>,
    #[props(default)] required: bool,
) -> Element {
    let lang = use_lang();
    let mut form = form;
    rsx! {
        SelectField {
            id: name.to_string(),
            label: label,
            placeholder: placeholder,
            options: options,
            selected: form.read().text(name).to_string(),
            onchange: move |v: String| form.write().set_text(name, v),
            error: error_text(form, lang, name),
            required: required,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describedby_lists_error_then_hint() {
        assert_eq!(described_by("email", false, false), None);
        assert_eq!(described_by("email", true, false).as_deref(), Some("email-error"));
        assert_eq!(
            described_by("goals", true, true).as_deref(),
            Some("goals-error goals-hint")
        );
    }

    #[test]
    fn radio_ids_are_positional() {
        assert_eq!(option_id("businessType", 2), "businessType-2");
    }
}
