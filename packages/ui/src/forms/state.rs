use super::validation::{evaluate, Errors, FieldValue, Schema, Values};

/// Values, current errors and whether the form went through.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    values: Values,
    errors: Errors,
    submitted: bool,
}

impl FormState {
    pub fn text(&self, name: &str) -> &str {
        match self.values.get(name) {
            Some(FieldValue::Text(s)) => s,
            _ => "",
        }
    }

    pub fn checked(&self, name: &str) -> bool {
        matches!(self.values.get(name), Some(FieldValue::Checked(true)))
    }

    /// Update a text, radio or select field and clear only its error.
    pub fn set_text(&mut self, name: &'static str, value: impl Into<String>) {
        self.values.insert(name, FieldValue::Text(value.into()));
        self.errors.remove(name);
    }

    /// Update a checkbox and clear only its error.
    pub fn set_checked(&mut self, name: &'static str, checked: bool) {
        self.values.insert(name, FieldValue::Checked(checked));
        self.errors.remove(name);
    }

    /// Message key for `name`, if it failed the last submit.
    pub fn error(&self, name: &str) -> Option<&'static str> {
        self.errors.get(name).copied()
    }

    pub fn errors(&self) -> &Errors {
        &self.errors
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Validate everything. On success the form is marked submitted.
    pub fn submit(&mut self, schema: &Schema) -> bool {
        self.errors = evaluate(schema, &self.values);
        if !self.errors.is_empty() {
            tracing::debug!(form = schema.name, failed = self.errors.len(), "form rejected");
            return false;
        }
        tracing::info!(form = schema.name, fields = self.values.len(), "form accepted");
        self.submitted = true;
        true
    }

    pub fn clear(&mut self, name: &'static str) {
        self.values.remove(name);
        self.errors.remove(name);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::{CONTACT, LOGIN};

    #[test]
    fn failed_submit_keeps_form_editable() {
        let mut form = FormState::default();
        form.set_text("name", "Ada");
        assert!(!form.submit(&CONTACT));
        assert!(!form.is_submitted());
        assert_eq!(form.error("name"), None);
        assert_eq!(form.error("email"), Some("contact.errors.emailRequired"));
        assert_eq!(form.text("name"), "Ada");
    }

    #[test]
    fn editing_clears_only_that_field() {
        let mut form = FormState::default();
        form.submit(&CONTACT);
        assert_eq!(form.errors().len(), 4);
        form.set_text("email", "x");
        assert_eq!(form.error("email"), None);
        assert!(form.error("subject").is_some());
        assert_eq!(form.errors().len(), 3);
    }

    #[test]
    fn invalid_email_is_reported_after_edit() {
        let mut form = FormState::default();
        form.set_text("email", "ada@");
        form.set_text("password", "secret");
        assert!(!form.submit(&LOGIN));
        assert_eq!(form.error("email"), Some("login.errors.emailInvalid"));
        assert_eq!(form.error("password"), None);
    }

    #[test]
    fn successful_submit_marks_submitted() {
        let mut form = FormState::default();
        form.set_text("email", "ada@example.com");
        form.set_text("password", "secret");
        assert!(form.submit(&LOGIN));
        assert!(form.is_submitted());
        assert!(form.errors().is_empty());
    }

    #[test]
    fn checkbox_round_trip_and_reset() {
        let mut form = FormState::default();
        assert!(!form.checked("subscribe"));
        form.set_checked("subscribe", true);
        assert!(form.checked("subscribe"));
        form.clear("subscribe");
        assert!(!form.checked("subscribe"));
        form.set_text("name", "x");
        form.reset();
        assert_eq!(form, FormState::default());
    }
}
