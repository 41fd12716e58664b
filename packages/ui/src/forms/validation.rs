use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

// Loose shape check: something, an @, something, a dot, something.
static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("EMAIL_REGEX: invalid regex pattern"));

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Checked(bool),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    /// Non-empty after trimming.
    Required,
    /// Required, then must look like an address. `invalid` is the message
    /// key for a present but malformed value.
    Email { invalid: &'static str },
    /// A radio or select option must be picked.
    Choice,
    /// A checkbox must be ticked.
    Consent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    pub name: &'static str,
    pub check: Check,
    /// Translation key shown when the field is missing.
    pub message: &'static str,
}

impl FieldRule {
    pub const fn required(name: &'static str, message: &'static str) -> Self {
        Self {
            name,
            check: Check::Required,
            message,
        }
    }

    pub const fn email(name: &'static str, message: &'static str, invalid: &'static str) -> Self {
        Self {
            name,
            check: Check::Email { invalid },
            message,
        }
    }

    pub const fn choice(name: &'static str, message: &'static str) -> Self {
        Self {
            name,
            check: Check::Choice,
            message,
        }
    }

    pub const fn consent(name: &'static str, message: &'static str) -> Self {
        Self {
            name,
            check: Check::Consent,
            message,
        }
    }

    /// Message key for `value`, or `None` when it passes.
    pub fn violation(&self, value: Option<&FieldValue>) -> Option<&'static str> {
        let text = match value {
            Some(FieldValue::Text(s)) => s.trim(),
            _ => "",
        };
        let checked = matches!(value, Some(FieldValue::Checked(true)));

        match self.check {
            Check::Required | Check::Choice if text.is_empty() => Some(self.message),
            Check::Required | Check::Choice => None,
            Check::Email { .. } if text.is_empty() => Some(self.message),
            Check::Email { invalid } if !is_valid_email(text) => Some(invalid),
            Check::Email { .. } => None,
            Check::Consent if !checked => Some(self.message),
            Check::Consent => None,
        }
    }
}

/// Named, ordered rule list for one form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schema {
    pub name: &'static str,
    pub rules: &'static [FieldRule],
}

impl Schema {
    pub fn rule(&self, field: &str) -> Option<&FieldRule> {
        self.rules.iter().find(|r| r.name == field)
    }

    pub fn is_required(&self, field: &str) -> bool {
        self.rule(field).is_some()
    }
}

pub type Values = BTreeMap<&'static str, FieldValue>;

/// Field name to message key.
pub type Errors = BTreeMap<&'static str, &'static str>;

/// Recompute every error for `values`.
pub fn evaluate(schema: &Schema, values: &Values) -> Errors {
    schema
        .rules
        .iter()
        .filter_map(|rule| {
            rule.violation(values.get(rule.name))
                .map(|message| (rule.name, message))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: Schema = Schema {
        name: "sample",
        rules: &[
            FieldRule::required("name", "e.name"),
            FieldRule::email("email", "e.email", "e.emailInvalid"),
            FieldRule::choice("kind", "e.kind"),
            FieldRule::consent("agree", "e.agree"),
        ],
    };

    fn text(s: &str) -> FieldValue {
        FieldValue::Text(s.to_string())
    }

    #[test]
    fn email_shape() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@shop.example.com"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("ab.co"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn empty_form_reports_every_rule() {
        let errors = evaluate(&SAMPLE, &Values::new());
        assert_eq!(errors.len(), 4);
        assert_eq!(errors["email"], "e.email");
        assert_eq!(errors["agree"], "e.agree");
    }

    #[test]
    fn malformed_email_uses_invalid_message() {
        let mut values = Values::new();
        values.insert("email", text("not-an-email"));
        assert_eq!(evaluate(&SAMPLE, &values)["email"], "e.emailInvalid");
    }

    #[test]
    fn whitespace_is_not_a_value() {
        let mut values = Values::new();
        values.insert("name", text("   "));
        assert_eq!(evaluate(&SAMPLE, &values)["name"], "e.name");
    }

    #[test]
    fn complete_form_passes() {
        let mut values = Values::new();
        values.insert("name", text("Ada"));
        values.insert("email", text("ada@example.com"));
        values.insert("kind", text("1"));
        values.insert("agree", FieldValue::Checked(true));
        assert!(evaluate(&SAMPLE, &values).is_empty());
    }

    #[test]
    fn unchecked_consent_fails() {
        let mut values = Values::new();
        values.insert("agree", FieldValue::Checked(false));
        assert!(evaluate(&SAMPLE, &values).contains_key("agree"));
    }
}
