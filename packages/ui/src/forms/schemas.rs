use super::validation::{FieldRule, Schema};

pub const CONTACT: Schema = Schema {
    name: "contact",
    rules: &[
        FieldRule::required("name", "contact.errors.nameRequired"),
        FieldRule::email("email", "contact.errors.emailRequired", "contact.errors.emailInvalid"),
        FieldRule::required("subject", "contact.errors.subjectRequired"),
        FieldRule::required("message", "contact.errors.messageRequired"),
    ],
};

pub const LOGIN: Schema = Schema {
    name: "login",
    rules: &[
        FieldRule::email("email", "login.errors.emailRequired", "login.errors.emailInvalid"),
        FieldRule::required("password", "login.errors.passwordRequired"),
    ],
};

// Empty and malformed addresses share one message.
pub const NEWSLETTER: Schema = Schema {
    name: "newsletter",
    rules: &[FieldRule::email("email", "footer.emailError", "footer.emailError")],
};

pub const SUPPLIER_APPLICATION: Schema = Schema {
    name: "supplier_application",
    rules: &[
        FieldRule::required("companyName", "supplierApplication.errors.companyName"),
        FieldRule::required("contactName", "supplierApplication.errors.contactName"),
        FieldRule::email(
            "email",
            "supplierApplication.errors.email",
            "supplierApplication.errors.emailInvalid",
        ),
        FieldRule::required("phone", "supplierApplication.errors.phone"),
        FieldRule::required("website", "supplierApplication.errors.website"),
        FieldRule::choice("businessType", "supplierApplication.errors.businessType"),
        FieldRule::choice("productCategory", "supplierApplication.errors.productCategory"),
        FieldRule::choice("marketPresence", "supplierApplication.errors.marketPresence"),
        FieldRule::choice("partnershipModel", "supplierApplication.errors.partnershipModel"),
        FieldRule::choice("fdaCompliant", "supplierApplication.errors.fdaCompliant"),
        FieldRule::choice("tempControl", "supplierApplication.errors.tempControl"),
        FieldRule::consent("confirmAuth", "supplierApplication.errors.confirmAuth"),
        FieldRule::consent("confirmContact", "supplierApplication.errors.confirmContact"),
    ],
};

pub const RETAIL_APPLICATION: Schema = Schema {
    name: "retail_application",
    rules: &[
        FieldRule::choice("accountType", "retailApplication.errors.accountType"),
        FieldRule::required("legalName", "retailApplication.errors.legalName"),
        FieldRule::required("storeName", "retailApplication.errors.storeName"),
        FieldRule::required("ein", "retailApplication.errors.ein"),
        FieldRule::choice("businessType", "retailApplication.errors.businessType"),
        FieldRule::required("website", "retailApplication.errors.website"),
        FieldRule::required("productCategories", "retailApplication.errors.productCategories"),
        FieldRule::required("address", "retailApplication.errors.address"),
        FieldRule::required("city", "retailApplication.errors.city"),
        FieldRule::required("state", "retailApplication.errors.state"),
        FieldRule::required("zip", "retailApplication.errors.zip"),
        FieldRule::required("deliveryContact", "retailApplication.errors.deliveryContact"),
        FieldRule::required("ownerName", "retailApplication.errors.ownerName"),
        FieldRule::required("ownerMobile", "retailApplication.errors.ownerMobile"),
        FieldRule::email(
            "ownerEmail",
            "retailApplication.errors.ownerEmail",
            "retailApplication.errors.ownerEmailInvalid",
        ),
        FieldRule::required("purchasingContact", "retailApplication.errors.purchasingContact"),
        FieldRule::required("accountsContact", "retailApplication.errors.accountsContact"),
        FieldRule::consent("confirmLicensed", "retailApplication.errors.confirmLicensed"),
        FieldRule::consent("confirmTrade", "retailApplication.errors.confirmTrade"),
        FieldRule::consent("confirmStockist", "retailApplication.errors.confirmStockist"),
    ],
};

/// Every schema, for dictionary coverage checks.
pub const ALL: &[Schema] = &[
    CONTACT,
    LOGIN,
    NEWSLETTER,
    SUPPLIER_APPLICATION,
    RETAIL_APPLICATION,
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::{FieldValue, FormState};

    #[test]
    fn optional_supplier_fields_are_not_checked() {
        for optional in ["brandDescription", "shelfLife", "goals", "howHeard"] {
            assert!(!SUPPLIER_APPLICATION.is_required(optional), "{optional}");
        }
        for optional in ["deliveryInstructions", "subscribe"] {
            assert!(!RETAIL_APPLICATION.is_required(optional), "{optional}");
        }
    }

    #[test]
    fn complete_supplier_application_submits() {
        let mut form = FormState::default();
        for rule in SUPPLIER_APPLICATION.rules {
            match rule.name {
                "email" => form.set_text("email", "brand@example.com"),
                "confirmAuth" | "confirmContact" => form.set_checked(rule.name, true),
                name => form.set_text(name, "0"),
            }
        }
        assert!(form.submit(&SUPPLIER_APPLICATION));
    }

    #[test]
    fn retail_owner_email_is_validated() {
        let mut form = FormState::default();
        form.set_text("ownerEmail", "owner at shop");
        form.submit(&RETAIL_APPLICATION);
        assert_eq!(
            form.error("ownerEmail"),
            Some("retailApplication.errors.ownerEmailInvalid")
        );
        assert_eq!(form.errors().len(), RETAIL_APPLICATION.rules.len());
    }

    #[test]
    fn newsletter_uses_one_message() {
        let rule = NEWSLETTER.rule("email").unwrap();
        assert_eq!(rule.violation(None), Some("footer.emailError"));
        assert_eq!(
            rule.violation(Some(&FieldValue::Text("nope".into()))),
            Some("footer.emailError")
        );
    }

    #[test]
    fn rule_names_are_unique() {
        for schema in ALL {
            let mut names: Vec<_> = schema.rules.iter().map(|r| r.name).collect();
            names.sort_unstable();
            names.dedup();
            assert_eq!(names.len(), schema.rules.len(), "{}", schema.name);
        }
    }
}
