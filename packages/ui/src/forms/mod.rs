//! Field validation shared by every form on the site.

mod schemas;
mod state;
mod validation;

pub use schemas::{ALL as ALL_SCHEMAS, CONTACT, LOGIN, NEWSLETTER, RETAIL_APPLICATION, SUPPLIER_APPLICATION};
pub use state::FormState;
pub use validation::{evaluate, is_valid_email, Check, Errors, FieldRule, FieldValue, Schema, Values};
