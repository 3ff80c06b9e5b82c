#![allow(missing_docs)]

pub mod confirmation;
pub mod controller;
pub mod examples;
pub mod sanitize;
pub mod schema;
pub mod spec;
pub mod submission;
pub mod validate;
pub mod values;

pub use confirmation::{
    Confirmation, ConfirmationBundle, build_confirmation, format_amount, render_json_ui,
    render_text,
};
pub use controller::{FormController, FormError, FormState, SubmitOutcome};
pub use examples::generate as example_values;
pub use sanitize::{sanitize, sanitize_value};
pub use schema::fields_schema;
pub use spec::{
    Availability, Category, FieldDescriptor, FieldKind, Recurrence, fields_for,
};
pub use submission::SubmissionRecord;
pub use validate::validate;
pub use values::{ErrorMap, FieldValue, FieldValues};
