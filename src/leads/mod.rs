// Lead intake - field-level validation and display formatting

pub mod fields;

pub use fields::{format_phone, validate_email, validate_name, validate_new_lead, validate_phone, FieldError};
