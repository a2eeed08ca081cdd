use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

/// Field-level validation failure on lead or customer-care intake forms.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("name is required")]
    NameRequired,
    #[error("phone must be exactly 10 digits (got {digits})")]
    InvalidPhone { digits: usize },
    #[error("email address {email:?} is not valid")]
    InvalidEmail { email: String },
}

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"))
}

/// Names only need to be non-blank; the backend owns any richer rules.
pub fn validate_name(name: &str) -> Result<String, FieldError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(FieldError::NameRequired);
    }
    Ok(trimmed.to_string())
}

/// Strip separators and require exactly 10 digits. Returns the bare digits.
pub fn validate_phone(phone: &str) -> Result<String, FieldError> {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() != 10 {
        return Err(FieldError::InvalidPhone {
            digits: digits.len(),
        });
    }
    Ok(digits)
}

pub fn validate_email(email: &str) -> Result<String, FieldError> {
    let trimmed = email.trim();
    if !email_pattern().is_match(trimmed) {
        return Err(FieldError::InvalidEmail {
            email: email.to_string(),
        });
    }
    Ok(trimmed.to_string())
}

/// Validate the required intake fields for a new lead in one pass.
/// Email is optional on the form; when present it must parse.
pub fn validate_new_lead(name: &str, phone: &str, email: Option<&str>) -> Result<(), FieldError> {
    validate_name(name)?;
    validate_phone(phone)?;
    if let Some(email) = email {
        validate_email(email)?;
    }
    Ok(())
}

/// Display formatting: `xxx-xxx-xxxx` for 10-digit numbers, otherwise the
/// digits unchanged.
pub fn format_phone(phone: &str) -> String {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() == 10 {
        format!("{}-{}-{}", &digits[0..3], &digits[3..6], &digits[6..])
    } else {
        digits
    }
}
