//! User-related custom validators.

use validator::ValidationError;

use crate::constants::{ERR_INVALID_EMAIL_DOMAIN, ERR_INVALID_PHONE_NUMBER};

/// Number of digits a phone number must have.
pub const PHONE_NUMBER_DIGITS: usize = 10;

/// Custom validator for the phone number field.
/// Accepts exactly ten ASCII digits and nothing else.
pub fn validate_phone_number(phone_number: &str) -> Result<(), ValidationError> {
    if phone_number.len() == PHONE_NUMBER_DIGITS
        && phone_number.bytes().all(|b| b.is_ascii_digit())
    {
        return Ok(());
    }

    let mut error = ValidationError::new("invalid_phone_number");
    error.message = Some(ERR_INVALID_PHONE_NUMBER.into());
    Err(error)
}

/// Custom validator for email domains.
/// The `email` rule alone accepts hosts such as `localhost`; require a dotted
/// domain with non-empty labels.
pub fn validate_email_domain(email: &str) -> Result<(), ValidationError> {
    let dotted = email
        .rsplit_once('@')
        .map(|(_, domain)| {
            domain.contains('.') && domain.split('.').all(|label| !label.is_empty())
        })
        .unwrap_or(false);
    if dotted {
        return Ok(());
    }

    let mut error = ValidationError::new("invalid_email_domain");
    error.message = Some(ERR_INVALID_EMAIL_DOMAIN.into());
    Err(error)
}

/// Lowercase the domain of an email address, keeping the local part as sent.
///
/// Domains are case-insensitive, so this is the form stored and looked up.
pub fn normalize_email(email: &str) -> String {
    match email.rsplit_once('@') {
        Some((local, domain)) => format!("{}@{}", local, domain.to_lowercase()),
        None => email.to_string(),
    }
}
