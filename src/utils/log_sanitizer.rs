//! Masking helpers so emails and phone numbers never reach the logs verbatim.

/// Characters left readable at the start of a masked value.
const VISIBLE_PREFIX: usize = 3;

/// Mask an email address for safe logging.
///
/// Keeps up to three characters of the local part and the whole domain.
///
/// # Examples
/// ```ignore
/// assert_eq!(mask_email("user@example.com"), "use***@example.com");
/// ```
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => format!("{}***@{}", visible_prefix(local), domain),
        None => format!("{}***", visible_prefix(email)),
    }
}

/// Mask a phone number, keeping only the last two digits.
pub fn mask_phone_number(phone_number: &str) -> String {
    let total = phone_number.chars().count();
    let tail: String = phone_number.chars().skip(total.saturating_sub(2)).collect();
    format!("********{}", tail)
}

fn visible_prefix(value: &str) -> String {
    value.chars().take(VISIBLE_PREFIX).collect()
}
