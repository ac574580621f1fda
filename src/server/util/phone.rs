//! Phone number normalization for customer lookup.

/// Reduce a phone number to bare digits for matching.
///
/// Strips formatting characters and a leading US country code, so
/// "+1 (555) 123-4567", "555-123-4567", and "5551234567" all normalize to the
/// same key.
pub fn normalize_phone(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();

    if digits.len() == 11 && digits.starts_with('1') {
        digits[1..].to_string()
    } else {
        digits
    }
}
