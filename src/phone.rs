//! North American phone numbers.

use crate::text::digits_only;

/// Format a 10- or 11-digit phone number.
///
/// Non-digits are dropped first. An 11th leading digit is the country code.
/// With a non-empty `delimiter` every part is joined by it
/// (`1.234.567.8910`); otherwise US style is used (`1 (234) 567-8910`).
/// Any other digit count is returned as bare digits.
pub fn phone_number(input: &str, delimiter: Option<&str>) -> String {
    let digits = digits_only(input);
    let len = digits.len();
    if len != 10 && len != 11 {
        return digits;
    }

    let country_code = &digits[..len - 10];
    let area_code = &digits[len - 10..len - 7];
    let prefix = &digits[len - 7..len - 4];
    let line = &digits[len - 4..];

    match delimiter.filter(|d| !d.is_empty()) {
        Some(d) => {
            let local = format!("{area_code}{d}{prefix}{d}{line}");
            if country_code.is_empty() {
                local
            } else {
                format!("{country_code}{d}{local}")
            }
        }
        None => {
            let local = format!("({area_code}) {prefix}-{line}");
            if country_code.is_empty() {
                local
            } else {
                format!("{country_code} {local}")
            }
        }
    }
}
