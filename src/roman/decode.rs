use crate::error::FormatError;

use super::SYMBOL_TABLE;

fn symbol_value(c: char) -> Option<u32> {
    let lower = c.to_ascii_lowercase();
    SYMBOL_TABLE
        .iter()
        .find(|entry| entry.symbol == lower)
        .map(|entry| entry.value)
}

/// Parse a Roman numeral (either case) back into an integer.
///
/// Evaluated right to left: a symbol smaller than the one after it is
/// subtracted. Non-canonical forms such as `"iiii"` or `"mmmm"` are accepted
/// and summed.
pub fn parse_roman_numeral(numeral: &str) -> Result<u32, FormatError> {
    let invalid = || FormatError::InvalidNumeral(numeral.to_string());

    if numeral.is_empty() {
        return Err(invalid());
    }

    let mut total: u32 = 0;
    let mut prev_value: u32 = 0;
    for c in numeral.chars().rev() {
        let value = symbol_value(c).ok_or_else(invalid)?;
        total = if value < prev_value {
            total.checked_sub(value)
        } else {
            total.checked_add(value)
        }
        .ok_or_else(invalid)?;
        prev_value = value;
    }

    if total == 0 {
        return Err(invalid());
    }
    Ok(total)
}
