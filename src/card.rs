//! Payment card display: masked/grouped card numbers and `MM/YY` expiry dates.

use crate::text::{digits_only, prepend};

/// Mask used by callers that want the usual secure display.
pub const DEFAULT_CARD_MASK: char = '*';

/// Digits that stay visible when a card number is masked.
const VISIBLE_DIGITS: usize = 4;

/// Format a card number for display.
///
/// Non-digits are dropped. With `Some(mask)` every digit except the last four
/// is replaced by `mask`. 16-digit numbers (Visa, MasterCard, Discover) are
/// grouped 4-4-4-4, 15-digit numbers (AmEx) 4-6-5; other lengths are returned
/// ungrouped.
pub fn credit_card(input: &str, mask: Option<char>) -> String {
    let mut chars: Vec<char> = digits_only(input).chars().collect();
    if let Some(mask) = mask {
        let hidden = chars.len().saturating_sub(VISIBLE_DIGITS);
        for c in &mut chars[..hidden] {
            *c = mask;
        }
    }

    match chars.len() {
        16 => chars
            .chunks(4)
            .map(|chunk| chunk.iter().collect::<String>())
            .collect::<Vec<_>>()
            .join(" "),
        15 => {
            let group = |range: std::ops::Range<usize>| chars[range].iter().collect::<String>();
            format!("{} {} {}", group(0..4), group(4..10), group(10..15))
        }
        _ => chars.into_iter().collect(),
    }
}

/// Format card expiry digits as `MM/YY`.
///
/// The last two digits are the year. With more than four digits the year is
/// assumed to be written in full, so the two digits before it are skipped.
/// The month is whatever precedes, left-padded with `0`.
pub fn expiration(input: &str) -> String {
    let digits = digits_only(input);
    let len = digits.len();
    let year_width = if len > 4 { 4 } else { 2 };
    let month = &digits[..len.saturating_sub(year_width)];
    let year = &digits[len.saturating_sub(2)..];
    format!("{}/{}", prepend(month, 2, '0'), year)
}
