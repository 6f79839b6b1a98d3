//! Plain-text helpers: padding, title case and HTML numeric entities.

use std::fmt::Display;

/// Left-pad `value` with `fill` until it is `len` characters long.
///
/// Values already at least `len` characters long are returned unchanged.
pub fn prepend(value: impl Display, len: usize, fill: char) -> String {
    let s = value.to_string();
    let count = s.chars().count();
    if count >= len {
        return s;
    }
    let mut result: String = std::iter::repeat(fill).take(len - count).collect();
    result.push_str(&s);
    result
}

pub(crate) fn digits_only(s: &str) -> String {
    s.chars().filter(|c| c.is_ascii_digit()).collect()
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Lowercase the whole string, then capitalize each ASCII letter that starts
/// a word.
///
/// A word starts at the beginning of the text or after any character other
/// than `[A-Za-z0-9_]`, so `"d.ef"` becomes `"D.Ef"` but `"x1y"` stays `"X1y"`.
pub fn to_title_case(input: &str) -> String {
    let lower = input.to_lowercase();
    let mut result = String::with_capacity(lower.len());
    let mut prev: Option<char> = None;
    for c in lower.chars() {
        let at_boundary = !prev.is_some_and(is_word_char);
        if at_boundary && c.is_ascii_lowercase() {
            result.push(c.to_ascii_uppercase());
        } else {
            result.push(c);
        }
        prev = Some(c);
    }
    result
}

/// Replace every character with its decimal numeric character reference,
/// e.g. `"ab"` → `"&#97;&#98;"`.
///
/// One reference is written per Unicode scalar value, so `"😀"` becomes
/// `"&#128512;"`. Encoders that work on UTF-16 code units would emit a
/// surrogate pair (`"&#55357;&#56832;"`) instead, which HTML does not accept.
#[doc(alias = "unicode")]
pub fn unicode_entities(input: &str) -> String {
    input
        .chars()
        .map(|c| format!("&#{};", u32::from(c)))
        .collect()
}
