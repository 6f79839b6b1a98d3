//! UniFFI export layer — Swift/Kotlin bindings for the formatters.
//!
//! Optional arguments left as `None` fall back to the global settings.

mod types;

pub use types::{FmtError, FmtPostalCountry};

use std::path::Path;

use crate::settings::settings;

/// First character of an optional string argument; `None` for missing or empty.
fn first_char(s: Option<String>) -> Option<char> {
    s.and_then(|s| s.chars().next())
}

// ---------------------------------------------------------------------------
// Top-level functions
// ---------------------------------------------------------------------------

#[uniffi::export]
fn engine_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[uniffi::export]
fn format_roman_numeral(n: f64) -> Result<String, FmtError> {
    Ok(crate::roman::to_roman_numeral(n)?)
}

#[uniffi::export]
fn parse_roman_numeral(numeral: String) -> Result<u32, FmtError> {
    Ok(crate::roman::parse_roman_numeral(&numeral)?)
}

/// `secure == false` shows every digit; otherwise `mask` (or the configured
/// mask) hides all but the last four.
#[uniffi::export]
fn format_credit_card(number: String, secure: bool, mask: Option<String>) -> String {
    let mask = secure.then(|| first_char(mask).unwrap_or_else(|| settings().card.mask()));
    crate::card::credit_card(&number, mask)
}

#[uniffi::export]
fn format_dollars(amount: f64, show_cents: bool) -> String {
    crate::currency::dollars(amount, show_cents)
}

#[uniffi::export]
fn format_dollars_string(amount: String, show_cents: bool) -> String {
    crate::currency::dollars_str(&amount, show_cents)
}

#[uniffi::export]
fn format_expiration(digits: String) -> String {
    crate::card::expiration(&digits)
}

#[uniffi::export]
fn format_phone_number(number: String, delimiter: Option<String>) -> String {
    let delimiter = match delimiter {
        Some(d) => Some(d),
        None => settings().phone.delimiter().map(str::to_string),
    };
    crate::phone::phone_number(&number, delimiter.as_deref())
}

#[uniffi::export]
fn format_prepend(value: String, len: u32, fill: Option<String>) -> String {
    crate::text::prepend(value, len as usize, first_char(fill).unwrap_or('0'))
}

#[uniffi::export]
fn format_separate_thousands(value: f64) -> String {
    crate::currency::separate_thousands(value)
}

#[uniffi::export]
fn format_time(
    hours: Option<u64>,
    minutes: u64,
    seconds: u64,
    millis: Option<u64>,
    delimiter: Option<String>,
) -> String {
    let delimiter = delimiter.unwrap_or_else(|| settings().time.delimiter.clone());
    crate::duration::time(hours, minutes, seconds, millis, &delimiter)
}

#[uniffi::export]
fn format_title_case(text: String) -> String {
    crate::text::to_title_case(&text)
}

#[uniffi::export]
fn format_unicode_entities(text: String) -> String {
    crate::text::unicode_entities(&text)
}

#[uniffi::export]
fn format_zip_code(code: String, country: Option<FmtPostalCountry>) -> String {
    let country = country
        .map(Into::into)
        .unwrap_or_else(|| settings().postal.country());
    crate::postal::zip_code(&code, country)
}

#[uniffi::export]
fn settings_load_config(path: String) -> Result<(), FmtError> {
    let content = std::fs::read_to_string(&path).map_err(|e| FmtError::Io {
        msg: format!("{path}: {e}"),
    })?;
    crate::settings::init_custom(content)?;
    Ok(())
}

#[uniffi::export]
fn settings_default_config() -> String {
    crate::settings::default_toml().to_string()
}

#[uniffi::export]
fn trace_init(log_dir: String) {
    crate::trace_init::init_tracing(Path::new(&log_dir));
}
