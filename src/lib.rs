//! Display formatting for presentation code: Roman numerals, card numbers,
//! dollar amounts, phone numbers, postal codes, durations and small text
//! helpers.
//!
//! Every formatter is a pure function; shared tables are constants and the
//! optional [`settings`] are read-only once initialized.

uniffi::setup_scaffolding!();

pub mod api;
pub mod card;
pub mod currency;
pub mod duration;
pub mod error;
pub mod phone;
pub mod postal;
pub mod roman;
pub mod settings;
pub mod text;
pub mod trace_init;

pub use card::{credit_card, expiration, DEFAULT_CARD_MASK};
pub use currency::{dollars, dollars_str, parse_amount, separate_thousands, separate_thousands_str};
pub use duration::{time, DEFAULT_TIME_DELIMITER};
pub use error::FormatError;
pub use phone::phone_number;
pub use postal::{zip_code, Country};
pub use roman::{parse_roman_numeral, to_roman_numeral};
pub use text::{prepend, to_title_case, unicode_entities};
