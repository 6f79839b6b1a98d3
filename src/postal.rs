//! Postal codes for the two supported countries.

use std::fmt;

use crate::text::digits_only;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Country {
    /// ZIP / ZIP+4
    #[default]
    Us,
    /// `A1A 1A1`
    Ca,
}

impl Country {
    /// Map a country code to a postal format. Only the exact code `"ca"`
    /// selects the Canadian format; every other code falls back to US.
    pub fn from_code(code: &str) -> Self {
        if code == "ca" {
            Country::Ca
        } else {
            Country::Us
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Country::Us => "us",
            Country::Ca => "ca",
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Format a postal code.
///
/// Canada: ASCII letters and digits only, uppercased, as `"A1A 1A1"`.
/// US: digits only; nine digits become `"12345-6789"`, anything else is
/// returned as the bare digits.
pub fn zip_code(input: &str, country: Country) -> String {
    match country {
        Country::Ca => {
            let code: String = input
                .chars()
                .filter(|c| c.is_ascii_alphanumeric())
                .map(|c| c.to_ascii_uppercase())
                .collect();
            let first = &code[..code.len().min(3)];
            let second = &code[code.len().min(3)..code.len().min(6)];
            format!("{first} {second}")
        }
        Country::Us => {
            let digits = digits_only(input);
            if digits.len() == 9 {
                format!("{}-{}", &digits[..5], &digits[5..])
            } else {
                digits
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_us_five_digits() {
        assert_eq!(zip_code("1.23 45a", Country::Us), "12345");
    }

    #[test]
    fn test_us_nine_digits() {
        assert_eq!(zip_code("123 45.a6-78 9", Country::Us), "12345-6789");
    }

    #[test]
    fn test_canadian() {
        assert_eq!(zip_code("a1a1a1b2", Country::Ca), "A1A 1A1");
        assert_eq!(zip_code("k1a-0b1", Country::Ca), "K1A 0B1");
    }

    #[test]
    fn test_canadian_short() {
        assert_eq!(zip_code("k1", Country::Ca), "K1 ");
        assert_eq!(zip_code("k1a0", Country::Ca), "K1A 0");
    }

    #[test]
    fn test_country_from_code() {
        assert_eq!(Country::from_code("ca"), Country::Ca);
        assert_eq!(Country::from_code("CA"), Country::Us);
        assert_eq!(Country::from_code(" ca "), Country::Us);
        assert_eq!(Country::from_code("us"), Country::Us);
        assert_eq!(Country::from_code("fr"), Country::Us);
        assert_eq!(Country::from_code(""), Country::Us);
        assert_eq!(Country::default(), Country::Us);
    }

    #[test]
    fn test_country_display() {
        assert_eq!(Country::Ca.to_string(), "ca");
        assert_eq!(Country::Us.to_string(), "us");
    }
}
