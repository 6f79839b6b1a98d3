//! Integer-to-Roman-numeral conversion.
//!
//! Walks a descending symbol table greedily. After each symbol's greedy pass,
//! the subtractive form for that tier (`cm`, `cd`, `xc`, `xl`, `ix`, `iv`) is
//! tried once before moving on. Values of 4000 and above simply repeat `m`.

mod decode;

#[cfg(test)]
mod tests;

pub use decode::parse_roman_numeral;

use tracing::{debug, debug_span};

use crate::error::FormatError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RomanSymbol {
    pub symbol: char,
    pub value: u32,
}

/// Roman symbols, strictly descending by value.
pub const SYMBOL_TABLE: [RomanSymbol; 7] = [
    RomanSymbol { symbol: 'm', value: 1000 },
    RomanSymbol { symbol: 'd', value: 500 },
    RomanSymbol { symbol: 'c', value: 100 },
    RomanSymbol { symbol: 'l', value: 50 },
    RomanSymbol { symbol: 'x', value: 10 },
    RomanSymbol { symbol: 'v', value: 5 },
    RomanSymbol { symbol: 'i', value: 1 },
];

/// Decimal places kept when checking `log_base(value)` for integrality.
const POWER_PRECISION: f64 = 100.0;

/// Whether `value` is an exact power of `base`.
///
/// The log ratio is rounded to two decimal places first, so that
/// `ln(1000) / ln(10) == 2.9999999999999996` still counts as a power.
pub fn is_power_of(value: u32, base: u32) -> bool {
    if value == 0 || base < 2 {
        return false;
    }
    let exponent = f64::from(value).ln() / f64::from(base).ln();
    let rounded = (exponent * POWER_PRECISION).round() / POWER_PRECISION;
    rounded.fract() == 0.0
}

/// Convert a real number to a lowercase Roman numeral.
///
/// The input is floored first, so `4.9` becomes `"iv"`. Non-finite input and
/// anything that floors below 1 is rejected.
pub fn to_roman_numeral(n: f64) -> Result<String, FormatError> {
    if !n.is_finite() {
        return Err(FormatError::InvalidArgument(format!(
            "roman numeral input must be finite, got {n}"
        )));
    }
    let floored = n.floor();
    if floored < 1.0 {
        return Err(FormatError::InvalidArgument(format!(
            "roman numeral input must be at least 1, got {n}"
        )));
    }
    if floored > f64::from(u32::MAX) {
        return Err(FormatError::InvalidArgument(format!(
            "roman numeral input must not exceed {}, got {n}",
            u32::MAX
        )));
    }
    encode(floored as u32)
}

/// Convert a positive integer to a lowercase Roman numeral.
pub fn encode(value: u32) -> Result<String, FormatError> {
    if value == 0 {
        return Err(FormatError::InvalidArgument(
            "roman numerals have no zero".to_string(),
        ));
    }
    let _span = debug_span!("encode_roman", value).entered();

    let mut conversion = Conversion::new(value);
    conversion.run();

    debug!(len = conversion.result.len());
    Ok(conversion.result)
}

/// Per-call accumulator state.
struct Conversion {
    remainder: u32,
    result: String,
    index: usize,
}

impl Conversion {
    fn new(value: u32) -> Self {
        Self {
            remainder: value,
            result: String::new(),
            index: 0,
        }
    }

    fn run(&mut self) {
        while self.remainder > 0 {
            let Some(&entry) = SYMBOL_TABLE.get(self.index) else {
                break;
            };

            self.greedy_pass(entry);

            // `i` has no subtractive form; its greedy pass drains the remainder.
            if entry.value > 1 {
                if let Some(partner) = subtractive_partner(self.index) {
                    self.subtractive_pass(entry, partner);
                }
                self.index += 1;
            }
        }
    }

    fn greedy_pass(&mut self, entry: RomanSymbol) {
        while self.remainder >= entry.value {
            self.result.push(entry.symbol);
            self.remainder -= entry.value;
        }
    }

    fn subtractive_pass(&mut self, entry: RomanSymbol, partner: RomanSymbol) {
        let value = entry.value - partner.value;
        while self.remainder >= value {
            self.result.push(partner.symbol);
            self.result.push(entry.symbol);
            self.remainder -= value;
        }
    }
}

/// The smaller symbol written in front of `SYMBOL_TABLE[index]` to subtract
/// from it: two tiers down for powers of ten (`c` before `m`), one tier down
/// otherwise (`c` before `d`).
fn subtractive_partner(index: usize) -> Option<RomanSymbol> {
    let entry = SYMBOL_TABLE.get(index)?;
    let step = if is_power_of(entry.value, 10) { 2 } else { 1 };
    SYMBOL_TABLE.get(index + step).copied()
}
