//! US-dollar amounts and comma-grouped integers.

const GROUP_SEPARATOR: char = ',';

/// Read a numeric string such as `"-1111.899"` as an amount.
///
/// Blank input reads as `0`; anything that is not a number reads as `NaN`,
/// which the formatters print as text instead of rejecting.
pub fn parse_amount(input: &str) -> f64 {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

/// Round to the nearest integer, ties toward positive infinity
/// (`-2.5` → `-2`, `2.5` → `3`).
fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Two-decimal fixed notation, rounding exact half-cent ties up.
///
/// `format!` rounds ties to even. A tie is only exactly representable when
/// the amount is an odd number of eighths (`0.125`, `10.625`), and then
/// `amount * 100` is exact, so those are rounded by hand.
fn to_fixed_cents(amount: f64) -> String {
    let eighths = amount * 8.0;
    if eighths.fract() == 0.0 && eighths % 2.0 == 1.0 {
        let cents = round_half_up(amount * 100.0);
        format!("{:.2}", cents / 100.0)
    } else {
        format!("{amount:.2}")
    }
}

/// Insert a separator between every group of three digits, counting from the
/// right. `digits` must be a plain run of ASCII digits.
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut result = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(GROUP_SEPARATOR);
        }
        result.push(c);
    }
    result
}

/// Round to an integer, drop the sign and group thousands with commas.
///
/// `12345.6789` → `"12,346"`. Non-finite values are returned as text.
#[doc(alias = "seperate_thousands")]
pub fn separate_thousands(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let rounded = round_half_up(value).abs();
    group_thousands(&format!("{rounded:.0}"))
}

/// [`separate_thousands`] for numeric strings, read with [`parse_amount`].
pub fn separate_thousands_str(input: &str) -> String {
    separate_thousands(parse_amount(input))
}

/// Format a dollar amount: `-1111.899` → `"-$1,111.90"`.
///
/// With `show_cents` the amount is rounded to cents, otherwise to whole
/// dollars (`1111.9` → `"$1,112"`). The minus sign goes in front of the `$`.
pub fn dollars(amount: f64, show_cents: bool) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let amount = amount.abs();
    if !amount.is_finite() {
        return format!("{sign}${amount}");
    }

    if show_cents {
        let fixed = to_fixed_cents(amount);
        let (whole, cents) = fixed.split_at(fixed.len() - 3);
        format!("{sign}${}{cents}", group_thousands(whole))
    } else {
        format!("{sign}${}", separate_thousands(amount))
    }
}

/// [`dollars`] for numeric strings, read with [`parse_amount`].
pub fn dollars_str(input: &str, show_cents: bool) -> String {
    dollars(parse_amount(input), show_cents)
}
