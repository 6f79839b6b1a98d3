use proptest::prelude::*;

use crate::error::FormatError;

use super::*;

const KNOWN: &[(u32, &str)] = &[
    (1, "i"),
    (2, "ii"),
    (3, "iii"),
    (4, "iv"),
    (5, "v"),
    (6, "vi"),
    (7, "vii"),
    (8, "viii"),
    (9, "ix"),
    (10, "x"),
    (20, "xx"),
    (30, "xxx"),
    (40, "xl"),
    (50, "l"),
    (60, "lx"),
    (70, "lxx"),
    (80, "lxxx"),
    (90, "xc"),
    (100, "c"),
    (200, "cc"),
    (300, "ccc"),
    (400, "cd"),
    (500, "d"),
    (600, "dc"),
    (700, "dcc"),
    (800, "dccc"),
    (900, "cm"),
    (1000, "m"),
    (39, "xxxix"),
    (160, "clx"),
    (207, "ccvii"),
    (246, "ccxlvi"),
    (789, "dcclxxxix"),
    (1009, "mix"),
    (1066, "mlxvi"),
    (1776, "mdcclxxvi"),
    (1954, "mcmliv"),
    (1994, "mcmxciv"),
    (2014, "mmxiv"),
    (2020, "mmxx"),
    (2421, "mmcdxxi"),
    (3999, "mmmcmxcix"),
];

#[test]
fn test_known_numerals() {
    for &(n, expected) in KNOWN {
        assert_eq!(to_roman_numeral(f64::from(n)).unwrap(), expected, "n={n}");
        assert_eq!(encode(n).unwrap(), expected, "n={n}");
    }
}

#[test]
fn test_round_trip_canonical_range() {
    for n in 1..=3999 {
        let numeral = encode(n).unwrap();
        assert_eq!(parse_roman_numeral(&numeral), Ok(n), "numeral={numeral}");
    }
}

#[test]
fn test_no_four_repeats_canonical_range() {
    for n in 1..=3999 {
        let numeral = encode(n).unwrap();
        let chars: Vec<char> = numeral.chars().collect();
        assert!(
            !chars.windows(4).any(|w| w.iter().all(|&c| c == w[0])),
            "n={n} produced {numeral}"
        );
    }
}

#[test]
fn test_output_is_lowercase_symbols_only() {
    for n in 1..=3999 {
        let numeral = encode(n).unwrap();
        assert!(numeral.chars().all(|c| "mdclxvi".contains(c)), "{numeral}");
    }
}

#[test]
fn test_four_thousand_repeats_m() {
    assert_eq!(to_roman_numeral(4000.0).unwrap(), "mmmm");
    assert_eq!(to_roman_numeral(4999.0).unwrap(), "mmmmcmxcix");
    assert_eq!(encode(10_000).unwrap(), "m".repeat(10));
}

#[test]
fn test_floors_fractional_input() {
    assert_eq!(to_roman_numeral(4.9).unwrap(), "iv");
    assert_eq!(to_roman_numeral(1.0001).unwrap(), "i");
    assert_eq!(to_roman_numeral(1999.999).unwrap(), "mcmxcix");
}

#[test]
fn test_rejects_non_positive() {
    for n in [0.0, 0.99, -1.0, -3999.0] {
        assert!(
            matches!(to_roman_numeral(n), Err(FormatError::InvalidArgument(_))),
            "n={n}"
        );
    }
    assert!(matches!(encode(0), Err(FormatError::InvalidArgument(_))));
}

#[test]
fn test_rejects_non_finite() {
    for n in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        assert!(matches!(
            to_roman_numeral(n),
            Err(FormatError::InvalidArgument(_))
        ));
    }
}

#[test]
fn test_rejects_beyond_u32() {
    assert!(matches!(
        to_roman_numeral(f64::from(u32::MAX) + 1.0),
        Err(FormatError::InvalidArgument(_))
    ));
}

#[test]
fn test_is_power_of_ten() {
    for v in [1, 10, 100, 1000, 10_000] {
        assert!(is_power_of(v, 10), "{v}");
    }
    for v in [5, 50, 500, 20, 30] {
        assert!(!is_power_of(v, 10), "{v}");
    }
}

#[test]
fn test_is_power_of_other_bases() {
    assert!(is_power_of(8, 2));
    assert!(is_power_of(81, 3));
    assert!(!is_power_of(12, 2));
    assert!(!is_power_of(0, 10));
    assert!(!is_power_of(10, 1));
}

#[test]
fn test_subtractive_partners() {
    let pairs: Vec<Option<char>> = (0..SYMBOL_TABLE.len())
        .map(|i| subtractive_partner(i).map(|p| p.symbol))
        .collect();
    // m d c l x v i
    assert_eq!(
        pairs,
        vec![
            Some('c'),
            Some('c'),
            Some('x'),
            Some('x'),
            Some('i'),
            Some('i'),
            None
        ]
    );
}

#[test]
fn test_symbol_table_descending() {
    assert!(SYMBOL_TABLE.windows(2).all(|w| w[0].value > w[1].value));
}

proptest! {
    #[test]
    fn prop_thousands_prefix(n in 4000u32..200_000) {
        let numeral = encode(n).unwrap();
        let thousands = (n / 1000) as usize;
        let mut expected = "m".repeat(thousands);
        if n % 1000 > 0 {
            expected.push_str(&encode(n % 1000).unwrap());
        }
        prop_assert_eq!(numeral, expected);
    }

    #[test]
    fn prop_floor_matches_integer(x in 1.0f64..4000.0) {
        let expected = encode(x.floor() as u32).unwrap();
        prop_assert_eq!(to_roman_numeral(x).unwrap(), expected);
    }

    #[test]
    fn prop_decode_ignores_case(n in 1u32..4000) {
        let upper = encode(n).unwrap().to_uppercase();
        prop_assert_eq!(parse_roman_numeral(&upper), Ok(n));
    }
}
