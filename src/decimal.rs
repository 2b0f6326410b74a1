//! Monetary amount type used for detail amounts and customer totals.
//!
//! Wraps `rust_decimal::Decimal` so amounts keep full decimal precision while
//! summing, and are only rounded when rendered as `$` + two decimal places.

use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Invariant currency sign accepted (and ignored) while parsing.
const CURRENCY_SYMBOL: char = '\u{a4}';

/// Largest exponent magnitude applied to a mantissa before giving up.
const MAX_EXPONENT: u32 = 60;

/// A detail field that could not be read as an amount.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid amount: {0:?}")]
pub struct ParseAmountError(String);

/// A decimal amount read from a customer record.
///
/// Parsing follows invariant-culture number rules: surrounding whitespace,
/// a leading or trailing sign, parentheses for negatives, `,` group
/// separators in the integer part, a `.` decimal point and an exponent are
/// all accepted.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use record_exporter::Amount;
///
/// let amount = Amount::from_str("1,200.5").unwrap();
/// assert_eq!(amount.to_string(), "$1200.50");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct Amount(Decimal);

impl Amount {
    /// Number of decimal places shown when rendering.
    pub const DISPLAY_SCALE: u32 = 2;

    /// Zero value.
    pub const ZERO: Self = Amount(Decimal::ZERO);

    /// Wraps a raw decimal.
    pub fn new(value: Decimal) -> Self {
        Amount(value)
    }

    /// Returns the underlying decimal.
    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Adds two amounts, returning `None` when the sum leaves the decimal range.
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Amount)
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Amount::new(value)
    }
}

impl FromStr for Amount {
    type Err = ParseAmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_invariant(s)
            .map(Amount)
            .ok_or_else(|| ParseAmountError(s.to_string()))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rounded = self
            .0
            .round_dp_with_strategy(Self::DISPLAY_SCALE, RoundingStrategy::MidpointAwayFromZero);
        if rounded.is_zero() {
            rounded.set_sign_positive(true);
        }
        write!(f, "${:.2}", rounded)
    }
}

fn parse_invariant(input: &str) -> Option<Decimal> {
    let mut text = input.trim_matches(is_number_white);
    let mut negative = false;
    let mut signed = false;
    let mut currency = false;

    if let Some(inner) = text.strip_prefix('(').and_then(|t| t.strip_suffix(')')) {
        text = inner;
        negative = true;
        signed = true;
    }

    // Whitespace after a sign or '(' is only allowed once a currency symbol was seen.
    loop {
        if let Some(rest) = text.strip_prefix(is_number_white) {
            if signed && !currency {
                return None;
            }
            text = rest;
            continue;
        }
        if !currency {
            if let Some(rest) = text.strip_prefix(CURRENCY_SYMBOL) {
                text = rest;
                currency = true;
                continue;
            }
        }
        if !signed {
            if let Some((is_negative, rest)) = split_sign(text.strip_prefix('-'), text.strip_prefix('+')) {
                text = rest;
                negative = is_negative;
                signed = true;
                continue;
            }
        }
        break;
    }

    loop {
        if let Some(rest) = text.strip_suffix(is_number_white) {
            text = rest;
            continue;
        }
        if !currency {
            if let Some(rest) = text.strip_suffix(CURRENCY_SYMBOL) {
                text = rest;
                currency = true;
                continue;
            }
        }
        if !signed {
            if let Some((is_negative, rest)) = split_sign(text.strip_suffix('-'), text.strip_suffix('+')) {
                text = rest;
                negative = is_negative;
                signed = true;
                continue;
            }
        }
        break;
    }

    let mut value = parse_number(text)?;
    if negative {
        value.set_sign_negative(true);
    }
    if value.is_zero() {
        value.set_sign_positive(true);
    }
    Some(value)
}

/// Space and the ASCII control whitespace `\t` through `\r`.
fn is_number_white(c: char) -> bool {
    c == ' ' || ('\t'..='\r').contains(&c)
}

fn split_sign<'a>(minus: Option<&'a str>, plus: Option<&'a str>) -> Option<(bool, &'a str)> {
    minus.map(|rest| (true, rest)).or_else(|| plus.map(|rest| (false, rest)))
}

/// Parses the unsigned body: `digits[,digits...][.digits][e[+-]digits]`.
fn parse_number(text: &str) -> Option<Decimal> {
    let (mantissa, exponent) = match text.find(|c: char| c == 'e' || c == 'E') {
        Some(pos) => (&text[..pos], Some(&text[pos + 1..])),
        None => (text, None),
    };
    let (integer, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));

    if integer.starts_with(',') {
        return None;
    }
    if !integer.chars().all(|c| c.is_ascii_digit() || c == ',') {
        return None;
    }
    if !fraction.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let digits: String = integer.chars().filter(|c| *c != ',').collect();
    if digits.is_empty() && fraction.is_empty() {
        return None;
    }

    let integer = if digits.is_empty() { "0" } else { digits.as_str() };
    let normalized = if fraction.is_empty() {
        integer.to_string()
    } else {
        format!("{}.{}", integer, fraction)
    };
    let value = Decimal::from_str(&normalized).ok()?;

    match exponent {
        Some(exp) => apply_exponent(value, exp.parse::<i32>().ok()?),
        None => Some(value),
    }
}

fn apply_exponent(mut value: Decimal, exponent: i32) -> Option<Decimal> {
    if value.is_zero() {
        return Some(Decimal::ZERO);
    }
    let steps = exponent.unsigned_abs();
    if exponent > 0 {
        if steps > MAX_EXPONENT {
            return None;
        }
        for _ in 0..steps {
            value = value.checked_mul(Decimal::TEN)?;
        }
    } else {
        for _ in 0..steps.min(MAX_EXPONENT) {
            value = value.checked_div(Decimal::TEN)?;
        }
    }
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Option<String> {
        Amount::from_str(s).ok().map(|a| a.to_string())
    }

    #[test]
    fn test_plain_amounts() {
        assert_eq!(parse("750"), Some("$750.00".to_string()));
        assert_eq!(parse("12.5"), Some("$12.50".to_string()));
        assert_eq!(parse("0.1"), Some("$0.10".to_string()));
        assert_eq!(parse("  42  "), Some("$42.00".to_string()));
    }

    #[test]
    fn test_thousands_separators() {
        assert_eq!(parse("1,200.50"), Some("$1200.50".to_string()));
        assert_eq!(parse("12,345,678"), Some("$12345678.00".to_string()));
        assert_eq!(parse(",100"), None);
        assert_eq!(parse("1.000,5"), None);
    }

    #[test]
    fn test_signs_and_parentheses() {
        assert_eq!(parse("-5"), Some("$-5.00".to_string()));
        assert_eq!(parse("+5"), Some("$5.00".to_string()));
        assert_eq!(parse("5-"), Some("$-5.00".to_string()));
        assert_eq!(parse("(5.25)"), Some("$-5.25".to_string()));
        assert_eq!(parse("-(5)"), None);
        assert_eq!(parse("--5"), None);
        assert_eq!(parse("-5-"), None);
    }

    #[test]
    fn test_exponent_and_partial_forms() {
        assert_eq!(parse("1e3"), Some("$1000.00".to_string()));
        assert_eq!(parse("1.5E-1"), Some("$0.15".to_string()));
        assert_eq!(parse(".5"), Some("$0.50".to_string()));
        assert_eq!(parse("5."), Some("$5.00".to_string()));
        assert_eq!(parse("1e"), None);
        assert_eq!(parse("e3"), None);
    }

    #[test]
    fn test_currency_symbol() {
        assert_eq!(parse("\u{a4}10"), Some("$10.00".to_string()));
        assert_eq!(parse("10 \u{a4}"), Some("$10.00".to_string()));
        assert_eq!(parse("$10"), None);
    }

    #[test]
    fn test_whitespace_around_signs() {
        assert_eq!(parse("\t-5\r"), Some("$-5.00".to_string()));
        assert_eq!(parse("5 -"), Some("$-5.00".to_string()));
        assert_eq!(parse("- \u{a4}5"), None);
        assert_eq!(parse("-\u{a4} 5"), Some("$-5.00".to_string()));
        assert_eq!(parse("\u{a4} -5"), Some("$-5.00".to_string()));
    }

    #[test]
    fn test_rejects_garbage() {
        for input in [
            "", " ", "abc", ".", "-", "1.2.3", "12a", "1 000", "- 5", "( 5)", "\u{a0}5", "5\u{a0}",
        ] {
            assert!(Amount::from_str(input).is_err(), "{:?} should not parse", input);
        }
    }

    #[test]
    fn test_display_rounds_midpoint_away_from_zero() {
        assert_eq!(parse("0.125"), Some("$0.13".to_string()));
        assert_eq!(parse("-0.125"), Some("$-0.13".to_string()));
        assert_eq!(parse("2.675"), Some("$2.68".to_string()));
        assert_eq!(parse("-0.001"), Some("$0.00".to_string()));
        assert_eq!(parse("-0"), Some("$0.00".to_string()));
    }

    #[test]
    fn test_checked_add() {
        let a = Amount::from_str("1.5").unwrap();
        let b = Amount::from_str("2.25").unwrap();
        assert_eq!(a.checked_add(b).unwrap().to_string(), "$3.75");

        let max = Amount::new(Decimal::MAX);
        assert!(max.checked_add(Amount::from_str("1").unwrap()).is_none());
    }

    #[test]
    fn test_zero_constant() {
        assert_eq!(Amount::ZERO.to_string(), "$0.00");
        assert_eq!(Amount::default(), Amount::ZERO);
    }
}
