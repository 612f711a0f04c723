// ============================================================================
// Type Suffixes
// Integer suffix tables and real-type markers
// ============================================================================

use rust_decimal::Decimal;
use std::str::FromStr;

/// Two-character integer suffixes: one unsigned and one long marker, either
/// order, either case. Checked before [`INTEGER_SUFFIXES_1`].
const INTEGER_SUFFIXES_2: [&str; 8] = ["UL", "Ul", "uL", "ul", "LU", "Lu", "lU", "lu"];

/// Single-character integer suffixes.
const INTEGER_SUFFIXES_1: [&str; 4] = ["U", "u", "L", "l"];

/// Length in bytes of the integer suffix `text` ends with, longest match first.
///
/// A suffix is only considered when something precedes it, so a lone `L`
/// is never taken as suffix-only.
pub(crate) fn integer_suffix_len(text: &str) -> usize {
    let len = text.len();
    let ends_with = |n: usize, table: &[&'static str]| {
        len > n
            && text
                .get(len - n..)
                .is_some_and(|tail| table.iter().any(|suffix| *suffix == tail))
    };

    if ends_with(2, &INTEGER_SUFFIXES_2) {
        2
    } else if ends_with(1, &INTEGER_SUFFIXES_1) {
        1
    } else {
        0
    }
}

/// Numeric type a real literal denotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RealSuffix {
    /// `F` / `f`: single precision
    Single,
    /// `D` / `d`, or no suffix at all: double precision
    Double,
    /// `M` / `m`: 128-bit decimal
    Decimal,
}

impl RealSuffix {
    /// Maps a trailing marker to its type (case-insensitive).
    #[inline]
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            'F' | 'f' => Some(RealSuffix::Single),
            'D' | 'd' => Some(RealSuffix::Double),
            'M' | 'm' => Some(RealSuffix::Decimal),
            _ => None,
        }
    }

    /// Whether separator-free `digits` parse as this type.
    ///
    /// Floats accept overflow as infinity; decimals reject anything outside
    /// their 28-digit scale or 96-bit mantissa.
    pub fn accepts(self, digits: &str) -> bool {
        match self {
            RealSuffix::Single => digits.parse::<f32>().is_ok(),
            RealSuffix::Double => digits.parse::<f64>().is_ok(),
            RealSuffix::Decimal => parse_decimal(digits).is_some(),
        }
    }
}

fn parse_decimal(digits: &str) -> Option<Decimal> {
    let (mantissa, exponent) = match digits.split_once(['e', 'E']) {
        Some((mantissa, exponent)) => (mantissa, Some(exponent)),
        None => (digits, None),
    };

    // Normalize ".5" so the mantissa always has an integer digit.
    let value = if mantissa.starts_with('.') {
        Decimal::from_str(&format!("0{mantissa}")).ok()?
    } else {
        Decimal::from_str(mantissa).ok()?
    };

    let Some(exponent) = exponent else {
        return Some(value);
    };
    let exponent: i32 = exponent.parse().ok()?;
    if exponent < 0 {
        shift_right(value, exponent.unsigned_abs())
    } else {
        shift_left(value, exponent.unsigned_abs())
    }
}

/// Largest scale a `Decimal` can carry.
const MAX_DECIMAL_SCALE: u32 = 28;

/// Multiplies `value` by `10^places`, spending fraction digits first.
fn shift_left(value: Decimal, places: u32) -> Option<Decimal> {
    let mut value = value.normalize();
    let spent = value.scale().min(places);
    value.set_scale(value.scale() - spent).ok()?;

    let ten = Decimal::from(10);
    for _ in spent..places {
        if value.is_zero() {
            break;
        }
        value = value.checked_mul(ten)?;
    }
    Some(value)
}

/// Divides `value` by `10^places`, rounding half away from zero once the
/// result needs more than [`MAX_DECIMAL_SCALE`] fraction digits.
fn shift_right(value: Decimal, places: u32) -> Option<Decimal> {
    let mut value = value.normalize();
    let scale = value.scale().checked_add(places)?;
    if scale <= MAX_DECIMAL_SCALE {
        value.set_scale(scale).ok()?;
        return Some(value);
    }

    let mantissa = value.mantissa();
    let rounded = match 10i128.checked_pow(scale - MAX_DECIMAL_SCALE) {
        Some(divisor) => {
            let (quotient, remainder) = (mantissa / divisor, (mantissa % divisor).abs());
            if remainder >= divisor - remainder {
                quotient + mantissa.signum()
            } else {
                quotient
            }
        }
        // A 96-bit mantissa has fewer than 39 digits.
        None => 0,
    };
    Decimal::try_from_i128_with_scale(rounded, MAX_DECIMAL_SCALE).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_suffix_longest_first() {
        assert_eq!(integer_suffix_len("10Lu"), 2);
        assert_eq!(integer_suffix_len("0x1UL"), 2);
        assert_eq!(integer_suffix_len("10u"), 1);
        assert_eq!(integer_suffix_len("10L"), 1);
        assert_eq!(integer_suffix_len("10"), 0);
        assert_eq!(integer_suffix_len("0x1d"), 0);
    }

    #[test]
    fn test_integer_suffix_needs_preceding_text() {
        assert_eq!(integer_suffix_len("L"), 0);
        assert_eq!(integer_suffix_len("UL"), 1);
        assert_eq!(integer_suffix_len(""), 0);
    }

    #[test]
    fn test_integer_suffix_rejects_mixed_pairs() {
        // "LL" and "UU" are not suffixes; only the last char is taken.
        assert_eq!(integer_suffix_len("1LL"), 1);
        assert_eq!(integer_suffix_len("1UU"), 1);
    }

    #[test]
    fn test_integer_suffix_non_ascii_tail() {
        assert_eq!(integer_suffix_len("1é"), 0);
    }

    #[test]
    fn test_real_suffix_from_char() {
        assert_eq!(RealSuffix::from_char('f'), Some(RealSuffix::Single));
        assert_eq!(RealSuffix::from_char('D'), Some(RealSuffix::Double));
        assert_eq!(RealSuffix::from_char('m'), Some(RealSuffix::Decimal));
        assert_eq!(RealSuffix::from_char('e'), None);
    }

    #[test]
    fn test_real_suffix_accepts() {
        assert!(RealSuffix::Double.accepts("1.5e10"));
        assert!(RealSuffix::Single.accepts(".3e5"));
        assert!(RealSuffix::Decimal.accepts("19.73"));
        assert!(RealSuffix::Decimal.accepts(".5"));
        assert!(RealSuffix::Decimal.accepts("1.5e3"));
        assert!(RealSuffix::Decimal.accepts("1E+5"));
        assert!(RealSuffix::Decimal.accepts("25e-3"));
        assert!(!RealSuffix::Double.accepts("abc"));
    }

    #[test]
    fn test_decimal_out_of_range() {
        assert!(!RealSuffix::Decimal.accepts("99999999999999999999999999999999"));
        assert!(!RealSuffix::Decimal.accepts("1e40"));
        assert!(RealSuffix::Decimal.accepts("0e40"));
    }

    #[test]
    fn test_decimal_negative_exponent_drops_trailing_zeros() {
        let smallest = Decimal::from_i128_with_scale(1, 28);
        assert_eq!(parse_decimal("1e-28"), Some(smallest));
        assert_eq!(parse_decimal("1.0e-28"), Some(smallest));
        assert_eq!(parse_decimal("10e-29"), Some(smallest));
        assert_eq!(parse_decimal("100.000e-30"), Some(smallest));
    }

    #[test]
    fn test_decimal_negative_exponent_rounds_past_max_scale() {
        assert_eq!(parse_decimal("5e-29"), Some(Decimal::from_i128_with_scale(1, 28)));
        assert_eq!(parse_decimal("4e-29"), Some(Decimal::ZERO));
        assert_eq!(
            parse_decimal("123456e-31"),
            Some(Decimal::from_i128_with_scale(123, 28))
        );
        assert_eq!(parse_decimal("1e-40"), Some(Decimal::ZERO));
        assert!(RealSuffix::Decimal.accepts("1e-2147483648"));
    }

    #[test]
    fn test_decimal_positive_exponent() {
        let expected = Decimal::from_str("15000000000000000000000000000").ok();
        assert_eq!(parse_decimal("1.5e28"), expected);
        assert_eq!(parse_decimal("150e26"), expected);
        assert_eq!(parse_decimal("1.25e1"), Decimal::from_str("12.5").ok());
        assert_eq!(parse_decimal("8e28"), None);
    }
}
