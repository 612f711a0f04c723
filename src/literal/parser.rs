// ============================================================================
// Literal Parser
// Ordered branch matching: decimal, hexadecimal, binary integer, then real
// ============================================================================

use super::base::NumericBase;
use super::numeric_literal::{scrub, NumericLiteral, DIGIT_SEPARATOR};
use super::suffix::{integer_suffix_len, RealSuffix};

impl NumericLiteral {
    /// Parses literal-shaped text.
    ///
    /// Surrounding whitespace is trimmed first. Returns `None` for anything
    /// that is not a complete literal: identifiers, empty text, misplaced
    /// separators, or a real whose digits do not fit its type. A rejection is
    /// an ordinary outcome, never an error.
    ///
    /// # Examples
    /// ```
    /// use digit_grouping::literal::NumericLiteral;
    ///
    /// let literal = NumericLiteral::parse("10_543_765Lu").unwrap();
    /// assert_eq!(literal.original_digits(), "10_543_765");
    /// assert_eq!(literal.suffix(), "Lu");
    ///
    /// assert!(NumericLiteral::parse("123_").is_none());
    /// assert!(NumericLiteral::parse("value").is_none());
    /// ```
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let literal = parse_integer(text, NumericBase::Decimal)
            .or_else(|| parse_integer(text, NumericBase::Hexadecimal))
            .or_else(|| parse_integer(text, NumericBase::Binary))
            .or_else(|| parse_real(text));

        if literal.is_none() {
            tracing::trace!(text, "not a numeric literal");
        }
        literal
    }
}

/// Integer branch for one base. Any failure just means "not this branch".
fn parse_integer(text: &str, base: NumericBase) -> Option<NumericLiteral> {
    let start = base.prefix_len(text)?;
    let end = text.len().checked_sub(integer_suffix_len(text))?;
    let digits = text.get(start..end).filter(|digits| !digits.is_empty())?;

    // A separator may follow a prefix ("0x_1") but never opens a literal.
    if text.starts_with(DIGIT_SEPARATOR) || digits.ends_with(DIGIT_SEPARATOR) {
        return None;
    }
    if !digits
        .chars()
        .all(|ch| ch == DIGIT_SEPARATOR || base.is_digit(ch))
    {
        return None;
    }

    Some(NumericLiteral::new(text, base, start..end, true))
}

/// Real branch: decimal only, optional point, exponent, and F/D/M suffix.
fn parse_real(text: &str) -> Option<NumericLiteral> {
    let last = text.chars().next_back()?;
    let suffix = RealSuffix::from_char(last);
    let end = match suffix {
        Some(_) => text.len() - last.len_utf8(),
        None => text.len(),
    };
    let digits = &text[..end];

    if digits.is_empty() {
        return None;
    }
    if !has_real_shape(digits) {
        tracing::trace!(text, "malformed real literal");
        return None;
    }
    if !suffix.unwrap_or(RealSuffix::Double).accepts(&scrub(digits)) {
        tracing::trace!(text, "real literal digits out of range for its type");
        return None;
    }

    Some(NumericLiteral::new(text, NumericBase::Decimal, 0..end, false))
}

/// Checks `int? ('.' frac)? (('e'|'E') ('+'|'-')? exp)?`.
///
/// Every present run must start and end with a digit, which keeps separators
/// off both edges of the literal and away from the point and the exponent
/// marker. A point always needs fraction digits, and the mantissa needs at
/// least one digit.
fn has_real_shape(digits: &str) -> bool {
    let (mantissa, exponent) = match digits.split_once(['e', 'E']) {
        Some((mantissa, exponent)) => (mantissa, Some(exponent)),
        None => (digits, None),
    };

    if let Some(exponent) = exponent {
        // A separator after the sign (`1e+_5`) is rejected too, not only after the marker.
        let unsigned = exponent.strip_prefix(['+', '-']).unwrap_or(exponent);
        if !is_digit_run(unsigned) {
            return false;
        }
    }

    match mantissa.split_once('.') {
        Some((integer, fraction)) => {
            (integer.is_empty() || is_digit_run(integer)) && is_digit_run(fraction)
        }
        None => is_digit_run(mantissa),
    }
}

/// Non-empty decimal digits with separators only in the interior.
fn is_digit_run(run: &str) -> bool {
    run.starts_with(|ch: char| ch.is_ascii_digit())
        && run.ends_with(|ch: char| ch.is_ascii_digit())
        && run
            .chars()
            .all(|ch| ch.is_ascii_digit() || ch == DIGIT_SEPARATOR)
}
