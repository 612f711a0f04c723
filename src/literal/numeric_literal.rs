// ============================================================================
// Numeric Literal
// Immutable, lossless decomposition of a numeric literal's text
// ============================================================================

use super::base::NumericBase;
use super::errors::LiteralError;
use std::fmt;
use std::ops::Range;
use std::str::FromStr;

/// Character allowed between digits purely for readability.
pub const DIGIT_SEPARATOR: char = '_';

/// A parsed numeric literal.
///
/// The text is split as `prefix + original_digits + suffix`, and the three
/// pieces always concatenate back to the parsed (trimmed) input. Values are
/// only produced by [`NumericLiteral::parse`], so every instance satisfies the
/// literal grammar.
///
/// # Example
/// ```
/// use digit_grouping::literal::{NumericBase, NumericLiteral};
///
/// let literal = NumericLiteral::parse("0x1ade_3FE1_29AaUL").unwrap();
/// assert_eq!(literal.base(), NumericBase::Hexadecimal);
/// assert_eq!(literal.prefix(), "0x");
/// assert_eq!(literal.original_digits(), "1ade_3FE1_29Aa");
/// assert_eq!(literal.scrubbed_digits(), "1ade3FE129Aa");
/// assert_eq!(literal.suffix(), "UL");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NumericLiteral {
    text: String,
    base: NumericBase,
    digits: Range<usize>,
    scrubbed: String,
    is_integer: bool,
}

impl NumericLiteral {
    /// Builds a literal from already-validated pieces. `digits` is the byte
    /// range of the digit run inside `text`.
    pub(super) fn new(text: &str, base: NumericBase, digits: Range<usize>, is_integer: bool) -> Self {
        let scrubbed = scrub(&text[digits.clone()]);
        Self {
            text: text.to_owned(),
            base,
            digits,
            scrubbed,
            is_integer,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Decimal, hexadecimal, or binary.
    #[inline]
    pub fn base(&self) -> NumericBase {
        self.base
    }

    /// `0x`, `0X`, `0b`, `0B` as written, or `""` for decimal.
    #[inline]
    pub fn prefix(&self) -> &str {
        &self.text[..self.digits.start]
    }

    /// The digit run as written, separators included. For real literals this
    /// also holds the point, exponent marker and exponent sign.
    #[inline]
    pub fn original_digits(&self) -> &str {
        &self.text[self.digits.clone()]
    }

    /// [`original_digits`](Self::original_digits) with every separator removed.
    #[inline]
    pub fn scrubbed_digits(&self) -> &str {
        &self.scrubbed
    }

    /// Trailing type marker (`UL`, `u`, `f`, `M`, ...) or `""`.
    #[inline]
    pub fn suffix(&self) -> &str {
        &self.text[self.digits.end..]
    }

    /// False for real literals (fractional part, exponent, or real suffix).
    #[inline]
    pub fn is_integer(&self) -> bool {
        self.is_integer
    }

    /// The full literal text, identical to the parsed input after trimming.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the literal was written with any separator at all.
    #[inline]
    pub fn has_separators(&self) -> bool {
        self.scrubbed.len() != self.digits.len()
    }

    /// Splits [`scrubbed_digits`](Self::scrubbed_digits) into integer,
    /// fraction and exponent regions.
    ///
    /// Integer literals never have a fraction or exponent: hex digits such as
    /// `e` stay in the integer region.
    pub fn parts(&self) -> DigitParts<'_> {
        let digits = self.scrubbed.as_str();
        if self.is_integer {
            return DigitParts {
                integer: digits,
                fraction: None,
                exponent: "",
            };
        }

        let (mantissa, exponent) = match digits.find(['e', 'E']) {
            Some(index) => digits.split_at(index),
            None => (digits, ""),
        };
        let (integer, fraction) = match mantissa.split_once('.') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (mantissa, None),
        };

        DigitParts {
            integer,
            fraction,
            exponent,
        }
    }
}

/// Regions of a literal's scrubbed digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitParts<'a> {
    /// Digits before the point; empty for literals like `.5`
    pub integer: &'a str,
    /// Digits after the point, `None` when there is no point
    pub fraction: Option<&'a str>,
    /// Exponent marker, optional sign and exponent digits, or `""`
    pub exponent: &'a str,
}

/// Removes every digit separator from `text`.
pub(crate) fn scrub(text: &str) -> String {
    text.chars().filter(|&ch| ch != DIGIT_SEPARATOR).collect()
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl fmt::Display for NumericLiteral {
    /// Writes the literal exactly as it was parsed.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl FromStr for NumericLiteral {
    type Err = LiteralError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or(LiteralError::Unrecognized)
    }
}
