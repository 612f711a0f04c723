// ============================================================================
// Numeric Base
// Radix of a literal, its introducing prefix, and its digit alphabet
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Radix a numeric literal is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NumericBase {
    /// Base 10, no prefix. The only base that admits real literals.
    Decimal,
    /// Base 16, introduced by `0x` or `0X`
    Hexadecimal,
    /// Base 2, introduced by `0b` or `0B`
    Binary,
}

impl NumericBase {
    /// All bases, in the order the parser tries them.
    pub const ALL: [NumericBase; 3] = [
        NumericBase::Decimal,
        NumericBase::Hexadecimal,
        NumericBase::Binary,
    ];

    /// The letter that follows the leading `0` of the prefix (matched case-insensitively).
    #[inline]
    pub const fn prefix_marker(self) -> Option<char> {
        match self {
            NumericBase::Decimal => None,
            NumericBase::Hexadecimal => Some('x'),
            NumericBase::Binary => Some('b'),
        }
    }

    /// Length in bytes of the prefix `text` starts with, or `None` when it
    /// does not start with this base's prefix.
    ///
    /// Decimal has an empty prefix, so it always matches with length 0.
    pub fn prefix_len(self, text: &str) -> Option<usize> {
        let Some(marker) = self.prefix_marker() else {
            return Some(0);
        };

        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some('0'), Some(ch)) if ch.eq_ignore_ascii_case(&marker) => Some(2),
            _ => None,
        }
    }

    /// Whether `ch` belongs to this base's digit alphabet.
    #[inline]
    pub fn is_digit(self, ch: char) -> bool {
        match self {
            NumericBase::Decimal => ch.is_ascii_digit(),
            NumericBase::Hexadecimal => ch.is_ascii_hexdigit(),
            NumericBase::Binary => matches!(ch, '0' | '1'),
        }
    }
}

impl fmt::Display for NumericBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericBase::Decimal => write!(f, "decimal"),
            NumericBase::Hexadecimal => write!(f, "hexadecimal"),
            NumericBase::Binary => write!(f, "binary"),
        }
    }
}
