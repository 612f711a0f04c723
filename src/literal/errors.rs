// ============================================================================
// Literal Errors
// ============================================================================

use std::fmt;

/// Error returned when text is converted to a literal with `str::parse`.
///
/// [`NumericLiteral::parse`](super::NumericLiteral::parse) reports the same
/// outcome as `None`; this type exists for `FromStr` callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LiteralError {
    /// Text is not a decimal, hexadecimal, binary, or real literal
    Unrecognized,
}

impl fmt::Display for LiteralError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralError::Unrecognized => write!(f, "not a numeric literal"),
        }
    }
}

impl std::error::Error for LiteralError {}
