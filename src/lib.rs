// ============================================================================
// Digit Grouping Library
// Lossless numeric-literal lexing and digit-separator formatting
// ============================================================================

//! # Digit Grouping
//!
//! Parses numeric literals exactly as they appear in source code and renders
//! them with canonical digit separators.
//!
//! ## Features
//!
//! - **Three bases**: decimal, `0x` hexadecimal and `0b` binary, integer or real
//! - **Compound suffixes** matched longest-first (`UL`, `lu`, `f`, `M`, ...)
//! - **Lossless**: `prefix + original_digits + suffix` is always the input text
//! - **Region-aware grouping**: integer digits right-aligned, fraction digits
//!   left-aligned, exponents untouched
//! - **Policy checks** that turn per-base thresholds into fix suggestions
//!
//! ## Example
//!
//! ```rust
//! use digit_grouping::prelude::*;
//!
//! let literal = NumericLiteral::parse("0x1ade_3FE1_29AaUL").unwrap();
//! assert_eq!(literal.base(), NumericBase::Hexadecimal);
//! assert_eq!(literal.format(2), "0x_1a_de_3F_E1_29_AaUL");
//! assert_eq!(literal.effective_size(), 12);
//!
//! let check = DigitSeparatorCheck::new(GroupingPolicy::conventional()).unwrap();
//! let suggestion = check.check("1234.567e89").unwrap();
//! assert_eq!(suggestion.replacement, "1_234.567e89");
//! ```

pub mod format;
pub mod literal;
pub mod policy;
pub mod utils;

// Re-exports for convenience
pub mod prelude {
    pub use crate::literal::{
        DigitParts, LiteralError, NumericBase, NumericLiteral, RealSuffix, DIGIT_SEPARATOR,
    };
    pub use crate::policy::{
        DigitSeparatorCheck, GroupingPolicy, GroupingRule, LiteralCache, PolicyError,
        PolicyResult, Suggestion,
    };
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;

    #[test]
    fn test_parse_decimal_with_compound_suffix() {
        let literal = NumericLiteral::parse("10_543_765Lu").unwrap();
        assert_eq!(literal.base(), NumericBase::Decimal);
        assert_eq!(literal.prefix(), "");
        assert_eq!(literal.original_digits(), "10_543_765");
        assert_eq!(literal.suffix(), "Lu");
        assert!(literal.is_integer());
    }

    #[test]
    fn test_parse_hexadecimal_with_compound_suffix() {
        let literal = NumericLiteral::parse("0x1ade_3FE1_29AaUL").unwrap();
        assert_eq!(literal.base(), NumericBase::Hexadecimal);
        assert_eq!(literal.prefix(), "0x");
        assert_eq!(literal.original_digits(), "1ade_3FE1_29Aa");
        assert_eq!(literal.suffix(), "UL");
    }

    #[test]
    fn test_regroup_scattered_separators() {
        let literal = NumericLiteral::parse("1_2__3___4____5").unwrap();
        assert_eq!(literal.format(3), "12_345");
    }

    #[test]
    fn test_regroup_real_keeps_exponent() {
        let literal = NumericLiteral::parse("1234.567e89").unwrap();
        assert_eq!(literal.format(3), "1_234.567e89");
    }

    #[test]
    fn test_trailing_separator_rejected() {
        assert!(NumericLiteral::parse("123_").is_none());
    }

    #[test]
    fn test_effective_size_of_reals() {
        assert_eq!(NumericLiteral::parse(".123456").unwrap().effective_size(), 6);
        assert_eq!(NumericLiteral::parse("1234.5").unwrap().effective_size(), 4);
    }

    #[test]
    fn test_policy_workflow() {
        let policy = GroupingPolicy::conventional();
        let check = DigitSeparatorCheck::new(policy.clone()).unwrap();
        let cache = LiteralCache::new();

        let source = ["1000000", "0xFFFFFFFF", "0b11110000", "42", "width", "3.14159265"];
        let mut fixes = Vec::new();
        for text in source {
            let Some(literal) = cache.parse(text) else {
                continue;
            };
            let rule = policy.rule_for(literal.base());
            if literal.effective_size() >= rule.minimum_size {
                let formatted = literal.format(rule.group_size);
                assert_eq!(check.check_literal(&literal).is_some(), formatted != text);
                if formatted != text {
                    fixes.push(formatted);
                }
            }
        }

        assert_eq!(
            fixes,
            ["1_000_000", "0x_FF_FF_FF_FF", "0b_1111_0000", "3.141_592_65"]
        );
    }
}
