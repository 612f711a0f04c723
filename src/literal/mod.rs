// ============================================================================
// Literal Module
// Lossless lexical model of numeric literals
// ============================================================================
//
// This module provides:
// - NumericLiteral: prefix / digits / suffix split of a literal's text
// - NumericBase: decimal, hexadecimal, binary
// - RealSuffix: single, double, decimal precision markers
// - LiteralError: error type for `str::parse::<NumericLiteral>()`
//
// Design principles:
// - Parsing never fails loudly: non-literals are `None`
// - Values are immutable and only constructed by the parser
// - Works on plain strings; no source positions or syntax trees

mod base;
mod errors;
mod numeric_literal;
mod parser;
mod suffix;

pub use base::NumericBase;
pub use errors::LiteralError;
pub use numeric_literal::{DigitParts, NumericLiteral, DIGIT_SEPARATOR};
pub use suffix::RealSuffix;
