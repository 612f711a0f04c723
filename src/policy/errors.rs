// ============================================================================
// Policy Errors
// Error types for grouping policy configuration
// ============================================================================

use crate::literal::NumericBase;
use std::fmt;

/// Errors raised while building or loading a [`GroupingPolicy`](super::GroupingPolicy).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolicyError {
    /// A rule asks for groups of zero digits
    ZeroGroupSize(NumericBase),
    /// Configuration text could not be read
    Config(String),
}

impl fmt::Display for PolicyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolicyError::ZeroGroupSize(base) => {
                write!(f, "invalid {base} rule: group size must be positive")
            }
            PolicyError::Config(msg) => write!(f, "invalid policy configuration: {msg}"),
        }
    }
}

impl std::error::Error for PolicyError {}

/// Result type alias for policy operations
pub type PolicyResult<T> = Result<T, PolicyError>;
