// ============================================================================
// Policy Module
// Decides which literals should be regrouped and how
// ============================================================================
//
// This module provides:
// - GroupingRule / GroupingPolicy: per-base (minimum_size, group_size) config
// - DigitSeparatorCheck: effective_size threshold + format comparison
// - Suggestion: replacement text for a host rewrite layer
// - LiteralCache: optional shared memoization of parse results
// - PolicyError: configuration errors

mod cache;
mod checker;
mod errors;
mod rule;

pub use cache::LiteralCache;
pub use checker::{DigitSeparatorCheck, Suggestion};
pub use errors::{PolicyError, PolicyResult};
pub use rule::{GroupingPolicy, GroupingRule};
