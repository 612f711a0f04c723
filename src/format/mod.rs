// ============================================================================
// Format Module
// Separator rendering and size measurement for parsed literals
// ============================================================================
//
// Both operations are inherent methods on NumericLiteral:
// - NumericLiteral::format(group_size): canonical separator placement
// - NumericLiteral::effective_size(): digit count used as a grouping threshold
//
// Neither has an error path; a NumericLiteral is valid by construction.

mod grouping;
mod size;
