// ============================================================================
// Digit Separator Check
// Compares a literal against its policy-formatted rendering
// ============================================================================

use super::errors::PolicyResult;
use super::rule::GroupingPolicy;
use crate::literal::{NumericBase, NumericLiteral};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Replacement text for a literal that is not grouped per the policy.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Suggestion {
    /// The literal as written
    pub original: String,
    /// Drop-in replacement with canonical separators
    pub replacement: String,
    /// Base of the literal, which selected the rule
    pub base: NumericBase,
}

/// Decides whether literals should be regrouped.
///
/// # Example
/// ```
/// use digit_grouping::policy::{DigitSeparatorCheck, GroupingPolicy};
///
/// let check = DigitSeparatorCheck::new(GroupingPolicy::conventional()).unwrap();
///
/// let suggestion = check.check("1000000").unwrap();
/// assert_eq!(suggestion.replacement, "1_000_000");
///
/// assert!(check.check("1_000_000").is_none()); // already canonical
/// assert!(check.check("123").is_none()); // too short
/// assert!(check.check("name").is_none()); // not a literal
/// ```
#[derive(Debug, Clone)]
pub struct DigitSeparatorCheck {
    policy: GroupingPolicy,
    skip_separated: bool,
}

impl DigitSeparatorCheck {
    /// Create a checker; the policy is validated first.
    pub fn new(policy: GroupingPolicy) -> PolicyResult<Self> {
        policy.validate()?;
        Ok(Self {
            policy,
            skip_separated: false,
        })
    }

    /// Builder method: leave literals that already contain a separator
    /// alone, however they are grouped.
    pub fn skip_separated(mut self) -> Self {
        self.skip_separated = true;
        self
    }

    /// The policy this checker applies
    pub fn policy(&self) -> &GroupingPolicy {
        &self.policy
    }

    /// Parse `text` and check it. Non-literals yield `None`.
    pub fn check(&self, text: &str) -> Option<Suggestion> {
        NumericLiteral::parse(text).and_then(|literal| self.check_literal(&literal))
    }

    /// Check an already parsed literal.
    pub fn check_literal(&self, literal: &NumericLiteral) -> Option<Suggestion> {
        if self.skip_separated && literal.has_separators() {
            return None;
        }

        let rule = self.policy.rule_for(literal.base());
        if literal.effective_size() < rule.minimum_size {
            return None;
        }

        let replacement = literal.format(rule.group_size);
        if replacement == literal.text() {
            return None;
        }

        tracing::debug!(
            original = literal.text(),
            replacement = replacement.as_str(),
            base = %literal.base(),
            "literal should use digit separators"
        );

        Some(Suggestion {
            original: literal.text().to_owned(),
            replacement,
            base: literal.base(),
        })
    }

    /// Check many candidates, keeping only those that need a fix
    pub fn check_all<'a, I>(&self, texts: I) -> Vec<Suggestion>
    where
        I: IntoIterator<Item = &'a str>,
    {
        texts.into_iter().filter_map(|text| self.check(text)).collect()
    }
}
