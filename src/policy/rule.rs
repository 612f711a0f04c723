// ============================================================================
// Grouping Policy Configuration
// Per-base thresholds and group sizes supplied by the caller
// ============================================================================

use super::errors::{PolicyError, PolicyResult};
use crate::literal::NumericBase;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Grouping Rule
// ============================================================================

/// How literals of one base should be grouped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GroupingRule {
    /// Literals whose effective size is below this are left alone
    pub minimum_size: usize,
    /// Digits between separators in the suggested rendering
    pub group_size: u8,
}

impl GroupingRule {
    /// Create a rule from a threshold and a group size
    pub const fn new(minimum_size: usize, group_size: u8) -> Self {
        Self {
            minimum_size,
            group_size,
        }
    }

    /// Rule that fires once a literal is longer than a single group
    pub const fn longer_than_one_group(group_size: u8) -> Self {
        Self::new(group_size as usize + 1, group_size)
    }
}

// ============================================================================
// Grouping Policy
// ============================================================================

/// One [`GroupingRule`] per numeric base.
///
/// There is no `Default`: callers pick their rules explicitly or start from a
/// named preset such as [`GroupingPolicy::conventional`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GroupingPolicy {
    /// Rule for decimal integers and reals
    pub decimal: GroupingRule,
    /// Rule for `0x` literals
    pub hexadecimal: GroupingRule,
    /// Rule for `0b` literals
    pub binary: GroupingRule,
}

impl GroupingPolicy {
    /// Create a policy from one rule per base
    pub fn new(decimal: GroupingRule, hexadecimal: GroupingRule, binary: GroupingRule) -> Self {
        Self {
            decimal,
            hexadecimal,
            binary,
        }
    }

    /// Same rule for every base
    pub fn uniform(rule: GroupingRule) -> Self {
        Self::new(rule, rule, rule)
    }

    /// Builder method: replace the rule for one base
    pub fn with_rule(mut self, base: NumericBase, rule: GroupingRule) -> Self {
        *self.rule_for_mut(base) = rule;
        self
    }

    /// Rule that applies to literals of `base`
    pub fn rule_for(&self, base: NumericBase) -> GroupingRule {
        match base {
            NumericBase::Decimal => self.decimal,
            NumericBase::Hexadecimal => self.hexadecimal,
            NumericBase::Binary => self.binary,
        }
    }

    fn rule_for_mut(&mut self, base: NumericBase) -> &mut GroupingRule {
        match base {
            NumericBase::Decimal => &mut self.decimal,
            NumericBase::Hexadecimal => &mut self.hexadecimal,
            NumericBase::Binary => &mut self.binary,
        }
    }

    /// Validate the policy
    pub fn validate(&self) -> PolicyResult<()> {
        for base in NumericBase::ALL {
            if self.rule_for(base).group_size == 0 {
                return Err(PolicyError::ZeroGroupSize(base));
            }
        }
        Ok(())
    }
}

// ============================================================================
// Preset Policies (Factory Methods)
// ============================================================================

impl GroupingPolicy {
    /// Thousands for decimal, bytes for hexadecimal, nibbles for binary
    /// - Decimal: groups of 3, from 4 digits
    /// - Hexadecimal: groups of 2, from 3 digits
    /// - Binary: groups of 4, from 5 digits
    pub fn conventional() -> Self {
        Self::new(
            GroupingRule::longer_than_one_group(3),
            GroupingRule::longer_than_one_group(2),
            GroupingRule::longer_than_one_group(4),
        )
    }

    /// Like [`conventional`](Self::conventional) but hexadecimal is grouped
    /// in 16-bit words (`0xDEAD_BEEF`)
    pub fn word_hex() -> Self {
        Self::conventional().with_rule(
            NumericBase::Hexadecimal,
            GroupingRule::longer_than_one_group(4),
        )
    }
}

// ============================================================================
// JSON Configuration
// ============================================================================

#[cfg(feature = "serde")]
impl GroupingPolicy {
    /// Load and validate a policy from JSON.
    ///
    /// ```
    /// use digit_grouping::policy::GroupingPolicy;
    ///
    /// let policy = GroupingPolicy::from_json(
    ///     r#"{
    ///         "decimal": { "minimum_size": 5, "group_size": 3 },
    ///         "hexadecimal": { "minimum_size": 5, "group_size": 4 },
    ///         "binary": { "minimum_size": 9, "group_size": 8 }
    ///     }"#,
    /// )
    /// .unwrap();
    /// assert_eq!(policy.binary.group_size, 8);
    /// ```
    pub fn from_json(json: &str) -> PolicyResult<Self> {
        let policy: Self =
            serde_json::from_str(json).map_err(|err| PolicyError::Config(err.to_string()))?;
        policy.validate()?;
        Ok(policy)
    }

    /// Serialize the policy to pretty-printed JSON
    pub fn to_json(&self) -> PolicyResult<String> {
        serde_json::to_string_pretty(self).map_err(|err| PolicyError::Config(err.to_string()))
    }
}
