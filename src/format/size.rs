// ============================================================================
// Effective Size
// Significant-digit count used to decide whether grouping is worthwhile
// ============================================================================

use crate::literal::{NumericBase, NumericLiteral};

impl NumericLiteral {
    /// Number of digits that grouping would act on.
    ///
    /// Hexadecimal and binary literals count every digit. Decimal literals
    /// count the longer of the integer and fraction regions; the exponent is
    /// never counted. This is a threshold signal, not a measure of magnitude.
    ///
    /// ```
    /// use digit_grouping::literal::NumericLiteral;
    ///
    /// assert_eq!(NumericLiteral::parse(".123456").unwrap().effective_size(), 6);
    /// assert_eq!(NumericLiteral::parse("1234.5").unwrap().effective_size(), 4);
    /// ```
    pub fn effective_size(&self) -> usize {
        match self.base() {
            NumericBase::Hexadecimal | NumericBase::Binary => self.scrubbed_digits().len(),
            NumericBase::Decimal => {
                let parts = self.parts();
                parts.integer.len().max(parts.fraction.map_or(0, str::len))
            }
        }
    }
}
