// ============================================================================
// Digit Grouping
// Re-inserts separators into a literal at a fixed group size
// ============================================================================

use crate::literal::{NumericLiteral, DIGIT_SEPARATOR};

impl NumericLiteral {
    /// Renders the literal with a separator every `group_size` digits.
    ///
    /// `group_size == 0` strips all separators. Otherwise integer digits are
    /// grouped from the right, fraction digits from the left (starting after
    /// the point), and an exponent is copied through untouched. A prefixed
    /// literal whose digit count is a multiple of `group_size` gets a
    /// separator right after its prefix.
    ///
    /// # Examples
    /// ```
    /// use digit_grouping::literal::NumericLiteral;
    ///
    /// let literal = NumericLiteral::parse("1234.5678e9").unwrap();
    /// assert_eq!(literal.format(3), "1_234.567_8e9");
    /// assert_eq!(literal.format(0), "1234.5678e9");
    ///
    /// let literal = NumericLiteral::parse("0xFf").unwrap();
    /// assert_eq!(literal.format(2), "0x_Ff");
    /// ```
    pub fn format(&self, group_size: u8) -> String {
        let prefix = self.prefix();
        let suffix = self.suffix();
        let digits = self.scrubbed_digits();

        if group_size == 0 {
            return format!("{prefix}{digits}{suffix}");
        }

        let mut grouper = Grouper::new(
            usize::from(group_size),
            prefix.len() + digits.len() + suffix.len() + digits.len() / usize::from(group_size) + 1,
        );
        grouper.out.push_str(prefix);

        let parts = self.parts();
        grouper.push_integer(parts.integer, !prefix.is_empty());
        if let Some(fraction) = parts.fraction {
            grouper.out.push('.');
            grouper.push_fraction(fraction);
        }
        grouper.out.push_str(parts.exponent);

        grouper.out.push_str(suffix);
        grouper.out
    }
}

struct Grouper {
    out: String,
    group: usize,
}

impl Grouper {
    fn new(group: usize, capacity: usize) -> Self {
        Self {
            out: String::with_capacity(capacity),
            group,
        }
    }

    /// Right-aligned groups. With `allow_leading`, a run that divides evenly
    /// opens with a separator (only legal right after a prefix).
    fn push_integer(&mut self, run: &str, allow_leading: bool) {
        let head = run.len() % self.group;
        let first_break = if head == 0 && !allow_leading {
            self.group
        } else {
            head
        };
        self.push_run(run, first_break);
    }

    /// Left-aligned groups; never opens with a separator.
    fn push_fraction(&mut self, run: &str) {
        self.push_run(run, self.group);
    }

    fn push_run(&mut self, run: &str, mut next_break: usize) {
        for (index, ch) in run.char_indices() {
            if index == next_break {
                next_break += self.group;
                if !self.out.is_empty() {
                    self.out.push(DIGIT_SEPARATOR);
                }
            }
            self.out.push(ch);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::literal::NumericLiteral;

    fn format(text: &str, group_size: u8) -> String {
        NumericLiteral::parse(text).unwrap().format(group_size)
    }

    #[test]
    fn test_format_zero_strips_separators() {
        assert_eq!(format("1.234_567", 0), "1.234567");
        assert_eq!(format("1_234.567", 0), "1234.567");
        assert_eq!(format("0B__111", 0), "0B111");
        assert_eq!(format("10_543_765Lu", 0), "10543765Lu");
    }

    #[test]
    fn test_format_decimal_integers() {
        assert_eq!(format("123", 3), "123");
        assert_eq!(format("10543765Lu", 3), "10_543_765Lu");
        assert_eq!(format("1_2__3___4____5", 3), "12_345");
        assert_eq!(format("1000000", 3), "1_000_000");
        assert_eq!(format("1", 3), "1");
    }

    #[test]
    fn test_format_hexadecimal() {
        assert_eq!(format("0xFf", 2), "0x_Ff");
        assert_eq!(format("0X1ba044fEL", 2), "0X_1b_a0_44_fEL");
        assert_eq!(format("0x1ade_3FE1_29AaUL", 2), "0x_1a_de_3F_E1_29_AaUL");
        assert_eq!(format("0x1ade_3FE1_29AaUL", 4), "0x_1ade_3FE1_29AaUL");
        assert_eq!(format("0x_abc", 2), "0xa_bc");
        assert_eq!(format("0x123d", 2), "0x_12_3d");
        assert_eq!(format("0x123d", 1), "0x_1_2_3_d");
    }

    #[test]
    fn test_format_binary() {
        assert_eq!(format("0b101", 4), "0b101");
        assert_eq!(format("0B1001_1010u", 4), "0B_1001_1010u");
        assert_eq!(format("0b1111_1111_0000UL", 4), "0b_1111_1111_0000UL");
        assert_eq!(format("0B__111", 4), "0B111");
    }

    #[test]
    fn test_format_reals() {
        assert_eq!(format("1.234567", 3), "1.234_567");
        assert_eq!(format("123.4567", 3), "123.456_7");
        assert_eq!(format("1234.567", 3), "1_234.567");
        assert_eq!(format(".123456", 3), ".123_456");
        assert_eq!(format(".1234567", 3), ".123_456_7");
        assert_eq!(format(".12345e67", 3), ".123_45e67");
        assert_eq!(format("1234567d", 3), "1_234_567d");
        assert_eq!(format("12345e67", 3), "12_345e67");
        assert_eq!(format("1234.567e89", 3), "1_234.567e89");
        assert_eq!(format("1234.5678e9", 3), "1_234.567_8e9");
    }

    #[test]
    fn test_format_reals_with_suffixes() {
        assert_eq!(format(".3e5f", 3), ".3e5f");
        assert_eq!(format("2345E-2_0", 3), "2_345E-20");
        assert_eq!(format("15D", 3), "15D");
        assert_eq!(format("19.73M", 3), "19.73M");
        assert_eq!(format("1234d", 3), "1_234d");
    }

    #[test]
    fn test_format_exponent_never_grouped() {
        assert_eq!(format("1e1234", 1), "1e1234");
        assert_eq!(format("12.5E+308", 1), "1_2.5E+308");
    }
}
