// ============================================================================
// Basic Usage Example
// ============================================================================

use digit_grouping::prelude::*;

fn main() {
    #[cfg(feature = "logging")]
    digit_grouping::utils::init_logging(tracing::Level::DEBUG);

    println!("=== Digit Grouping Example ===\n");

    println!("Parsing literals...");
    for text in ["10_543_765Lu", "0x1ade_3FE1_29AaUL", "0B1001_1010u", ".3e5f", "123_", "count"] {
        match NumericLiteral::parse(text) {
            Some(literal) => println!(
                "  {:<20} base={:<12} prefix={:<3} digits={:<16} suffix={:<3} integer={}",
                text,
                literal.base().to_string(),
                literal.prefix(),
                literal.original_digits(),
                literal.suffix(),
                literal.is_integer()
            ),
            None => println!("  {:<20} rejected", text),
        }
    }

    println!("\nRegrouping...");
    for (text, group_size) in [("1_2__3___4____5", 3), ("1234.5678e9", 3), ("0xDEADBEEF", 4)] {
        if let Some(literal) = NumericLiteral::parse(text) {
            println!(
                "  {:<20} -> {:<20} (size {})",
                text,
                literal.format(group_size),
                literal.effective_size()
            );
        }
    }

    println!("\nChecking against the conventional policy...");
    let check = match DigitSeparatorCheck::new(GroupingPolicy::conventional()) {
        Ok(check) => check,
        Err(err) => {
            eprintln!("invalid policy: {err}");
            return;
        }
    };
    let source = ["1000000", "0xFFFFFFFFu", "0b1000000UL", "123456.789", "1_000", "42"];
    for suggestion in check.check_all(source) {
        println!(
            "  {:<20} should be {} ({})",
            suggestion.original, suggestion.replacement, suggestion.base
        );
    }

    println!("\n=== Example Complete ===");
}
