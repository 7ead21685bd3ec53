//! Number rule - the password must contain at least one digit.

use crate::rule::Rule;

pub const NUMBER_PATTERN: &str = r".*\d.*";

/// Builds the at-least-one-number rule.
pub fn number_rule() -> Rule {
    Rule::new(NUMBER_PATTERN, "Password must contain at least one number")
        .expect("built-in pattern compiles")
}
