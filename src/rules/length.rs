//! Length rule - the whole password must be at least `MIN_LENGTH` characters.

use crate::rule::Rule;

pub const MIN_LENGTH: usize = 8;
pub const LENGTH_PATTERN: &str = ".{8,}";

/// Builds the minimum-length rule with its `minLength` variable.
pub fn length_rule() -> Rule {
    Rule::new(
        LENGTH_PATTERN,
        "Password must be at least {minLength} characters",
    )
    .expect("built-in pattern compiles")
    .with_variable("minLength", MIN_LENGTH.to_string())
}
