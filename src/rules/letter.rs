//! Letter rule - the password must contain at least one letter.

use crate::rule::Rule;

pub const LETTER_PATTERN: &str = r".*[A-z].*";

/// Builds the at-least-one-letter rule.
pub fn letter_rule() -> Rule {
    Rule::new(LETTER_PATTERN, "Password must contain at least one letter")
        .expect("built-in pattern compiles")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_rule_digits_only() {
        let rule = letter_rule();
        assert!(!rule.matches("12345678"));
    }

    #[test]
    fn test_letter_rule_lowercase() {
        let rule = letter_rule();
        assert!(rule.matches("123abc456"));
    }

    #[test]
    fn test_letter_rule_uppercase() {
        let rule = letter_rule();
        assert!(rule.matches("123ABC456"));
    }
}
