//! Special character rule - the password must contain one of a fixed set.

use crate::rule::Rule;

/// The fixed set is `! | @ # $ % ^ & * -`.
pub const SPECIAL_CHAR_PATTERN: &str = r".*[\!|\@|\#|\$|\%|\^|\&|\*|\-].*";

/// Builds the at-least-one-special-character rule.
pub fn special_char_rule() -> Rule {
    Rule::new(
        SPECIAL_CHAR_PATTERN,
        "Password must contain at least one special character",
    )
    .expect("built-in pattern compiles")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_special_rule_alphanumeric_only() {
        let rule = special_char_rule();
        assert!(!rule.matches("NoSpecial123"));
    }

    #[test]
    fn test_special_rule_each_set_member() {
        let rule = special_char_rule();
        for c in ['!', '@', '#', '$', '%', '^', '&', '*', '-'] {
            assert!(rule.matches(&format!("Password1{c}")), "expected match for '{c}'");
        }
    }

    #[test]
    fn test_special_rule_character_outside_set() {
        let rule = special_char_rule();
        assert!(!rule.matches("NoMatchHere?123"));
        assert!(!rule.matches("Underscore_123"));
    }
}
