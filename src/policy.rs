//! Password policy - the ordered rule set plus the nullable flag.

use crate::rule::{PolicyError, Rule};
use crate::rules::{length_rule, letter_rule, number_rule, special_char_rule};

/// One password policy: rules evaluated in declaration order, and whether
/// an absent password is automatically valid.
///
/// Immutable after construction; holds no mutable state and is safe to
/// share across callers.
#[derive(Debug, Clone)]
pub struct PolicyConfig {
    nullable: bool,
    rules: Vec<Rule>,
}

impl PolicyConfig {
    /// Creates a policy from an ordered rule set.
    ///
    /// # Errors
    ///
    /// Returns `PolicyError::EmptyRuleSet` when `nullable` is false and
    /// `rules` is empty.
    pub fn new(rules: Vec<Rule>, nullable: bool) -> Result<Self, PolicyError> {
        if !nullable && rules.is_empty() {
            return Err(PolicyError::EmptyRuleSet);
        }
        Ok(Self { nullable, rules })
    }

    pub fn nullable(&self) -> bool {
        self.nullable
    }

    /// Rules in evaluation order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }
}

/// The built-in default policy: minimum length 8, at least one number, at
/// least one letter, at least one special character. An absent password
/// is considered valid.
pub fn default_policy() -> PolicyConfig {
    PolicyConfig {
        nullable: true,
        rules: vec![
            length_rule(),
            number_rule(),
            letter_rule(),
            special_char_rule(),
        ],
    }
}
