//! Validation outcome - the plain result value reported to callers.

use std::collections::BTreeMap;

use crate::rule::Rule;

/// Message reported when a non-nullable policy gets no password.
pub const REQUIRED_MESSAGE: &str = "A password is required";

/// Result of evaluating a password against a policy.
///
/// `Invalid` carries the first violated rule's rendered message together
/// with the raw variables, so a presentation layer can re-render the
/// template on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Valid,
    Invalid {
        rendered_message: String,
        variables: BTreeMap<String, String>,
    },
}

impl ValidationOutcome {
    /// Outcome for an absent or empty password under a non-nullable
    /// policy. No rule is consulted.
    pub(crate) fn required() -> Self {
        Self::Invalid {
            rendered_message: REQUIRED_MESSAGE.to_string(),
            variables: BTreeMap::new(),
        }
    }

    /// Outcome for the first violated rule.
    pub(crate) fn violation(rule: &Rule) -> Self {
        Self::Invalid {
            rendered_message: rule.render_message(),
            variables: rule.variables().iter().cloned().collect(),
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// The rendered violation message, or `None` when valid.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Valid => None,
            Self::Invalid {
                rendered_message, ..
            } => Some(rendered_message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_outcome_has_no_variables() {
        let outcome = ValidationOutcome::required();
        match outcome {
            ValidationOutcome::Invalid {
                rendered_message,
                variables,
            } => {
                assert_eq!(rendered_message, REQUIRED_MESSAGE);
                assert!(variables.is_empty());
            }
            ValidationOutcome::Valid => panic!("Expected Invalid"),
        }
    }

    #[test]
    fn test_violation_outcome_carries_rule_variables() {
        let rule = Rule::new(".{8,}", "At least {minLength}")
            .expect("pattern compiles")
            .with_variable("minLength", "8");
        let outcome = ValidationOutcome::violation(&rule);
        match outcome {
            ValidationOutcome::Invalid {
                rendered_message,
                variables,
            } => {
                assert_eq!(rendered_message, "At least 8");
                assert_eq!(variables.get("minLength").map(String::as_str), Some("8"));
            }
            ValidationOutcome::Valid => panic!("Expected Invalid"),
        }
    }

    #[test]
    fn test_is_valid_and_message() {
        assert!(ValidationOutcome::Valid.is_valid());
        assert_eq!(ValidationOutcome::Valid.message(), None);

        let outcome = ValidationOutcome::required();
        assert!(!outcome.is_valid());
        assert_eq!(outcome.message(), Some(REQUIRED_MESSAGE));
    }
}
