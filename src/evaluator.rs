//! Password policy evaluator - main evaluation logic.

use secrecy::{ExposeSecret, SecretString};

use crate::outcome::ValidationOutcome;
use crate::policy::PolicyConfig;

/// Evaluates a password against a policy and returns the outcome.
///
/// # Arguments
/// * `password` - The password to evaluate, or `None` when no value was provided
/// * `policy` - The policy to evaluate against
///
/// # Returns
/// `ValidationOutcome::Valid`, or `Invalid` carrying the first violated
/// rule's rendered message and variables. Rules are checked in declared
/// order and evaluation stops at the first non-match.
///
/// An absent password is valid only under a nullable policy; an empty
/// string under a non-nullable policy is rejected without consulting any
/// rule. Under a nullable policy an empty string is still run through the
/// rules.
pub fn evaluate_password(
    password: Option<&SecretString>,
    policy: &PolicyConfig,
) -> ValidationOutcome {
    let Some(password) = password else {
        if policy.nullable() {
            return ValidationOutcome::Valid;
        }
        return ValidationOutcome::required();
    };

    let pwd = password.expose_secret();

    if !policy.nullable() && pwd.is_empty() {
        return ValidationOutcome::required();
    }

    for rule in policy.rules() {
        if !rule.matches(pwd) {
            #[cfg(feature = "tracing")]
            tracing::debug!("[ERROR] Rule violation - pattern: '{}'", rule.pattern());

            return ValidationOutcome::violation(rule);
        }

        #[cfg(feature = "tracing")]
        tracing::debug!("[OK] Rule passed - pattern: '{}'", rule.pattern());
    }

    ValidationOutcome::Valid
}
