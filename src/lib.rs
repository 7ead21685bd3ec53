//! Password policy evaluation library
//!
//! This library evaluates a password against an ordered list of regex
//! rules. Each rule carries a message template and named substitution
//! variables; evaluation stops at the first violated rule and reports its
//! rendered message, so a caller has everything needed to show (or
//! re-render) a violation.
//!
//! # Features
//!
//! - `tracing`: Enables per-rule logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use pwd_policy::{default_policy, evaluate_password};
//! use secrecy::SecretString;
//!
//! let policy = default_policy();
//! let password = SecretString::new("MyP@ssw0rd1".to_string().into());
//!
//! let outcome = evaluate_password(Some(&password), &policy);
//! assert!(outcome.is_valid());
//!
//! let outcome = evaluate_password(Some(&SecretString::new("short".to_string().into())), &policy);
//! assert_eq!(outcome.message(), Some("Password must be at least 8 characters"));
//! ```

// Internal modules
mod evaluator;
mod outcome;
mod policy;
mod rule;
mod rules;

// Public API
pub use evaluator::evaluate_password;
pub use outcome::{ValidationOutcome, REQUIRED_MESSAGE};
pub use policy::{default_policy, PolicyConfig};
pub use rule::{PolicyError, Rule};
pub use rules::{
    length_rule, letter_rule, number_rule, special_char_rule, LENGTH_PATTERN, LETTER_PATTERN,
    MIN_LENGTH, NUMBER_PATTERN, SPECIAL_CHAR_PATTERN,
};
