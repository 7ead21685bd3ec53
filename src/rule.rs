//! Policy rules - anchored regex checks with templated violation messages.

use regex::Regex;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PolicyError {
    #[error("Invalid rule pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: Box<regex::Error>,
    },
    #[error("Policy is not nullable but has no rules")]
    EmptyRuleSet,
}

/// One password rule: a regular expression plus the message template and
/// substitution variables reported when the rule is violated.
///
/// Matching is whole-string: the entire password must match the pattern,
/// not just a substring. Immutable once constructed.
#[derive(Debug, Clone)]
pub struct Rule {
    pattern: String,
    compiled: Regex,
    message_template: String,
    variables: Vec<(String, String)>,
}

impl Rule {
    /// Creates a rule from a pattern and a message template.
    ///
    /// The pattern is compiled anchored at both ends, so `.{8,}` means
    /// "the whole password is at least 8 characters", not "contains an
    /// 8-character run".
    ///
    /// # Errors
    ///
    /// Returns `PolicyError::InvalidPattern` if the pattern does not
    /// compile. Malformed patterns are a configuration error, surfaced
    /// here rather than at evaluation time.
    pub fn new(
        pattern: impl Into<String>,
        message_template: impl Into<String>,
    ) -> Result<Self, PolicyError> {
        let pattern = pattern.into();
        let compiled =
            Regex::new(&format!("^(?:{pattern})$")).map_err(|source| PolicyError::InvalidPattern {
                pattern: pattern.clone(),
                source: Box::new(source),
            })?;

        Ok(Self {
            pattern,
            compiled,
            message_template: message_template.into(),
            variables: Vec::new(),
        })
    }

    /// Adds a named substitution variable. Variables keep insertion order.
    pub fn with_variable(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.push((name.into(), value.into()));
        self
    }

    /// Tests whether the whole password matches this rule's pattern.
    pub fn matches(&self, password: &str) -> bool {
        self.compiled.is_match(password)
    }

    /// The pattern as given, without the anchoring added at compile time.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn message_template(&self) -> &str {
        &self.message_template
    }

    pub fn variables(&self) -> &[(String, String)] {
        &self.variables
    }

    /// Renders the message template, replacing each `{name}` placeholder
    /// with that variable's value.
    pub fn render_message(&self) -> String {
        let mut message = self.message_template.clone();
        for (name, value) in &self.variables {
            message = message.replace(&format!("{{{name}}}"), value);
        }
        message
    }
}
