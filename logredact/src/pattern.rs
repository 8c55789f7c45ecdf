//! Compiled pattern lists.
//!
//! A [`PatternSet`] is a pure string transformation. It does not traverse
//! structures; that is the job of [`crate::Redact`].

use regex::{NoExpand, Regex};

use crate::{error::InvalidPatternError, redaction::RedactionMapper};

/// An ordered list of compiled patterns and the token that replaces their
/// matches.
///
/// Patterns use the [`regex`] syntax. Rules are applied one after the other:
/// the output of rule *i* is the input of rule *i + 1*, so a later rule also
/// sees the tokens inserted by earlier ones.
///
/// The replacement is inserted literally; `$1`-style group references are not
/// expanded.
#[derive(Clone, Debug)]
pub struct PatternSet {
    rules: Vec<Regex>,
    replacement: String,
}

impl PatternSet {
    /// Compiles every pattern source, in order.
    ///
    /// Fails on the first source that is not a valid pattern.
    pub fn new<I, S>(
        patterns: I,
        replacement: impl Into<String>,
    ) -> Result<Self, InvalidPatternError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rules = patterns
            .into_iter()
            .enumerate()
            .map(|(index, source)| {
                let source = source.as_ref();
                Regex::new(source).map_err(|err| InvalidPatternError::new(index, source, err))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            rules,
            replacement: replacement.into(),
        })
    }

    /// Replaces every match of every rule with the replacement token.
    ///
    /// This method is total (it does not return errors).
    #[must_use]
    pub fn apply(&self, value: &str) -> String {
        let mut redacted = value.to_owned();
        for rule in &self.rules {
            redacted = rule
                .replace_all(&redacted, NoExpand(self.replacement.as_str()))
                .into_owned();
        }
        redacted
    }

    /// Returns true when at least one rule matches `value`.
    pub fn is_match(&self, value: &str) -> bool {
        self.rules.iter().any(|rule| rule.is_match(value))
    }

    /// The replacement token.
    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// Pattern sources, in application order.
    pub fn patterns(&self) -> impl Iterator<Item = &str> + '_ {
        self.rules.iter().map(Regex::as_str)
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true when the set has no rules; `apply` is then the identity.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl RedactionMapper for PatternSet {
    fn map_str(&self, value: &str) -> String {
        self.apply(value)
    }
}
