//! Error types for redactor construction.
//!
//! Applying a redactor never fails; only building one does.

use thiserror::Error;

/// A pattern source that could not be compiled.
///
/// Returned eagerly by [`crate::PatternSet::new`] and everything built on it,
/// so a bad pattern surfaces at startup instead of silently leaving data
/// unredacted.
#[derive(Debug, Error)]
#[error("invalid redaction pattern #{index} `{pattern}`: {source}")]
pub struct InvalidPatternError {
    index: usize,
    pattern: String,
    #[source]
    source: regex::Error,
}

impl InvalidPatternError {
    pub(crate) fn new(index: usize, pattern: &str, source: regex::Error) -> Self {
        Self {
            index,
            pattern: pattern.to_owned(),
            source,
        }
    }

    /// Position of the offending pattern in the list given at construction.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The pattern source as given.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

/// Crate-level error.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// A pattern failed to compile.
    #[error(transparent)]
    InvalidPattern(#[from] InvalidPatternError),

    /// A configuration document could not be parsed.
    #[cfg(feature = "json")]
    #[error("invalid redactor configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type for fallible `logredact` operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_pattern_message_names_pattern_and_index() {
        let source = regex::Regex::new("(unclosed").unwrap_err();
        let err = InvalidPatternError::new(2, "(unclosed", source);
        assert_eq!(err.index(), 2);
        assert_eq!(err.pattern(), "(unclosed");
        let message = err.to_string();
        assert!(message.starts_with("invalid redaction pattern #2 `(unclosed`"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn crate_error_is_transparent_over_pattern_errors() {
        let source = regex::Regex::new("[").unwrap_err();
        let inner = InvalidPatternError::new(0, "[", source);
        let expected = inner.to_string();
        let err = Error::from(inner);
        assert_eq!(err.to_string(), expected);
    }
}
