//! Serializable redactor configuration.
//!
//! ```
//! # #[cfg(feature = "json")]
//! # {
//! use logredact::RedactorConfig;
//!
//! let config = RedactorConfig::from_json(r#"{ "patterns": ["token=\\w+"] }"#).unwrap();
//! let redactor = config.build().unwrap();
//! assert_eq!(redactor.redact_message("token=abc ok"), "*** ok");
//! # }
//! ```

use serde::{Deserialize, Serialize};

use crate::{error::InvalidPatternError, Redactor};

/// Replacement token used when a configuration does not name one.
pub const DEFAULT_REPLACEMENT: &str = "***";

/// Pattern sources and replacement token, as read from a settings file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RedactorConfig {
    /// Pattern sources, applied in order.
    #[serde(default)]
    pub patterns: Vec<String>,
    /// Text written in place of every match. Defaults to
    /// [`DEFAULT_REPLACEMENT`].
    #[serde(default = "default_replacement")]
    pub replacement: String,
}

fn default_replacement() -> String {
    DEFAULT_REPLACEMENT.to_owned()
}

impl Default for RedactorConfig {
    fn default() -> Self {
        Self {
            patterns: Vec::new(),
            replacement: default_replacement(),
        }
    }
}

impl RedactorConfig {
    /// Config for `patterns` with the default replacement token.
    ///
    /// ```
    /// use logredact::{RedactorConfig, DEFAULT_REPLACEMENT};
    ///
    /// let config = RedactorConfig::new(["supersecret"]);
    /// assert_eq!(config.replacement, DEFAULT_REPLACEMENT);
    /// let redactor = config.build().unwrap();
    /// assert_eq!(redactor.redact_message("a supersecret"), "a ***");
    /// ```
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            patterns: patterns.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_replacement(mut self, replacement: impl Into<String>) -> Self {
        self.replacement = replacement.into();
        self
    }

    /// Parses a JSON document.
    #[cfg(feature = "json")]
    pub fn from_json(document: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(document)?)
    }

    /// Compiles the configured patterns.
    pub fn build(&self) -> Result<Redactor, InvalidPatternError> {
        Redactor::from_config(self)
    }
}
