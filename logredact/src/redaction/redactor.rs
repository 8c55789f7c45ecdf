//! The redaction entrypoint.

use super::{traverse::Redact, Event, RedactionMapper};
use crate::{config::RedactorConfig, error::InvalidPatternError, pattern::PatternSet, value::Value};

/// Produces redacted deep copies of messages, field values and typed data.
///
/// A `Redactor` owns its [`PatternSet`] and never mutates it, so a single
/// instance can be shared across threads behind an `Arc`.
///
/// ```
/// use logredact::{Redactor, Value};
///
/// let redactor = Redactor::new(["secret"], "***").unwrap();
/// assert_eq!(redactor.redact_message("my secret"), "my ***");
///
/// let field = Value::from(vec!["a secret", "plain"]);
/// assert_eq!(redactor.redact_field(&field), Value::from(vec!["a ***", "plain"]));
/// ```
#[derive(Clone, Debug)]
pub struct Redactor {
    patterns: PatternSet,
}

impl Redactor {
    /// Compiles `patterns` and builds a redactor around them.
    pub fn new<I, S>(
        patterns: I,
        replacement: impl Into<String>,
    ) -> Result<Self, InvalidPatternError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        PatternSet::new(patterns, replacement).map(Self::from_pattern_set)
    }

    /// Wraps an already compiled pattern set.
    pub const fn from_pattern_set(patterns: PatternSet) -> Self {
        Self { patterns }
    }

    /// Builds a redactor from a deserialized configuration.
    pub fn from_config(config: &RedactorConfig) -> Result<Self, InvalidPatternError> {
        Self::new(&config.patterns, config.replacement.as_str())
    }

    /// The patterns this redactor applies.
    pub const fn patterns(&self) -> &PatternSet {
        &self.patterns
    }

    /// Redacts a free-form message.
    #[must_use]
    pub fn redact_message(&self, text: &str) -> String {
        self.patterns.apply(text)
    }

    /// Returns a redacted deep copy of a field value.
    ///
    /// The copy has the same shape as `value` at every position; only the
    /// contents of string leaves differ. Mapping keys, record names and field
    /// names are copied verbatim.
    #[must_use]
    pub fn redact_field(&self, value: &Value) -> Value {
        value.redact_with(self)
    }

    /// Returns a redacted deep copy of a typed value.
    #[must_use]
    pub fn redact<T: Redact>(&self, value: &T) -> T {
        value.redact_with(self)
    }

    /// Redacts an event in place: the message first, then every field value.
    pub fn redact_event(&self, event: &mut Event) {
        event.message = self.redact_message(&event.message);
        for value in event.fields.values_mut() {
            *value = self.redact_field(value);
        }
    }
}

impl RedactionMapper for Redactor {
    fn map_str(&self, value: &str) -> String {
        self.patterns.apply(value)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::Redactor;
    use crate::{Event, Key, Record, Value};

    fn secrets() -> Redactor {
        Redactor::new(["supersecret", "anothersecret"], "***").unwrap()
    }

    #[test]
    fn message_redaction_matches_pattern_set() {
        let redactor = secrets();
        let text = "This log entry contains a supersecret token.";
        assert_eq!(
            redactor.redact_message(text),
            redactor.patterns().apply(text)
        );
        assert_eq!(
            redactor.redact_message(text),
            "This log entry contains a *** token."
        );
    }

    #[test]
    fn nested_record_fields_are_redacted() {
        let redactor = secrets();
        let inner = Record::named(
            "Inner",
            vec![
                ("value".into(), "This is an anothersecret value.".into()),
                ("other".into(), "supersecret".into()),
            ],
        );
        let outer = Value::from(Record::named(
            "Outer",
            vec![
                ("message".into(), "This is a supersecret message.".into()),
                ("inner".into(), inner.into()),
            ],
        ));

        let redacted = redactor.redact_field(&outer);
        let record = redacted.as_record().unwrap();
        assert_eq!(record.name(), "Outer");
        assert_eq!(record.get("message"), Some(&Value::from("This is a *** message.")));
        let inner = record.get("inner").and_then(Value::as_record).unwrap();
        assert_eq!(inner.get("value"), Some(&Value::from("This is an *** value.")));
        assert_eq!(inner.get("other"), Some(&Value::from("***")));
    }

    #[test]
    fn mapping_keys_are_kept() {
        let redactor = secrets();
        let mut map = BTreeMap::new();
        map.insert(Key::from("supersecret"), Value::from("anothersecret"));
        let redacted = redactor.redact_field(&Value::Mapping(map));
        let mapping = redacted.as_mapping().unwrap();
        assert_eq!(mapping.len(), 1);
        assert_eq!(mapping[&Key::from("supersecret")], Value::from("***"));
    }

    #[test]
    fn absent_optional_stays_absent() {
        let redactor = secrets();
        assert_eq!(redactor.redact_field(&Value::absent()), Value::absent());
    }

    #[test]
    fn typed_values_use_the_same_patterns() {
        let redactor = secrets();
        let values = vec![Some("supersecret".to_string()), None];
        assert_eq!(redactor.redact(&values), vec![Some("***".to_string()), None]);
    }

    #[test]
    fn events_are_redacted_in_place() {
        let redactor = secrets();
        let mut event = Event::new("login with supersecret")
            .with_field("password", "supersecret")
            .with_field("attempts", 3u8);
        redactor.redact_event(&mut event);

        assert_eq!(event.message(), "login with ***");
        assert_eq!(event.field("password"), Some(&Value::from("***")));
        assert_eq!(event.field("attempts"), Some(&Value::from(3u8)));
    }

    #[test]
    fn redactor_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Redactor>();
    }
}
