use std::collections::BTreeMap;

use crate::value::Value;

/// A log event independent of any logging framework: a message plus a bag of
/// named field values.
///
/// Hooks for frameworks other than `slog` can collect into an `Event`, pass it
/// to [`crate::Redactor::redact_event`] and emit the result.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Event {
    pub(crate) message: String,
    pub(crate) fields: BTreeMap<String, Value>,
}

impl Event {
    /// An event with `message` and no fields.
    ///
    /// ```
    /// use logredact::{Event, Value};
    ///
    /// let event = Event::new("login").with_field("user", "alice");
    /// assert_eq!(event.message(), "login");
    /// assert_eq!(event.field("user"), Some(&Value::from("alice")));
    /// assert_eq!(event.fields().len(), 1);
    /// ```
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Adds or replaces a field.
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Adds or replaces a field, returning the previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.fields.insert(name.into(), value.into())
    }

    /// The free-form message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Looks up a field by name.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// All fields, ordered by name.
    pub const fn fields(&self) -> &BTreeMap<String, Value> {
        &self.fields
    }
}
