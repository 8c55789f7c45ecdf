//! Property tests for redaction invariants.
//!
//! Values are generated from a small vocabulary so that secrets appear often,
//! including inside longer words and next to each other.

use std::collections::BTreeMap;

use logredact::{Key, Record, Redactor, Value};
use proptest::prelude::*;

fn redactor() -> Redactor {
    Redactor::new(["supersecret", "anothersecret"], "***").unwrap()
}

// Strategy: text built from secrets, fragments of secrets, and filler
fn arb_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just("supersecret"),
            Just("anothersecret"),
            Just("super"),
            Just("secret"),
            Just("another"),
            Just(" "),
            Just("x"),
            Just("***"),
        ],
        0..6,
    )
    .prop_map(|parts| parts.concat())
}

fn arb_key() -> impl Strategy<Value = Key> {
    prop_oneof![
        arb_text().prop_map(Key::String),
        any::<i64>().prop_map(Key::Int),
        any::<bool>().prop_map(Key::Bool),
    ]
}

fn arb_leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        arb_text().prop_map(Value::String),
        any::<i64>().prop_map(Value::from),
        any::<u64>().prop_map(Value::from),
        any::<bool>().prop_map(Value::from),
        any::<char>().prop_map(Value::from),
        prop::collection::vec(any::<u8>(), 0..8)
            .prop_map(|bytes| Value::Opaque(logredact::Opaque::Bytes(bytes))),
        Just(Value::absent()),
    ]
}

// Strategy: arbitrarily nested values of every shape
fn arb_value() -> impl Strategy<Value = Value> {
    arb_leaf().prop_recursive(4, 64, 4, |inner| {
        prop_oneof![
            inner.clone().prop_map(Value::present),
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Sequence),
            prop::collection::btree_map(arb_key(), inner.clone(), 0..4)
                .prop_map(Value::Mapping),
            prop::collection::vec(("[a-z]{1,6}", inner.clone()), 0..4)
                .prop_map(|fields| Value::from(Record::named("Generated", fields))),
            prop::collection::vec(inner, 0..3)
                .prop_map(|fields| Value::from(Record::positional("Tuple", fields))),
        ]
    })
}

fn contains_secret(value: &Value) -> bool {
    match value {
        Value::String(text) => text.contains("supersecret") || text.contains("anothersecret"),
        Value::Optional(inner) => inner.as_deref().is_some_and(contains_secret),
        Value::Record(record) => (0..record.len())
            .filter_map(|index| record.get_index(index))
            .any(contains_secret),
        Value::Sequence(items) => items.iter().any(contains_secret),
        Value::Mapping(map) => map.values().any(contains_secret),
        Value::Opaque(_) => false,
    }
}

proptest! {
    /// Property: redacting twice gives the same result as redacting once.
    #[test]
    fn proptest_redaction_is_idempotent(value in arb_value()) {
        let redactor = redactor();
        let once = redactor.redact_field(&value);
        let twice = redactor.redact_field(&once);
        prop_assert_eq!(once, twice);
    }

    /// Property: only string contents change.
    #[test]
    fn proptest_shape_is_preserved(value in arb_value()) {
        let redacted = redactor().redact_field(&value);
        prop_assert!(value.same_shape(&redacted));
        prop_assert_eq!(value.shape(), redacted.shape());
    }

    /// Property: no secret survives in a string leaf.
    #[test]
    fn proptest_no_secret_survives(value in arb_value()) {
        let redacted = redactor().redact_field(&value);
        prop_assert!(!contains_secret(&redacted));
    }

    /// Property: the input is unchanged, whatever happens to the output.
    #[test]
    fn proptest_output_does_not_alias_input(value in arb_value()) {
        let snapshot = value.clone();
        let mut redacted = redactor().redact_field(&value);
        match &mut redacted {
            Value::Sequence(items) => items.clear(),
            Value::Mapping(map) => map.clear(),
            Value::String(text) => text.push_str("mutated"),
            other => *other = Value::absent(),
        }
        prop_assert_eq!(value, snapshot);
    }

    /// Property: typed and dynamic traversal agree on the same data.
    #[test]
    fn proptest_typed_and_dynamic_agree(
        entries in prop::collection::btree_map("[a-z]{1,4}", prop::option::of(arb_text()), 0..5)
    ) {
        let redactor = redactor();
        let typed: BTreeMap<String, Option<String>> = redactor.redact(&entries);
        let dynamic = redactor.redact_field(&Value::from(entries));
        prop_assert_eq!(Value::from(typed), dynamic);
    }

    /// Property: message redaction is the pattern set applied to the text.
    #[test]
    fn proptest_message_matches_field_redaction(text in arb_text()) {
        let redactor = redactor();
        prop_assert_eq!(
            Value::from(redactor.redact_message(&text)),
            redactor.redact_field(&Value::from(text.as_str()))
        );
    }
}
