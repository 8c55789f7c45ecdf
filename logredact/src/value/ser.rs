//! `serde` serialization for values.
//!
//! Records carry runtime names, so named records serialize as maps and
//! positional records as sequences. Unit records serialize as unit.

use serde::{ser::SerializeMap, Serialize, Serializer};

use super::{Fields, Key, Opaque, Record, Value};

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::String(value) => serializer.serialize_str(value),
            Self::Optional(None) => serializer.serialize_none(),
            Self::Optional(Some(inner)) => serializer.serialize_some(inner.as_ref()),
            Self::Record(record) => record.serialize(serializer),
            Self::Sequence(items) => serializer.collect_seq(items),
            Self::Mapping(map) => serializer.collect_map(map),
            Self::Opaque(opaque) => opaque.serialize(serializer),
        }
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.fields() {
            Fields::Named(fields) => {
                let mut map = serializer.serialize_map(Some(fields.len()))?;
                for (name, value) in fields {
                    map.serialize_entry(name, value)?;
                }
                map.end()
            }
            Fields::Positional(fields) => serializer.collect_seq(fields),
            Fields::Unit => serializer.serialize_unit(),
        }
    }
}

impl Serialize for Key {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Bool(value) => serializer.serialize_bool(*value),
            Self::Int(value) => serializer.serialize_i64(*value),
            Self::UInt(value) => serializer.serialize_u64(*value),
            Self::Char(value) => serializer.serialize_char(*value),
            Self::String(value) => serializer.serialize_str(value),
        }
    }
}

impl Serialize for Opaque {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Unit => serializer.serialize_unit(),
            Self::Bool(value) => serializer.serialize_bool(*value),
            Self::Int(value) => serializer.serialize_i64(*value),
            Self::UInt(value) => serializer.serialize_u64(*value),
            Self::Float(value) => serializer.serialize_f64(*value),
            Self::Char(value) => serializer.serialize_char(*value),
            Self::Bytes(value) => serializer.serialize_bytes(value),
        }
    }
}

#[cfg(all(test, feature = "json"))]
mod tests {
    use std::collections::BTreeMap;

    use serde_json::json;

    use crate::{Key, Opaque, Record, Value};

    #[test]
    fn named_records_serialize_as_objects() {
        let record = Record::named(
            "User",
            vec![
                ("name".into(), "alice".into()),
                ("tags".into(), vec!["a", "b"].into()),
                ("nickname".into(), Value::absent()),
            ],
        );
        let json = serde_json::to_value(Value::from(record)).unwrap();
        assert_eq!(
            json,
            json!({ "name": "alice", "tags": ["a", "b"], "nickname": null })
        );
    }

    #[test]
    fn positional_and_unit_records() {
        let pair = Record::positional("Pair", vec![1u8.into(), "x".into()]);
        assert_eq!(serde_json::to_value(&pair).unwrap(), json!([1, "x"]));
        assert_eq!(
            serde_json::to_value(Record::unit("Marker")).unwrap(),
            json!(null)
        );
    }

    #[test]
    fn mappings_and_opaque_values() {
        let mut map = BTreeMap::new();
        map.insert(Key::from("count"), Value::from(3u32));
        map.insert(Key::from("ratio"), Value::Opaque(Opaque::Float(0.25)));
        map.insert(Key::from("ok"), Value::present(true));
        assert_eq!(
            serde_json::to_value(Value::Mapping(map)).unwrap(),
            json!({ "count": 3, "ratio": 0.25, "ok": true })
        );
    }
}
