//! Conversions into [`Value`] and [`Key`].

use std::{
    borrow::Cow,
    collections::{BTreeMap, HashMap},
};

use super::{Key, Opaque, Record, Value};

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<Cow<'_, str>> for Value {
    fn from(value: Cow<'_, str>) -> Self {
        Self::String(value.into_owned())
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Self::Record(record)
    }
}

impl From<Opaque> for Value {
    fn from(opaque: Opaque) -> Self {
        Self::Opaque(opaque)
    }
}

impl<T> From<Option<T>> for Value
where
    T: Into<Value>,
{
    fn from(value: Option<T>) -> Self {
        Self::Optional(value.map(|inner| Box::new(inner.into())))
    }
}

impl<T> From<Vec<T>> for Value
where
    T: Into<Value>,
{
    fn from(items: Vec<T>) -> Self {
        Self::Sequence(items.into_iter().map(Into::into).collect())
    }
}

impl<K, V> From<BTreeMap<K, V>> for Value
where
    K: Into<Key>,
    V: Into<Value>,
{
    fn from(map: BTreeMap<K, V>) -> Self {
        Self::Mapping(map.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<K, V, S> From<HashMap<K, V, S>> for Value
where
    K: Into<Key>,
    V: Into<Value>,
{
    fn from(map: HashMap<K, V, S>) -> Self {
        Self::Mapping(map.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self::Sequence(iter.into_iter().collect())
    }
}

impl From<()> for Value {
    fn from((): ()) -> Self {
        Self::Opaque(Opaque::Unit)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Opaque(Opaque::Bool(value))
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        Self::Opaque(Opaque::Char(value))
    }
}

macro_rules! impl_from_signed {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Self::Opaque(Opaque::Int(i64::from(value)))
                }
            }

            impl From<$ty> for Key {
                fn from(value: $ty) -> Self {
                    Self::Int(i64::from(value))
                }
            }
        )*
    };
}

macro_rules! impl_from_unsigned {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Self::Opaque(Opaque::UInt(u64::from(value)))
                }
            }

            impl From<$ty> for Key {
                fn from(value: $ty) -> Self {
                    Self::UInt(u64::from(value))
                }
            }
        )*
    };
}

impl_from_signed!(i8, i16, i32, i64);
impl_from_unsigned!(u8, u16, u32, u64);

// Pointer-sized integers are at most 64 bits on every supported target.
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
impl From<isize> for Value {
    fn from(value: isize) -> Self {
        Self::Opaque(Opaque::Int(value as i64))
    }
}

#[allow(clippy::cast_possible_truncation)]
impl From<usize> for Value {
    fn from(value: usize) -> Self {
        Self::Opaque(Opaque::UInt(value as u64))
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Self::Opaque(Opaque::Float(f64::from(value)))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Opaque(Opaque::Float(value))
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<bool> for Key {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<char> for Key {
    fn from(value: char) -> Self {
        Self::Char(value)
    }
}

/// JSON documents map onto values shape for shape: objects become mappings
/// with string keys, `null` becomes an absent optional.
#[cfg(feature = "json")]
impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value as Json;

        match value {
            Json::Null => Self::Optional(None),
            Json::Bool(value) => Self::Opaque(Opaque::Bool(value)),
            Json::Number(number) => {
                if let Some(value) = number.as_u64() {
                    Self::Opaque(Opaque::UInt(value))
                } else if let Some(value) = number.as_i64() {
                    Self::Opaque(Opaque::Int(value))
                } else {
                    Self::Opaque(Opaque::Float(number.as_f64().unwrap_or(f64::NAN)))
                }
            }
            Json::String(value) => Self::String(value),
            Json::Array(items) => Self::Sequence(items.into_iter().map(Self::from).collect()),
            Json::Object(map) => Self::Mapping(
                map.into_iter()
                    .map(|(key, value)| (Key::String(key), Self::from(value)))
                    .collect(),
            ),
        }
    }
}
