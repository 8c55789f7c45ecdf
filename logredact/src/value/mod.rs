//! Dynamically shaped values.
//!
//! [`Value`] is the closed set of shapes a log field can take when its static
//! type is unknown: a string, an optional, a record, a sequence, a mapping,
//! or something opaque that carries no string content.
//!
//! Values are owned trees. Every node is held by `Box`, `Vec` or `BTreeMap`,
//! so a value cannot refer back to itself and traversal always terminates.

mod convert;
mod ser;

use std::{collections::BTreeMap, fmt};

/// A dynamically shaped value.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// String content; the only shape patterns are applied to.
    String(String),
    /// An absent value or a present value wrapping another one.
    Optional(Option<Box<Value>>),
    /// A composite with a type name and named or positional fields.
    Record(Record),
    /// An ordered sequence.
    Sequence(Vec<Value>),
    /// A mapping from comparable keys to values. Keys are never redacted.
    Mapping(BTreeMap<Key, Value>),
    /// Anything without string content: numbers, booleans, bytes.
    Opaque(Opaque),
}

/// The structural kind of a [`Value`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    String,
    Optional,
    Record,
    Sequence,
    Mapping,
    Opaque,
}

impl Value {
    /// An absent optional.
    pub const fn absent() -> Self {
        Self::Optional(None)
    }

    /// A present optional wrapping `value`.
    pub fn present(value: impl Into<Value>) -> Self {
        Self::Optional(Some(Box::new(value.into())))
    }

    /// The structural kind of this value.
    pub const fn shape(&self) -> Shape {
        match self {
            Self::String(_) => Shape::String,
            Self::Optional(_) => Shape::Optional,
            Self::Record(_) => Shape::Record,
            Self::Sequence(_) => Shape::Sequence,
            Self::Mapping(_) => Shape::Mapping,
            Self::Opaque(_) => Shape::Opaque,
        }
    }

    /// Returns the string content, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the record, if this is a record.
    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Self::Record(record) => Some(record),
            _ => None,
        }
    }

    /// Returns the elements, if this is a sequence.
    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Self::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the entries, if this is a mapping.
    pub fn as_mapping(&self) -> Option<&BTreeMap<Key, Value>> {
        match self {
            Self::Mapping(map) => Some(map),
            _ => None,
        }
    }

    /// Returns true for an absent optional.
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Optional(None))
    }

    /// Compares the structure of two values, ignoring string contents.
    ///
    /// Two values have the same shape when they are the same variant at every
    /// position, sequences have the same length, mappings have the same key
    /// set, records have the same name and field names, and opaque values are
    /// equal.
    pub fn same_shape(&self, other: &Value) -> bool {
        match (self, other) {
            (Self::String(_), Self::String(_)) => true,
            (Self::Optional(None), Self::Optional(None)) => true,
            (Self::Optional(Some(left)), Self::Optional(Some(right))) => left.same_shape(right),
            (Self::Record(left), Self::Record(right)) => left.same_shape(right),
            (Self::Sequence(left), Self::Sequence(right)) => {
                left.len() == right.len()
                    && left.iter().zip(right).all(|(l, r)| l.same_shape(r))
            }
            (Self::Mapping(left), Self::Mapping(right)) => {
                left.len() == right.len()
                    && left
                        .iter()
                        .zip(right)
                        .all(|((lk, lv), (rk, rv))| lk == rk && lv.same_shape(rv))
            }
            (Self::Opaque(left), Self::Opaque(right)) => left == right,
            _ => false,
        }
    }
}

/// A composite value with a type name and fields.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    name: String,
    fields: Fields,
}

/// The fields of a [`Record`].
#[derive(Clone, Debug, PartialEq)]
pub enum Fields {
    /// Fields with names, in declaration order.
    Named(Vec<(String, Value)>),
    /// Fields addressed by position.
    Positional(Vec<Value>),
    /// No fields.
    Unit,
}

impl Record {
    /// Creates a record from its parts.
    pub fn new(name: impl Into<String>, fields: Fields) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    /// Creates a record with named fields.
    pub fn named(name: impl Into<String>, fields: Vec<(String, Value)>) -> Self {
        Self::new(name, Fields::Named(fields))
    }

    /// Creates a record with positional fields.
    pub fn positional(name: impl Into<String>, fields: Vec<Value>) -> Self {
        Self::new(name, Fields::Positional(fields))
    }

    /// Creates a record without fields.
    pub fn unit(name: impl Into<String>) -> Self {
        Self::new(name, Fields::Unit)
    }

    /// The record's type name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The record's fields.
    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    /// Looks up a named field.
    pub fn get(&self, field: &str) -> Option<&Value> {
        match &self.fields {
            Fields::Named(fields) => fields
                .iter()
                .find_map(|(name, value)| (name == field).then_some(value)),
            Fields::Positional(_) | Fields::Unit => None,
        }
    }

    /// Looks up a field by position; works for named fields too.
    pub fn get_index(&self, index: usize) -> Option<&Value> {
        match &self.fields {
            Fields::Named(fields) => fields.get(index).map(|(_, value)| value),
            Fields::Positional(fields) => fields.get(index),
            Fields::Unit => None,
        }
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        match &self.fields {
            Fields::Named(fields) => fields.len(),
            Fields::Positional(fields) => fields.len(),
            Fields::Unit => 0,
        }
    }

    /// True for unit records and records without fields.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn same_shape(&self, other: &Record) -> bool {
        if self.name != other.name {
            return false;
        }
        match (&self.fields, &other.fields) {
            (Fields::Named(left), Fields::Named(right)) => {
                left.len() == right.len()
                    && left
                        .iter()
                        .zip(right)
                        .all(|((ln, lv), (rn, rv))| ln == rn && lv.same_shape(rv))
            }
            (Fields::Positional(left), Fields::Positional(right)) => {
                left.len() == right.len()
                    && left.iter().zip(right).all(|(l, r)| l.same_shape(r))
            }
            (Fields::Unit, Fields::Unit) => true,
            _ => false,
        }
    }
}

/// A mapping key. Keys are compared and copied, never redacted.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Key {
    Bool(bool),
    Int(i64),
    UInt(u64),
    Char(char),
    String(String),
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(value) => write!(f, "{value}"),
            Self::Int(value) => write!(f, "{value}"),
            Self::UInt(value) => write!(f, "{value}"),
            Self::Char(value) => write!(f, "{value}"),
            Self::String(value) => f.write_str(value),
        }
    }
}

/// A value without string content. Passed through redaction unchanged.
#[derive(Clone, Debug, PartialEq)]
pub enum Opaque {
    Unit,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Char(char),
    Bytes(Vec<u8>),
}
