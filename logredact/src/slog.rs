//! `slog` integration.
//!
//! [`RedactDrain`] wraps another drain and redacts every record on its way
//! through: the formatted message, each record key-value pair, and each
//! logger-level key-value pair. Keys are kept as they are. Records are never
//! filtered; whatever the inner drain returns is returned unchanged.
//!
//! Captured values keep their shape where `slog` exposes it. Primitives become
//! opaque values, strings stay strings, and nested values emitted through
//! `slog`'s `nested-values` support arrive as `serde_json::Value` and are
//! converted from there. Anything `slog` only exposes as formatting arguments
//! (128-bit integers, errors, `Display` values) is captured as its formatted
//! string.
//!
//! ```ignore
//! let redactor = Redactor::new(["supersecret"], "***")?;
//! let drain = RedactDrain::new(drain, redactor).fuse();
//! let logger = slog::Logger::root(drain, o!());
//! ```

use std::fmt;

use slog::{
    BorrowedKV, Drain, Key, Level, OwnedKV, OwnedKVList, Record, RecordStatic, Serializer,
    Value as SlogValue, KV,
};

use crate::{
    value::{Opaque, Value},
    Redactor,
};

/// Key under which a failure to capture key-value pairs is reported.
pub const CAPTURE_ERROR_KEY: &str = "redaction_error";

/// A drain that redacts records before passing them to `drain`.
#[derive(Debug)]
pub struct RedactDrain<D> {
    drain: D,
    redactor: Redactor,
}

impl<D> RedactDrain<D> {
    /// Wraps `drain`, redacting every record with `redactor`.
    pub const fn new(drain: D, redactor: Redactor) -> Self {
        Self { drain, redactor }
    }

    /// The redactor applied to each record.
    pub const fn redactor(&self) -> &Redactor {
        &self.redactor
    }

    /// Unwraps the inner drain.
    pub fn into_inner(self) -> D {
        self.drain
    }

    fn redacted_pairs<K: KV + ?Sized>(&self, record: &Record<'_>, kv: &K) -> RedactedKv {
        let mut collector = Collector::default();
        if let Err(err) = kv.serialize(record, &mut collector) {
            collector.push(CAPTURE_ERROR_KEY, Value::String(err.to_string()));
        }
        RedactedKv(
            collector
                .fields
                .into_iter()
                .map(|(key, value)| (key, self.redactor.redact_field(&value)))
                .collect(),
        )
    }
}

impl<D: Drain> Drain for RedactDrain<D> {
    type Ok = D::Ok;
    type Err = D::Err;

    fn log(&self, record: &Record<'_>, values: &OwnedKVList) -> Result<Self::Ok, Self::Err> {
        let message = self.redactor.redact_message(&record.msg().to_string());
        let record_kv = self.redacted_pairs(record, &record.kv());
        let logger_kv = OwnedKVList::from(OwnedKV(self.redacted_pairs(record, values)));

        let rstatic = RecordStatic {
            location: record.location(),
            tag: record.tag(),
            level: record.level(),
        };
        self.drain.log(
            &Record::new(&rstatic, &format_args!("{message}"), BorrowedKV(&record_kv)),
            &logger_kv,
        )
    }

    fn is_enabled(&self, level: Level) -> bool {
        self.drain.is_enabled(level)
    }
}

/// Redacted key-value pairs, emitted in capture order.
struct RedactedKv(Vec<(Key, Value)>);

impl KV for RedactedKv {
    fn serialize(&self, record: &Record<'_>, serializer: &mut dyn Serializer) -> slog::Result {
        for (key, value) in &self.0 {
            SlogValue::serialize(value, record, *key, serializer)?;
        }
        Ok(())
    }
}

/// Captures emitted key-value pairs as [`Value`]s.
#[derive(Default)]
struct Collector {
    fields: Vec<(Key, Value)>,
}

impl Collector {
    fn push(&mut self, key: Key, value: Value) {
        self.fields.push((key, value));
    }

    fn emit(&mut self, key: Key, value: impl Into<Value>) -> slog::Result {
        self.push(key, value.into());
        Ok(())
    }
}

macro_rules! emit_into_value {
    ($($method:ident: $ty:ty),* $(,)?) => {
        $(
            fn $method(&mut self, key: Key, val: $ty) -> slog::Result {
                self.emit(key, val)
            }
        )*
    };
}

impl Serializer for Collector {
    fn emit_arguments(&mut self, key: Key, val: &fmt::Arguments<'_>) -> slog::Result {
        self.emit(key, val.to_string())
    }

    fn emit_str(&mut self, key: Key, val: &str) -> slog::Result {
        self.emit(key, val)
    }

    fn emit_unit(&mut self, key: Key) -> slog::Result {
        self.emit(key, ())
    }

    fn emit_none(&mut self, key: Key) -> slog::Result {
        self.emit(key, Value::absent())
    }

    emit_into_value!(
        emit_bool: bool,
        emit_char: char,
        emit_u8: u8,
        emit_u16: u16,
        emit_u32: u32,
        emit_u64: u64,
        emit_usize: usize,
        emit_i8: i8,
        emit_i16: i16,
        emit_i32: i32,
        emit_i64: i64,
        emit_isize: isize,
        emit_f32: f32,
        emit_f64: f64,
    );

    fn emit_serde(&mut self, key: Key, value: &dyn slog::SerdeValue) -> slog::Result {
        match serde_json::to_value(value.as_serde()) {
            Ok(json) => self.emit(key, json),
            Err(_) => self.emit(key, "Failed to serialize value"),
        }
    }
}

impl SlogValue for Value {
    fn serialize(
        &self,
        record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> slog::Result {
        match self {
            Self::String(value) => serializer.emit_str(key, value),
            Self::Optional(None) => serializer.emit_none(key),
            Self::Optional(Some(inner)) => SlogValue::serialize(&**inner, record, key, serializer),
            Self::Opaque(Opaque::Unit) => serializer.emit_unit(key),
            Self::Opaque(Opaque::Bool(value)) => serializer.emit_bool(key, *value),
            Self::Opaque(Opaque::Int(value)) => serializer.emit_i64(key, *value),
            Self::Opaque(Opaque::UInt(value)) => serializer.emit_u64(key, *value),
            Self::Opaque(Opaque::Float(value)) => serializer.emit_f64(key, *value),
            Self::Opaque(Opaque::Char(value)) => serializer.emit_char(key, *value),
            Self::Opaque(Opaque::Bytes(_))
            | Self::Record(_)
            | Self::Sequence(_)
            | Self::Mapping(_) => {
                SlogValue::serialize(&slog::Serde(self.clone()), record, key, serializer)
            }
        }
    }
}
