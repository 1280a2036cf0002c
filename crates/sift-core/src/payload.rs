//! Payload model: the closed set of shapes the upstream analysis pipeline
//! can deliver.
//!
//! The upstream producer gives no guarantee about shape, so every consumer
//! matches exhaustively on [`RawPayload`] instead of probing types at
//! runtime. Records keep the insertion order of their keys because the
//! flattener joins values in mapping iteration order.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

// ---------------------------------------------------------------------------
// RawPayload
// ---------------------------------------------------------------------------

/// An untyped analysis result as received from the upstream pipeline.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RawPayload {
    #[default]
    Null,
    Scalar(Scalar),
    Text(String),
    List(Vec<RawPayload>),
    Record(Record),
}

impl RawPayload {
    /// Whether the value is "falsy": null, `false`, numeric zero or the
    /// empty string. Falsy values flatten to nothing.
    pub fn is_falsy(&self) -> bool {
        match self {
            RawPayload::Null => true,
            RawPayload::Scalar(s) => s.is_falsy(),
            RawPayload::Text(t) => t.is_empty(),
            RawPayload::List(_) | RawPayload::Record(_) => false,
        }
    }

    pub fn as_record(&self) -> Option<&Record> {
        match self {
            RawPayload::Record(r) => Some(r),
            _ => None,
        }
    }

    /// Compact JSON text of the value.
    pub fn to_json_string(&self) -> String {
        Value::from(self).to_string()
    }
}

impl From<Value> for RawPayload {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => RawPayload::Null,
            Value::Bool(b) => RawPayload::Scalar(Scalar::Bool(b)),
            Value::Number(n) => RawPayload::Scalar(Scalar::Number(n)),
            Value::String(s) => RawPayload::Text(s),
            Value::Array(items) => RawPayload::List(items.into_iter().map(Into::into).collect()),
            Value::Object(map) => RawPayload::Record(Record {
                entries: map.into_iter().map(|(k, v)| (k, v.into())).collect(),
            }),
        }
    }
}

impl From<&RawPayload> for Value {
    fn from(payload: &RawPayload) -> Self {
        match payload {
            RawPayload::Null => Value::Null,
            RawPayload::Scalar(Scalar::Bool(b)) => Value::Bool(*b),
            RawPayload::Scalar(Scalar::Number(n)) => Value::Number(n.clone()),
            RawPayload::Text(t) => Value::String(t.clone()),
            RawPayload::List(items) => Value::Array(items.iter().map(Value::from).collect()),
            RawPayload::Record(r) => Value::from(r),
        }
    }
}

impl From<&str> for RawPayload {
    fn from(s: &str) -> Self {
        RawPayload::Text(s.to_string())
    }
}

impl From<String> for RawPayload {
    fn from(s: String) -> Self {
        RawPayload::Text(s)
    }
}

impl From<bool> for RawPayload {
    fn from(b: bool) -> Self {
        RawPayload::Scalar(Scalar::Bool(b))
    }
}

impl From<i64> for RawPayload {
    fn from(n: i64) -> Self {
        RawPayload::Scalar(Scalar::Number(n.into()))
    }
}

impl From<i32> for RawPayload {
    fn from(n: i32) -> Self {
        RawPayload::from(i64::from(n))
    }
}

/// Non-finite floats have no JSON form and become [`RawPayload::Null`].
impl From<f64> for RawPayload {
    fn from(f: f64) -> Self {
        serde_json::Number::from_f64(f)
            .map(|n| RawPayload::Scalar(Scalar::Number(n)))
            .unwrap_or(RawPayload::Null)
    }
}

impl From<Vec<RawPayload>> for RawPayload {
    fn from(items: Vec<RawPayload>) -> Self {
        RawPayload::List(items)
    }
}

impl From<Record> for RawPayload {
    fn from(record: Record) -> Self {
        RawPayload::Record(record)
    }
}

impl Serialize for RawPayload {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Value::from(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for RawPayload {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Into::into)
    }
}

// ---------------------------------------------------------------------------
// Scalar
// ---------------------------------------------------------------------------

/// A leaf value that is neither text nor a container.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Bool(bool),
    Number(serde_json::Number),
}

impl Scalar {
    pub fn is_falsy(&self) -> bool {
        match self {
            Scalar::Bool(b) => !b,
            Scalar::Number(n) => n.as_f64() == Some(0.0),
        }
    }

    /// Numeric value, if this is a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Scalar::Number(n) => n.as_f64(),
            Scalar::Bool(_) => None,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(b) => write!(f, "{b}"),
            Scalar::Number(n) => write!(f, "{n}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Record
// ---------------------------------------------------------------------------

/// A keyed mapping that preserves insertion order.
///
/// Inserting an existing key replaces the value in place, keeping the key's
/// original position.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    entries: Vec<(String, RawPayload)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<RawPayload>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<RawPayload>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&RawPayload> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RawPayload)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn values(&self) -> impl Iterator<Item = &RawPayload> {
        self.entries.iter().map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<RawPayload>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (k, v) in iter {
            record.insert(k, v);
        }
        record
    }
}

impl From<&Record> for Value {
    fn from(record: &Record) -> Self {
        Value::Object(
            record
                .iter()
                .map(|(k, v)| (k.to_string(), Value::from(v)))
                .collect(),
        )
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Value::from(self).serialize(serializer)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
