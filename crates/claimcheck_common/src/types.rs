//! Core record types shared by the loader, comparator and run.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;

/// A loosely typed value as it arrived from a claims or truth source.
///
/// Numbers keep their source spelling so that `1` and `1.0` stay
/// distinguishable during boolean interpretation.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RawValue {
    #[default]
    Null,
    Bool(bool),
    Number(serde_json::Number),
    Text(String),
}

impl RawValue {
    pub fn text(s: impl Into<String>) -> Self {
        RawValue::Text(s.into())
    }

    /// The string this value reads as before any interpretation.
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            RawValue::Null => Cow::Borrowed(""),
            RawValue::Bool(true) => Cow::Borrowed("true"),
            RawValue::Bool(false) => Cow::Borrowed("false"),
            RawValue::Number(n) => Cow::Owned(n.to_string()),
            RawValue::Text(s) => Cow::Borrowed(s.as_str()),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, RawValue::Null)
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_text())
    }
}

impl From<serde_json::Value> for RawValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;
        match value {
            Value::Null => RawValue::Null,
            Value::Bool(b) => RawValue::Bool(b),
            Value::Number(n) => RawValue::Number(n),
            Value::String(s) => RawValue::Text(s),
            // Arrays become separator-joined text so they land in the list domain
            Value::Array(items) => RawValue::Text(
                items
                    .into_iter()
                    .map(|item| RawValue::from(item).to_string())
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
            Value::Object(map) => RawValue::Text(Value::Object(map).to_string()),
        }
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        RawValue::Text(s.to_string())
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        RawValue::Text(s)
    }
}

impl From<bool> for RawValue {
    fn from(b: bool) -> Self {
        RawValue::Bool(b)
    }
}

impl From<i64> for RawValue {
    fn from(n: i64) -> Self {
        RawValue::Number(n.into())
    }
}

impl From<f64> for RawValue {
    fn from(n: f64) -> Self {
        match serde_json::Number::from_f64(n) {
            Some(num) => RawValue::Number(num),
            None => RawValue::Text(n.to_string()),
        }
    }
}

impl Serialize for RawValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            RawValue::Null => serializer.serialize_unit(),
            RawValue::Bool(b) => serializer.serialize_bool(*b),
            RawValue::Number(n) => n.serialize(serializer),
            RawValue::Text(s) => serializer.serialize_str(s),
        }
    }
}

impl<'de> Deserialize<'de> for RawValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        serde_json::Value::deserialize(deserializer).map(RawValue::from)
    }
}

/// A single asserted (key, value) pair attributed to an example.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claim {
    pub example_id: String,
    pub key: String,
    pub claimed_value: RawValue,
}

impl Claim {
    pub fn new(
        example_id: impl Into<String>,
        key: impl Into<String>,
        claimed_value: impl Into<RawValue>,
    ) -> Self {
        Self {
            example_id: example_id.into(),
            key: key.into(),
            claimed_value: claimed_value.into(),
        }
    }
}

/// Authoritative values keyed by claim key. Later inserts win.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TruthTable {
    values: HashMap<String, RawValue>,
}

impl TruthTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<RawValue>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&RawValue> {
        self.values.get(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<RawValue>> FromIterator<(K, V)> for TruthTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = TruthTable::new();
        for (key, value) in iter {
            table.insert(key, value);
        }
        table
    }
}
