//! Property values carried on nodes.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize, Serializer};

/// Ordered property bag. Insertion order is the serialization and diff order.
pub type Props = IndexMap<String, PropValue>;

/// Closed set of values a node property may hold.
///
/// JSON has no NaN or infinity. Converting a non-finite float yields its
/// [`non_finite_label`] as text, and a non-finite `Float` built directly
/// encodes as that same text, so every value has a decodable encoding.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropValue {
    Bool(bool),
    Int(i64),
    #[serde(serialize_with = "serialize_float")]
    Float(f64),
    Text(String),
    Record(IndexMap<String, PropValue>),
}

impl PropValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            PropValue::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            PropValue::Float(value) => Some(*value),
            PropValue::Int(value) => Some(*value as f64),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropValue::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&IndexMap<String, PropValue>> {
        match self {
            PropValue::Record(record) => Some(record),
            _ => None,
        }
    }
}

// Floats compare by bit pattern as well as by value so that a tree always
// equals itself, NaN included.
impl PartialEq for PropValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (PropValue::Bool(a), PropValue::Bool(b)) => a == b,
            (PropValue::Int(a), PropValue::Int(b)) => a == b,
            (PropValue::Float(a), PropValue::Float(b)) => a == b || a.to_bits() == b.to_bits(),
            (PropValue::Text(a), PropValue::Text(b)) => a == b,
            (PropValue::Record(a), PropValue::Record(b)) => {
                a.len() == b.len() && a.iter().all(|(key, value)| b.get(key) == Some(value))
            }
            _ => false,
        }
    }
}

impl From<bool> for PropValue {
    fn from(value: bool) -> Self {
        PropValue::Bool(value)
    }
}

impl From<i32> for PropValue {
    fn from(value: i32) -> Self {
        PropValue::Int(i64::from(value))
    }
}

impl From<u32> for PropValue {
    fn from(value: u32) -> Self {
        PropValue::Int(i64::from(value))
    }
}

impl From<i64> for PropValue {
    fn from(value: i64) -> Self {
        PropValue::Int(value)
    }
}

impl From<f32> for PropValue {
    fn from(value: f32) -> Self {
        PropValue::from(f64::from(value))
    }
}

impl From<f64> for PropValue {
    fn from(value: f64) -> Self {
        match non_finite_label(value) {
            Some(label) => PropValue::Text(label.to_owned()),
            None => PropValue::Float(value),
        }
    }
}

/// `"NaN"`, `"inf"` or `"-inf"` for non-finite floats, `None` otherwise.
pub fn non_finite_label(value: f64) -> Option<&'static str> {
    if value.is_nan() {
        Some("NaN")
    } else if value == f64::INFINITY {
        Some("inf")
    } else if value == f64::NEG_INFINITY {
        Some("-inf")
    } else {
        None
    }
}

fn serialize_float<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    match non_finite_label(*value) {
        Some(label) => serializer.serialize_str(label),
        None => serializer.serialize_f64(*value),
    }
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        PropValue::Text(value.to_owned())
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        PropValue::Text(value)
    }
}

impl From<IndexMap<String, PropValue>> for PropValue {
    fn from(value: IndexMap<String, PropValue>) -> Self {
        PropValue::Record(value)
    }
}
