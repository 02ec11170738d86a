//! Conversions between [`Value`] and `serde_json::Value`.

use crate::{VNumber, VObject, Value};

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(number_from_json(&n)),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(entries) => Value::Object(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect::<VObject>(),
            ),
        }
    }
}

fn number_from_json(n: &serde_json::Number) -> VNumber {
    if let Some(v) = n.as_u64() {
        VNumber::from_u64(v)
    } else if let Some(v) = n.as_i64() {
        VNumber::from_i64(v)
    } else {
        VNumber::from_f64(n.as_f64().unwrap_or(f64::NAN))
    }
}

/// Non-finite floats have no JSON representation and become `null`.
impl From<Value> for serde_json::Value {
    fn from(v: Value) -> Self {
        match v {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(b),
            Value::Number(n) => number_to_json(n),
            Value::String(s) => serde_json::Value::String(s),
            Value::Array(items) => {
                serde_json::Value::Array(items.into_iter().map(serde_json::Value::from).collect())
            }
            Value::Object(entries) => serde_json::Value::Object(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, serde_json::Value::from(v)))
                    .collect(),
            ),
        }
    }
}

fn number_to_json(n: VNumber) -> serde_json::Value {
    if let Some(v) = n.to_u64().filter(|_| n.is_integer()) {
        serde_json::Value::from(v)
    } else if let Some(v) = n.to_i64().filter(|_| n.is_integer()) {
        serde_json::Value::from(v)
    } else {
        serde_json::Number::from_f64(n.to_f64_lossy())
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null)
    }
}
