use crate::value::{Number, Value};
use serde::{Deserialize, Deserializer, Serialize, Serializer, ser::SerializeMap};
use std::collections::BTreeMap;

///
/// ValueWire
/// Serde decode shape for the natural JSON form of a value.
///

#[derive(Deserialize)]
#[serde(untagged)]
enum ValueWire {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<Self>),
    Object(BTreeMap<String, Self>),
}

impl ValueWire {
    // Non-finite numbers decode to null.
    fn into_value(self) -> Value {
        match self {
            Self::Null => Value::Null,
            Self::Bool(v) => Value::Bool(v),
            Self::Number(v) => Value::number(v),
            Self::String(v) => Value::String(v),
            Self::Array(items) => Value::Array(items.into_iter().map(Self::into_value).collect()),
            Self::Object(attrs) => Value::Object(
                attrs
                    .into_iter()
                    .map(|(key, value)| (key, value.into_value()))
                    .collect(),
            ),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        ValueWire::deserialize(deserializer).map(ValueWire::into_value)
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(v) => serializer.serialize_bool(*v),
            Self::Number(n) => match n.as_safe_integer() {
                Some(i) => serializer.serialize_i64(i),
                None => serializer.serialize_f64(n.get()),
            },
            Self::String(v) => serializer.serialize_str(v),
            Self::Array(items) => serializer.collect_seq(items),
            Self::Object(attrs) => {
                let mut map = serializer.serialize_map(Some(attrs.len()))?;
                for (key, value) in attrs {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}

///
/// serde_json interop
///

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(v) => Self::Bool(v),
            serde_json::Value::Number(n) => n.as_f64().map_or(Self::Null, Self::number),
            serde_json::Value::String(v) => Self::String(v),
            serde_json::Value::Array(items) => {
                Self::Array(items.into_iter().map(Self::from).collect())
            }
            serde_json::Value::Object(attrs) => Self::Object(
                attrs
                    .into_iter()
                    .map(|(key, value)| (key, Self::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<&Value> for serde_json::Value {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(v) => Self::Bool(*v),
            Value::Number(n) => json_number(*n),
            Value::String(v) => Self::String(v.clone()),
            Value::Array(items) => Self::Array(items.iter().map(Self::from).collect()),
            Value::Object(attrs) => Self::Object(
                attrs
                    .iter()
                    .map(|(key, value)| (key.clone(), Self::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        Self::from(&value)
    }
}

fn json_number(n: Number) -> serde_json::Value {
    match n.as_safe_integer() {
        Some(i) => serde_json::Value::from(i),
        None => serde_json::Number::from_f64(n.get()).map_or(serde_json::Value::Null, Into::into),
    }
}
