//! Policy-free type coercions.
//!
//! [`Evaluator`](crate::ops::Evaluator) wraps these with the configured
//! failure value where the policy matters.


use crate::{
    config::ErrorPolicy,
    value::{
        Number, Value, parse_numeric_prefix,
        render::{self, RenderMode},
    },
};

/// Truthiness.
///
/// False for null, `false`, `0`, the empty string, the empty array and the
/// empty object; true for everything else.
#[must_use]
pub fn to_bool(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.get() != 0.0,
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(attrs) => !attrs.is_empty(),
    }
}

/// Numeric coercion; `None` signals a coercion failure.
///
/// Strings parse their longest numeric prefix after leading whitespace.
/// A single-element array coerces its element; any other array length and
/// every object fail.
#[must_use]
pub fn to_number(value: &Value) -> Option<f64> {
    let mut current = value;
    while let Value::Array(items) = current {
        match items.as_slice() {
            [only] => current = only,
            _ => return None,
        }
    }

    match current {
        Value::Null | Value::Bool(false) => Some(Number::ZERO.get()),
        Value::Bool(true) => Some(Number::ONE.get()),
        Value::Number(n) => Some(n.get()),
        Value::String(s) => parse_numeric_prefix(s),
        Value::Array(_) | Value::Object(_) => None,
    }
}

/// String coercion.
///
/// Strict renders null as `"null"`, arrays as comma-joined element text and
/// objects as `"[object Object]"`. Permissive renders null as the empty
/// string and composites as canonical JSON-like literals.
#[must_use]
pub fn to_string(value: &Value, policy: ErrorPolicy) -> String {
    match (value, policy) {
        (Value::Null, ErrorPolicy::Permissive) => String::new(),
        (Value::String(s), _) => s.clone(),
        (_, ErrorPolicy::Strict) => render::render(value, RenderMode::Legacy),
        (_, ErrorPolicy::Permissive) => render::render(value, RenderMode::Canonical),
    }
}

/// List coercion.
///
/// Null becomes the empty list, scalars a one-element list, arrays
/// themselves and objects their attribute values in key order.
#[must_use]
pub fn to_list(value: &Value) -> Vec<Value> {
    match value {
        Value::Null => Vec::new(),
        Value::Bool(_) | Value::Number(_) | Value::String(_) => vec![value.clone()],
        Value::Array(items) => items.clone(),
        Value::Object(attrs) => attrs.values().cloned().collect(),
    }
}
