mod access;
mod compare;
mod json;
mod kind;
mod number;
pub(crate) mod render;


use std::{
    cmp::Ordering,
    collections::BTreeMap,
    fmt,
    hash::{Hash, Hasher},
};

// re-exports
pub use compare::canonical_cmp;
pub use kind::ValueKind;
pub use number::Number;

pub(crate) use number::parse_numeric_prefix;

///
/// Value
///
/// Dynamically-typed query value.
///
/// Equality, ordering and hashing all follow the canonical comparator: an
/// object attribute holding null is indistinguishable from a missing one.
///

#[derive(Clone, Debug, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<Self>),
    Object(BTreeMap<String, Self>),
}

impl Value {
    ///
    /// CONSTRUCTION
    ///

    /// Number value; NaN and infinities collapse to null.
    #[must_use]
    pub fn number(n: f64) -> Self {
        Number::try_new(n).map_or(Self::Null, Self::Number)
    }

    #[must_use]
    pub fn string(s: impl Into<String>) -> Self {
        Self::String(s.into())
    }

    #[must_use]
    pub fn array<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Self>,
    {
        Self::Array(items.into_iter().map(Into::into).collect())
    }

    /// Object from `(key, value)` pairs; a repeated key keeps the last value.
    #[must_use]
    pub fn object<K, V, I>(attrs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Self>,
    {
        Self::Object(
            attrs
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }

    ///
    /// TYPES
    ///

    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        kind::kind_of(self)
    }

    #[must_use]
    pub const fn canonical_rank(&self) -> u8 {
        self.kind().rank()
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Self::Bool(_))
    }

    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Self::Number(_))
    }

    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Self::String(_))
    }

    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Self::Array(_))
    }

    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, Self::Object(_))
    }

    ///
    /// ACCESSORS
    ///

    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(n.get()),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_array(&self) -> Option<&[Self]> {
        match self {
            Self::Array(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_object(&self) -> Option<&BTreeMap<String, Self>> {
        match self {
            Self::Object(attrs) => Some(attrs),
            _ => None,
        }
    }
}

///
/// COMPARISON
///

impl Eq for Value {}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        canonical_cmp(self, other) == Ordering::Equal
    }
}

impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        canonical_cmp(self, other)
    }
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

///
/// HASHING
///

enum HashStep<'a> {
    Value(&'a Value),
    Key(&'a str),
}

impl Hash for Value {
    // Mirrors the comparator: null-valued attributes are skipped so that
    // `{a: null}` and `{}` hash alike.
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut stack = vec![HashStep::Value(self)];

        while let Some(step) = stack.pop() {
            let value = match step {
                HashStep::Key(key) => {
                    key.hash(state);
                    continue;
                }
                HashStep::Value(value) => value,
            };

            state.write_u8(value.canonical_rank());
            match value {
                Self::Null => {}
                Self::Bool(b) => b.hash(state),
                Self::Number(n) => n.hash(state),
                Self::String(s) => s.hash(state),
                Self::Array(items) => {
                    items.len().hash(state);
                    stack.extend(items.iter().rev().map(HashStep::Value));
                }
                Self::Object(attrs) => {
                    let present = attrs.iter().filter(|(_, v)| !v.is_null());
                    present.clone().count().hash(state);
                    for (key, item) in present.rev() {
                        stack.push(HashStep::Value(item));
                        stack.push(HashStep::Key(key));
                    }
                }
            }
        }
    }
}

///
/// DISPLAY
///

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render::render(self, render::RenderMode::Canonical))
    }
}

///
/// CONVERSIONS
///

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<Number> for Value {
    fn from(v: Number) -> Self {
        Self::Number(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::number(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Number(Number::from(v))
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Self::Number(Number::from(v))
    }
}

#[allow(clippy::cast_precision_loss)]
impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::number(v as f64)
    }
}

#[allow(clippy::cast_precision_loss)]
impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Self::number(v as f64)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl<T: Into<Self>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::array(items)
    }
}

impl From<BTreeMap<String, Self>> for Value {
    fn from(attrs: BTreeMap<String, Self>) -> Self {
        Self::Object(attrs)
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}
