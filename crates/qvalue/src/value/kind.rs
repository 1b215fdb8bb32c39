use crate::value::Value;
use std::fmt;

///
/// ValueKind
///
/// Stable value-variant tag. The discriminant doubles as the canonical
/// cross-variant rank used by the comparator.
///
/// IMPORTANT:
/// Rank order is part of deterministic query behavior (sorting, grouping,
/// set membership) and must not be reordered.
///

#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum ValueKind {
    Null = 0,
    Bool = 1,
    Number = 2,
    String = 3,
    Array = 4,
    Object = 5,
}

impl ValueKind {
    /// Every kind in ascending rank order.
    pub const ALL: [Self; 6] = [
        Self::Null,
        Self::Bool,
        Self::Number,
        Self::String,
        Self::Array,
        Self::Object,
    ];

    /// Canonical rank; lower ranks sort first.
    #[must_use]
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Stable human-readable kind label for diagnostics.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool => "bool",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        }
    }

    #[must_use]
    pub const fn is_scalar(self) -> bool {
        !self.is_composite()
    }

    #[must_use]
    pub const fn is_composite(self) -> bool {
        matches!(self, Self::Array | Self::Object)
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Kind tag of a value.
#[must_use]
pub(super) const fn kind_of(value: &Value) -> ValueKind {
    match value {
        Value::Null => ValueKind::Null,
        Value::Bool(_) => ValueKind::Bool,
        Value::Number(_) => ValueKind::Number,
        Value::String(_) => ValueKind::String,
        Value::Array(_) => ValueKind::Array,
        Value::Object(_) => ValueKind::Object,
    }
}
