use crate::value::Value;

static MISSING: Value = Value::Null;

impl Value {
    /// Attribute lookup.
    ///
    /// A missing attribute or a non-object receiver yields null, never an error.
    #[must_use]
    pub fn attribute(&self, name: &str) -> &Self {
        match self {
            Self::Object(attrs) => attrs.get(name).unwrap_or(&MISSING),
            _ => &MISSING,
        }
    }

    /// Positional lookup.
    ///
    /// On arrays a negative index counts from the end (`-1` is the last
    /// element); out-of-range positions yield null. On objects the index is
    /// looked up as a stringified attribute name.
    #[must_use]
    pub fn index(&self, index: i64) -> &Self {
        match self {
            Self::Array(items) => resolve_position(index, items.len())
                .and_then(|pos| items.get(pos))
                .unwrap_or(&MISSING),
            Self::Object(_) => self.attribute(&index.to_string()),
            _ => &MISSING,
        }
    }

    /// Follow a chain of attribute names, stopping at the first null.
    #[must_use]
    pub fn path<'a, I>(&self, names: I) -> &Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut current = self;
        for name in names {
            if current.is_null() {
                break;
            }
            current = current.attribute(name);
        }

        current
    }
}

// Map a possibly negative index onto `0..len`.
fn resolve_position(index: i64, len: usize) -> Option<usize> {
    if index >= 0 {
        usize::try_from(index).ok().filter(|pos| *pos < len)
    } else {
        let back = usize::try_from(index.unsigned_abs()).ok()?;
        len.checked_sub(back)
    }
}
