use crate::{
    coerce,
    config::ErrorPolicy,
    error::OperatorError,
    ops::{Evaluator, OperatorKind},
    value::Value,
};

impl Evaluator {
    /// String concatenation; null arguments are skipped entirely.
    #[must_use]
    pub fn concat<'a, I>(&self, values: I) -> Value
    where
        I: IntoIterator<Item = &'a Value>,
    {
        let mut out = String::new();
        for value in values.into_iter().filter(|v| !v.is_null()) {
            out.push_str(&self.to_string(value));
        }

        Value::String(out)
    }

    /// Join with a separator; null arguments are skipped and do not produce
    /// an empty slot between separators.
    #[must_use]
    pub fn concat_separator<'a, I>(&self, separator: &Value, values: I) -> Value
    where
        I: IntoIterator<Item = &'a Value>,
    {
        let separator = self.to_string(separator);
        let parts: Vec<String> = values
            .into_iter()
            .filter(|v| !v.is_null())
            .map(|v| self.to_string(v))
            .collect();

        Value::String(parts.join(&separator))
    }

    /// Conditional with deferred branches; exactly one branch is evaluated.
    ///
    /// Strict requires a bool condition; permissive coerces it.
    pub fn ternary<T, F, E>(&self, condition: &Value, then: T, otherwise: F) -> Result<Value, E>
    where
        T: FnOnce() -> Result<Value, E>,
        F: FnOnce() -> Result<Value, E>,
        E: From<OperatorError>,
    {
        let truth = match self.policy() {
            ErrorPolicy::Strict => Self::require_bool(OperatorKind::Ternary, condition)?,
            ErrorPolicy::Permissive => coerce::to_bool(condition),
        };

        if truth { then() } else { otherwise() }
    }
}
