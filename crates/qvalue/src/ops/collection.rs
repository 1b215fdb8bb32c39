use crate::{
    error::{OperatorResult, OperatorTypeError},
    ops::{Evaluator, OperatorKind, relational},
    value::{Value, canonical_cmp},
};
use std::collections::HashSet;

impl Evaluator {
    /// Smallest non-null element, or null when none remain.
    pub fn min(&self, list: &Value) -> OperatorResult<Value> {
        let Some(items) = self.list(OperatorKind::Min, list)? else {
            return Ok(Value::Null);
        };

        Ok(items
            .iter()
            .filter(|v| !v.is_null())
            .reduce(|best, v| if relational::less(v, best) { v } else { best })
            .cloned()
            .unwrap_or_default())
    }

    /// Largest non-null element, or null when none remain.
    pub fn max(&self, list: &Value) -> OperatorResult<Value> {
        let Some(items) = self.list(OperatorKind::Max, list)? else {
            return Ok(Value::Null);
        };

        Ok(items
            .iter()
            .filter(|v| !v.is_null())
            .reduce(|best, v| if relational::greater(v, best) { v } else { best })
            .cloned()
            .unwrap_or_default())
    }

    /// Distinct elements in first-occurrence order.
    pub fn unique(&self, list: &Value) -> OperatorResult<Value> {
        let Some(items) = self.list(OperatorKind::Unique, list)? else {
            return Ok(Value::Null);
        };

        let mut seen = HashSet::with_capacity(items.len());
        let distinct = items.iter().filter(|v| seen.insert(*v)).cloned().collect();

        Ok(Value::Array(distinct))
    }

    /// Stable ascending sort by the canonical comparator.
    pub fn sorted(&self, list: &Value) -> OperatorResult<Value> {
        let Some(items) = self.list(OperatorKind::Sorted, list)? else {
            return Ok(Value::Null);
        };

        let mut out = items.to_vec();
        out.sort_by(canonical_cmp);

        Ok(Value::Array(out))
    }

    // `None` means the permissive policy already resolved the helper to null.
    fn list<'a>(
        &self,
        op: OperatorKind,
        value: &'a Value,
    ) -> OperatorResult<Option<&'a [Value]>> {
        match value {
            Value::Array(items) => Ok(Some(items.as_slice())),
            other => self
                .fail(OperatorTypeError::ListExpected {
                    op,
                    kind: other.kind(),
                })
                .map(|_| None),
        }
    }
}
