//! Relational operators.
//!
//! Every operator here is a thin view over [`canonical_cmp`] and behaves
//! identically under both error policies.

use crate::{
    error::{OperatorResult, OperatorTypeError},
    ops::OperatorKind,
    value::{Value, canonical_cmp},
};
use std::cmp::Ordering;
use tracing::debug;

#[must_use]
pub fn compare(lhs: &Value, rhs: &Value) -> Ordering {
    canonical_cmp(lhs, rhs)
}

#[must_use]
pub fn equal(lhs: &Value, rhs: &Value) -> bool {
    compare(lhs, rhs).is_eq()
}

#[must_use]
pub fn unequal(lhs: &Value, rhs: &Value) -> bool {
    compare(lhs, rhs).is_ne()
}

#[must_use]
pub fn less(lhs: &Value, rhs: &Value) -> bool {
    compare(lhs, rhs).is_lt()
}

#[must_use]
pub fn greater(lhs: &Value, rhs: &Value) -> bool {
    compare(lhs, rhs).is_gt()
}

#[must_use]
pub fn less_equal(lhs: &Value, rhs: &Value) -> bool {
    compare(lhs, rhs).is_le()
}

#[must_use]
pub fn greater_equal(lhs: &Value, rhs: &Value) -> bool {
    compare(lhs, rhs).is_ge()
}

/// Deep membership test.
///
/// A non-array haystack is a list-expected error regardless of policy.
pub fn in_list(needle: &Value, haystack: &Value) -> OperatorResult<bool> {
    list_operand(OperatorKind::In, haystack).map(|items| items.iter().any(|v| equal(needle, v)))
}

/// Negated membership test with the same array requirement as [`in_list`].
pub fn not_in(needle: &Value, haystack: &Value) -> OperatorResult<bool> {
    list_operand(OperatorKind::NotIn, haystack)
        .map(|items| !items.iter().any(|v| equal(needle, v)))
}

fn list_operand(op: OperatorKind, haystack: &Value) -> OperatorResult<&[Value]> {
    match haystack {
        Value::Array(items) => Ok(items.as_slice()),
        other => {
            let err = OperatorTypeError::ListExpected {
                op,
                kind: other.kind(),
            };
            debug!(op = %op, error = %err, "operator failed");

            Err(err.into())
        }
    }
}
