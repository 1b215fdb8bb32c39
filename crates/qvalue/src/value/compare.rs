use crate::value::Value;
use std::{
    cmp::Ordering,
    collections::{BTreeMap, btree_map},
    iter::Peekable,
};

// Stand-in for attributes present on only one side of an object comparison.
static ABSENT: Value = Value::Null;

///
/// Step
/// Pending unit of work on the comparator stack.
///

enum Step<'a> {
    Values(&'a Value, &'a Value),
    Lengths(usize, usize),
}

/// Total canonical comparator used by every relational operator.
///
/// Ordering rules:
/// 1. Canonical variant rank
/// 2. Variant-specific comparison for same-ranked values
///
/// Arrays compare element-wise and then by length. Objects compare over the
/// sorted union of both key sets, with a missing attribute treated as null.
/// Nesting depth is bounded by heap, not by the native stack.
#[must_use]
pub fn canonical_cmp(left: &Value, right: &Value) -> Ordering {
    if left.kind().is_scalar() || right.kind().is_scalar() {
        return cmp_shallow(left, right);
    }

    let mut stack = vec![Step::Values(left, right)];
    while let Some(step) = stack.pop() {
        let ord = match step {
            Step::Lengths(l, r) => l.cmp(&r),
            Step::Values(Value::Array(a), Value::Array(b)) => {
                stack.push(Step::Lengths(a.len(), b.len()));
                stack.extend(a.iter().zip(b).rev().map(|(l, r)| Step::Values(l, r)));
                Ordering::Equal
            }
            Step::Values(Value::Object(a), Value::Object(b)) => {
                let pairs: Vec<_> = merge_attributes(a, b).collect();
                stack.extend(pairs.into_iter().rev().map(|(_, l, r)| Step::Values(l, r)));
                Ordering::Equal
            }
            Step::Values(l, r) => cmp_shallow(l, r),
        };

        if ord != Ordering::Equal {
            return ord;
        }
    }

    Ordering::Equal
}

// Rank first, then same-rank scalar comparison.
// Composite pairs of equal rank are expanded by the caller.
fn cmp_shallow(left: &Value, right: &Value) -> Ordering {
    let rank = left.canonical_rank().cmp(&right.canonical_rank());
    if rank != Ordering::Equal {
        return rank;
    }

    match (left, right) {
        (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
        (Value::Number(a), Value::Number(b)) => a.cmp(b),
        (Value::String(a), Value::String(b)) => a.as_bytes().cmp(b.as_bytes()),
        _ => Ordering::Equal,
    }
}

/// Walk the sorted union of two attribute maps.
///
/// Yields `(key, left, right)` where a side missing the key contributes null.
fn merge_attributes<'a>(
    left: &'a BTreeMap<String, Value>,
    right: &'a BTreeMap<String, Value>,
) -> MergedAttributes<'a> {
    MergedAttributes {
        left: left.iter().peekable(),
        right: right.iter().peekable(),
    }
}

///
/// MergedAttributes
///

struct MergedAttributes<'a> {
    left: Peekable<btree_map::Iter<'a, String, Value>>,
    right: Peekable<btree_map::Iter<'a, String, Value>>,
}

impl<'a> Iterator for MergedAttributes<'a> {
    type Item = (&'a str, &'a Value, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        let order = match (self.left.peek(), self.right.peek()) {
            (None, None) => return None,
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (Some((l, _)), Some((r, _))) => l.as_str().cmp(r.as_str()),
        };

        match order {
            Ordering::Less => self.left.next().map(|(k, v)| (k.as_str(), v, &ABSENT)),
            Ordering::Greater => self.right.next().map(|(k, v)| (k.as_str(), &ABSENT, v)),
            Ordering::Equal => {
                let (key, l) = self.left.next()?;
                let (_, r) = self.right.next()?;
                Some((key.as_str(), l, r))
            }
        }
    }
}
