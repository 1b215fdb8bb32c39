use crate::{
    coerce,
    config::ErrorPolicy,
    error::{OperatorError, OperatorResult, OperatorTypeError},
    ops::{Evaluator, OperatorKind},
    value::Value,
};

impl Evaluator {
    /// Logical negation; strict requires a bool operand.
    pub fn not(&self, operand: &Value) -> OperatorResult<Value> {
        let truth = match self.policy() {
            ErrorPolicy::Strict => Self::require_bool(OperatorKind::Not, operand)?,
            ErrorPolicy::Permissive => coerce::to_bool(operand),
        };

        Ok(Value::Bool(!truth))
    }

    /// Short-circuiting conjunction.
    ///
    /// `rhs` is only evaluated when `lhs` is truthy. Permissive returns the
    /// deciding operand unchanged; strict requires bool operands and returns
    /// a bool.
    pub fn and<L, R, E>(&self, lhs: L, rhs: R) -> Result<Value, E>
    where
        L: FnOnce() -> Result<Value, E>,
        R: FnOnce() -> Result<Value, E>,
        E: From<OperatorError>,
    {
        self.junction(OperatorKind::And, false, lhs, rhs)
    }

    /// Short-circuiting disjunction.
    ///
    /// `rhs` is only evaluated when `lhs` is falsy.
    pub fn or<L, R, E>(&self, lhs: L, rhs: R) -> Result<Value, E>
    where
        L: FnOnce() -> Result<Value, E>,
        R: FnOnce() -> Result<Value, E>,
        E: From<OperatorError>,
    {
        self.junction(OperatorKind::Or, true, lhs, rhs)
    }

    // `decides` is the left-hand truth value that short-circuits the junction.
    fn junction<L, R, E>(
        &self,
        op: OperatorKind,
        decides: bool,
        lhs: L,
        rhs: R,
    ) -> Result<Value, E>
    where
        L: FnOnce() -> Result<Value, E>,
        R: FnOnce() -> Result<Value, E>,
        E: From<OperatorError>,
    {
        let left = lhs()?;

        match self.policy() {
            ErrorPolicy::Permissive => {
                if coerce::to_bool(&left) == decides {
                    Ok(left)
                } else {
                    rhs()
                }
            }
            ErrorPolicy::Strict => {
                if Self::require_bool(op, &left)? == decides {
                    return Ok(Value::Bool(decides));
                }

                let right = rhs()?;
                Ok(Value::Bool(Self::require_bool(op, &right)?))
            }
        }
    }

    pub(super) fn require_bool(op: OperatorKind, value: &Value) -> OperatorResult<bool> {
        match value {
            Value::Bool(b) => Ok(*b),
            other => Self::raise(OperatorTypeError::InvalidLogicalValue {
                op,
                kind: other.kind(),
            }),
        }
    }
}
