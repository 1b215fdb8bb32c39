use crate::{
    coerce,
    error::{ArithmeticError, OperatorResult, OperatorTypeError},
    ops::{Evaluator, OperatorKind},
    value::{Number, Value},
};

impl Evaluator {
    pub fn plus(&self, lhs: &Value, rhs: &Value) -> OperatorResult<Value> {
        self.binary(OperatorKind::Plus, lhs, rhs, |a, b| a + b)
    }

    pub fn minus(&self, lhs: &Value, rhs: &Value) -> OperatorResult<Value> {
        self.binary(OperatorKind::Minus, lhs, rhs, |a, b| a - b)
    }

    pub fn times(&self, lhs: &Value, rhs: &Value) -> OperatorResult<Value> {
        self.binary(OperatorKind::Times, lhs, rhs, |a, b| a * b)
    }

    pub fn divide(&self, lhs: &Value, rhs: &Value) -> OperatorResult<Value> {
        self.binary(OperatorKind::Divide, lhs, rhs, |a, b| a / b)
    }

    /// Truncated remainder; the result takes the sign of the dividend.
    pub fn modulus(&self, lhs: &Value, rhs: &Value) -> OperatorResult<Value> {
        self.binary(OperatorKind::Modulus, lhs, rhs, |a, b| a % b)
    }

    pub fn unary_plus(&self, operand: &Value) -> OperatorResult<Value> {
        let Some(n) = self.operand(OperatorKind::UnaryPlus, operand)? else {
            return Ok(Value::Null);
        };

        self.finish(OperatorKind::UnaryPlus, n)
    }

    pub fn unary_minus(&self, operand: &Value) -> OperatorResult<Value> {
        let Some(n) = self.operand(OperatorKind::UnaryMinus, operand)? else {
            return Ok(Value::Null);
        };

        self.finish(OperatorKind::UnaryMinus, -n)
    }

    // Coerce both operands, reject zero divisors, then range-check the result.
    fn binary(
        &self,
        op: OperatorKind,
        lhs: &Value,
        rhs: &Value,
        apply: impl FnOnce(f64, f64) -> f64,
    ) -> OperatorResult<Value> {
        let Some(a) = self.operand(op, lhs)? else {
            return Ok(Value::Null);
        };
        let Some(b) = self.operand(op, rhs)? else {
            return Ok(Value::Null);
        };

        if matches!(op, OperatorKind::Divide | OperatorKind::Modulus) && b == 0.0 {
            return self.fail(ArithmeticError::DivisionByZero { op });
        }

        self.finish(op, apply(a, b))
    }

    // `None` means the permissive policy already resolved the operator to null.
    fn operand(&self, op: OperatorKind, value: &Value) -> OperatorResult<Option<f64>> {
        if let Some(n) = coerce::to_number(value) {
            return Ok(Some(n));
        }

        self.fail(OperatorTypeError::InvalidArithmeticValue {
            op,
            kind: value.kind(),
        })
        .map(|_| None)
    }

    fn finish(&self, op: OperatorKind, result: f64) -> OperatorResult<Value> {
        match Number::try_new(result) {
            Some(n) => Ok(Value::Number(n)),
            None => self.fail(ArithmeticError::NumberOutOfRange { op }),
        }
    }
}
