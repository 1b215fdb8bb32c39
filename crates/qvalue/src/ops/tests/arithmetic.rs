use super::{permissive, quiet, strict, v};
use crate::{
    error::{ArithmeticError, ErrorClass, OperatorError, OperatorTypeError},
    ops::OperatorKind,
    value::{Value, ValueKind},
};
use serde_json::json;

#[test]
fn basic_arithmetic_under_both_policies() {
    for eval in [strict(), permissive()] {
        let a = Value::from(7);
        let b = Value::from(2);

        assert_eq!(eval.plus(&a, &b), Ok(Value::from(9)));
        assert_eq!(eval.minus(&a, &b), Ok(Value::from(5)));
        assert_eq!(eval.times(&a, &b), Ok(Value::from(14)));
        assert_eq!(eval.divide(&a, &b), Ok(Value::number(3.5)));
        assert_eq!(eval.modulus(&a, &b), Ok(Value::from(1)));
    }
}

#[test]
fn modulus_is_truncated_remainder() {
    let eval = permissive();

    assert_eq!(
        eval.modulus(&Value::from(-7), &Value::from(2)),
        Ok(Value::from(-1))
    );
    assert_eq!(
        eval.modulus(&Value::number(5.5), &Value::from(2)),
        Ok(Value::number(1.5))
    );
}

#[test]
fn operands_are_coerced() {
    for eval in [strict(), permissive()] {
        assert_eq!(
            eval.plus(&Value::from("3"), &Value::from(true)),
            Ok(Value::from(4))
        );
        assert_eq!(
            eval.times(&v(json!([" 2.5 "])), &Value::Null),
            Ok(Value::from(0))
        );
        assert_eq!(
            eval.minus(&Value::from(false), &Value::from("1e1")),
            Ok(Value::from(-10))
        );
    }
}

#[test]
fn unary_operators() {
    for eval in [strict(), permissive()] {
        assert_eq!(eval.unary_minus(&Value::from("4")), Ok(Value::from(-4)));
        assert_eq!(eval.unary_plus(&Value::from(true)), Ok(Value::from(1)));
        assert_eq!(eval.unary_minus(&Value::from(0)), Ok(Value::from(0)));
    }

    assert_eq!(quiet().unary_minus(&v(json!({}))), Ok(Value::Null));
    assert_eq!(
        strict().unary_plus(&v(json!([1, 2]))),
        Err(OperatorError::Type(
            OperatorTypeError::InvalidArithmeticValue {
                op: OperatorKind::UnaryPlus,
                kind: ValueKind::Array,
            }
        ))
    );
}

#[test]
fn coercion_failure_strict_raises_type_error() {
    let err = strict()
        .plus(&Value::from(1), &Value::from("abc"))
        .expect_err("non-numeric operand");

    assert_eq!(
        err,
        OperatorError::Type(OperatorTypeError::InvalidArithmeticValue {
            op: OperatorKind::Plus,
            kind: ValueKind::String,
        })
    );
    assert_eq!(err.class(), ErrorClass::TypeMismatch);
}

#[test]
fn coercion_failure_permissive_yields_null() {
    let eval = quiet();

    assert_eq!(eval.plus(&Value::from(1), &Value::from("abc")), Ok(Value::Null));
    assert_eq!(eval.times(&v(json!({"a": 1})), &Value::from(2)), Ok(Value::Null));
    assert_eq!(eval.minus(&v(json!([])), &Value::from(2)), Ok(Value::Null));
}

#[test]
fn division_by_zero() {
    for op in [OperatorKind::Divide, OperatorKind::Modulus] {
        let run = |eval: &crate::ops::Evaluator| match op {
            OperatorKind::Divide => eval.divide(&Value::from(1), &Value::from("0")),
            _ => eval.modulus(&Value::from(1), &Value::from(0)),
        };

        let err = run(&strict()).expect_err("division by zero");
        assert_eq!(
            err,
            OperatorError::Arithmetic(ArithmeticError::DivisionByZero { op })
        );
        assert_eq!(err.class(), ErrorClass::Arithmetic);

        assert_eq!(run(&permissive()), Ok(Value::Null));
    }
}

#[test]
fn zero_divided_by_zero_is_division_by_zero() {
    assert_eq!(
        strict().divide(&Value::from(0), &Value::from(0)),
        Err(OperatorError::Arithmetic(ArithmeticError::DivisionByZero {
            op: OperatorKind::Divide
        }))
    );
}

#[test]
fn overflow_is_out_of_range() {
    let huge = Value::number(f64::MAX);

    assert_eq!(
        strict().times(&huge, &Value::from(2)),
        Err(OperatorError::Arithmetic(
            ArithmeticError::NumberOutOfRange {
                op: OperatorKind::Times
            }
        ))
    );
    assert_eq!(strict().plus(&huge, &huge).map_err(|e| e.class()), Err(ErrorClass::Arithmetic));
    assert_eq!(permissive().plus(&huge, &huge), Ok(Value::Null));
}

#[test]
fn negative_zero_result_is_canonical() {
    let result = permissive()
        .times(&Value::from(-1), &Value::from(0))
        .expect("finite product");

    assert_eq!(result.as_f64().map(f64::is_sign_positive), Some(true));
}
