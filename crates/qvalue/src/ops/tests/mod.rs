mod arithmetic;

use crate::{
    config::OperatorConfig,
    error::{OperatorError, OperatorTypeError},
    ops::{Evaluator, OperatorKind},
    value::{Value, ValueKind},
};

// ---- helpers -----------------------------------------------------------

fn v(json: serde_json::Value) -> Value {
    Value::from(json)
}

fn strict() -> Evaluator {
    Evaluator::strict()
}

fn permissive() -> Evaluator {
    Evaluator::permissive()
}

fn quiet() -> Evaluator {
    Evaluator::new(OperatorConfig::permissive().with_warn_on_null(false))
}

// ---- evaluator ---------------------------------------------------------

#[test]
fn default_evaluator_is_permissive() {
    assert_eq!(Evaluator::default(), permissive());
    assert!(strict().policy().is_strict());
    assert!(!quiet().config().warn_on_null);
}

#[test]
fn to_number_failure_value_depends_on_policy() {
    let bad = Value::from("abc");

    assert_eq!(strict().to_number(&bad), Value::from(0));
    assert_eq!(permissive().to_number(&bad), Value::Null);
    assert_eq!(strict().to_number(&Value::from(" 7")), Value::from(7));
    assert_eq!(permissive().to_number(&Value::from(true)), Value::from(1));
}

#[test]
fn to_string_follows_policy() {
    assert_eq!(strict().to_string(&Value::Null), "null");
    assert_eq!(permissive().to_string(&Value::Null), "");
    assert_eq!(strict().to_string(&v(serde_json::json!([1, 2]))), "1,2");
    assert_eq!(permissive().to_string(&v(serde_json::json!([1, 2]))), "[1,2]");
}

#[test]
fn operator_labels_are_stable() {
    assert_eq!(OperatorKind::Plus.to_string(), "+");
    assert_eq!(OperatorKind::UnaryMinus.to_string(), "unary -");
    assert_eq!(OperatorKind::And.to_string(), "AND");
    assert_eq!(OperatorKind::NotIn.to_string(), "NOT IN");
    assert_eq!(OperatorKind::Max.to_string(), "MAX");
}

#[test]
fn error_messages_name_operator_and_kind() {
    let err = OperatorError::from(OperatorTypeError::ListExpected {
        op: OperatorKind::In,
        kind: ValueKind::String,
    });

    assert_eq!(
        err.to_string(),
        "list expected: operator 'IN' requires an array operand, got string"
    );
    assert_eq!(err.op(), OperatorKind::In);
}
