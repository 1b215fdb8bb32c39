use qvalue::{
    coerce,
    error::{ErrorClass, OperatorError, OperatorResult},
    ops::relational::{equal, in_list, less, unequal},
    prelude::*,
};
use serde_json::json;

fn v(json: serde_json::Value) -> Value {
    Value::from(json)
}

fn lit(value: Value) -> impl FnOnce() -> OperatorResult<Value> {
    move || Ok(value)
}

#[test]
fn documented_comparison_properties() {
    assert!(equal(&v(json!({"a": 1, "b": 2})), &v(json!({"b": 2, "a": 1}))));
    assert!(unequal(&v(json!([1, 2])), &v(json!([2, 1]))));
    assert!(less(&v(json!({"b": 2})), &v(json!({"a": 1}))));

    let chain = [
        json!(null),
        json!(false),
        json!(true),
        json!(0),
        json!(""),
        json!("abcd"),
        json!([]),
        json!({}),
    ];
    for pair in chain.windows(2) {
        assert!(less(&v(pair[0].clone()), &v(pair[1].clone())), "{} < {}", pair[0], pair[1]);
    }
}

#[test]
fn documented_coercion_properties() {
    assert!(!coerce::to_bool(&v(json!([]))));
    assert!(coerce::to_bool(&v(json!([0]))));
    assert!(!coerce::to_bool(&v(json!({}))));
    assert!(coerce::to_bool(&v(json!({"a": false}))));

    assert_eq!(coerce::to_number(&Value::from(" 12335.3 a ")), Some(12335.3));
    assert_eq!(coerce::to_number(&Value::from("--1")), None);
    assert_eq!(coerce::to_number(&Value::from("+1")), Some(1.0));
}

#[test]
fn documented_membership_properties() {
    assert_eq!(in_list(&Value::from(0), &v(json!([1, 2, 3, 0]))), Ok(true));
    assert_eq!(in_list(&Value::from(5), &v(json!([1, 2, 3]))), Ok(false));
    assert_eq!(in_list(&v(json!({"a": true})), &v(json!([1, {"a": true}]))), Ok(true));
}

#[test]
fn guard_expression_short_circuits() {
    // x != null AND x.field > 0, evaluated against a document without x
    let doc = v(json!({"y": 1}));

    for eval in [Evaluator::strict(), Evaluator::permissive()] {
        let x = doc.attribute("x");
        let result = eval.and(
            lit(Value::Bool(unequal(x, &Value::Null))),
            || -> OperatorResult<Value> {
                let field = x.attribute("field");
                Ok(Value::Bool(less(&Value::from(0), field)))
            },
        );

        assert_eq!(result, Ok(Value::Bool(false)));
    }
}

#[test]
fn policies_diverge_on_bad_operands() {
    let strict = Evaluator::strict();
    let permissive = Evaluator::new(OperatorConfig::permissive().with_warn_on_null(false));

    let cases: [(&str, fn(&Evaluator) -> OperatorResult<Value>, ErrorClass); 4] = [
        ("plus", |e| e.plus(&Value::from("x"), &Value::from(1)), ErrorClass::TypeMismatch),
        ("divide", |e| e.divide(&Value::from(1), &Value::from(0)), ErrorClass::Arithmetic),
        ("not", |e| e.not(&Value::from("")).and_then(|v| e.not(&v)), ErrorClass::TypeMismatch),
        ("max", |e| e.max(&Value::from(3)), ErrorClass::TypeMismatch),
    ];

    for (name, run, class) in cases {
        let err = run(&strict).expect_err(name);
        assert_eq!(err.class(), class, "{name}");

        let value = run(&permissive).unwrap_or_else(|e| panic!("{name}: {e}"));
        assert!(value.is_null() || value.is_bool(), "{name}");
    }
}

#[test]
fn membership_is_structural_under_both_policies() {
    // in_list has no evaluator: its array requirement never depends on policy
    let err = in_list(&Value::from(1), &Value::from("abc")).expect_err("list expected");

    assert!(matches!(err, OperatorError::Type(_)));
    assert_eq!(err.op(), OperatorKind::In);
}

#[test]
fn config_drives_evaluator() {
    let config = OperatorConfig::from_toml_str("policy = \"strict\"").expect("valid config");
    let eval = Evaluator::new(config);

    assert_eq!(eval.policy(), ErrorPolicy::Strict);
    assert_eq!(eval.to_string(&Value::Null), "null");
    assert_eq!(eval.to_number(&Value::from("abc")), Value::from(0));
}

#[test]
fn concat_and_ternary_compose() {
    let eval = Evaluator::permissive();
    let doc = v(json!({"first": "f", "last": "u"}));

    let greeting = eval.concat([
        doc.attribute("first"),
        doc.attribute("middle"),
        doc.attribute("last"),
    ]);
    assert_eq!(greeting, Value::from("fu"));

    let picked = eval.ternary(doc.attribute("middle"), lit(Value::from(1)), lit(greeting));
    assert_eq!(picked, Ok(Value::from("fu")));
}

#[test]
fn json_round_trip_through_public_api() {
    let source = json!({"list": [1, 2.5, null, "s"], "flag": true, "nested": {"k": []}});
    let value = v(source.clone());

    let text = serde_json::to_string(&value).expect("serialize");
    let back: Value = serde_json::from_str(&text).expect("deserialize");

    assert_eq!(back, value);
    assert_eq!(serde_json::Value::from(&back), source);
    assert_eq!(value.to_string(), text);
}
