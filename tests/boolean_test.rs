//! Integration tests for boolean schemas and modal flags.

use forgeval::{Input, IssueCode, Schema};
use serde_json::json;

#[test]
fn test_true_and_false() {
    let schema = Schema::boolean();
    assert_eq!(schema.forge(&json!(true)).into_result(), Ok(Some(json!(true))));
    assert_eq!(schema.forge(&json!(false)).into_result(), Ok(Some(json!(false))));
}

#[test]
fn test_optional_nullable_boolean() {
    let schema = Schema::boolean().optional().nullable();

    assert_eq!(schema.forge(Input::Absent).into_result(), Ok(None));
    assert_eq!(schema.forge(&json!(null)).into_result(), Ok(Some(json!(null))));

    let issues = schema.forge(&json!(1)).into_result().unwrap_err();
    assert_eq!(issues.len(), 1);
    assert_eq!(issues.first().code, IssueCode::ValueError);
    assert_eq!(issues.first().check, "boolean");
}

#[test]
fn test_flag_order_does_not_matter() {
    let a = Schema::boolean().optional().nullable();
    let b = Schema::boolean().nullable().optional();

    for input in [Input::Absent, Input::Present(&json!(null))] {
        assert_eq!(a.forge(input).is_success(), b.forge(input).is_success());
    }
    assert!(a.is_optional() && a.is_nullable());
    assert!(b.is_optional() && b.is_nullable());
}

#[test]
fn test_optional_does_not_admit_null() {
    let schema = Schema::boolean().optional();
    assert!(schema.forge(Input::Absent).is_success());
    let issues = schema.forge(&json!(null)).into_result().unwrap_err();
    assert_eq!(issues.first().check, "boolean");
}

#[test]
fn test_nullable_does_not_admit_absent() {
    let schema = Schema::boolean().nullable();
    assert!(schema.forge(&json!(null)).is_success());
    assert!(schema.forge(Input::Absent).is_failure());
}

#[test]
fn test_typed_check() {
    let schema = Schema::boolean().check(|b| b, "must opt in");
    assert!(schema.forge(&json!(true)).is_success());
    let issues = schema.forge(&json!(false)).into_result().unwrap_err();
    assert_eq!(issues.first().message.as_deref(), Some("must opt in"));
}
