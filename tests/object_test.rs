//! Integration tests for object schemas and nested issue locations.

use forgeval::{Input, IssueCode, Schema};
use serde_json::json;

/// Helper to extract the success value from a Validation
fn unwrap_success<T, E: std::fmt::Debug>(v: stillwater::Validation<T, E>) -> T {
    v.into_result().unwrap()
}

/// Helper to extract the error value from a Validation
fn unwrap_failure<T, E>(v: stillwater::Validation<T, E>) -> E
where
    T: std::fmt::Debug,
{
    v.into_result().unwrap_err()
}

#[test]
fn test_flat_object() {
    let schema = Schema::object()
        .field("name", Schema::string())
        .field("age", Schema::number());

    let forged = unwrap_success(schema.forge(&json!({"name": "Ada", "age": 36})));
    assert_eq!(forged, Some(json!({"name": "Ada", "age": 36})));
}

#[test]
fn test_wrong_field_type_path() {
    let schema = Schema::object()
        .field("name", Schema::string())
        .field("age", Schema::number());

    let issues = unwrap_failure(schema.forge(&json!({"name": "Ada", "age": "x"})));
    assert_eq!(issues.len(), 1);
    assert_eq!(issues.first().path, vec!["age".to_string()]);
    assert_eq!(issues.first().code, IssueCode::ValueError);
}

#[test]
fn test_nested_object_path() {
    let schema = Schema::object().field(
        "user",
        Schema::object().field("age", Schema::number().gte(18)),
    );

    let issues = unwrap_failure(schema.forge(&json!({"user": {"age": 12}})));
    assert_eq!(issues.len(), 1);
    assert_eq!(issues.first().path, vec!["user".to_string(), "age".to_string()]);
    assert_eq!(issues.first().check, "gte");
}

#[test]
fn test_all_fields_reported() {
    let schema = Schema::object()
        .field("a", Schema::string())
        .field("b", Schema::number())
        .field("c", Schema::boolean());

    let issues = unwrap_failure(schema.forge(&json!({"a": 1, "b": "2", "c": null})));
    assert_eq!(issues.len(), 3);
    assert_eq!(issues.at_path(&["a"])[0].check, "string");
    assert_eq!(issues.at_path(&["b"])[0].check, "number");
    assert_eq!(issues.at_path(&["c"])[0].check, "boolean");
}

#[test]
fn test_three_levels_mixed() {
    let schema = Schema::object().field(
        "company",
        Schema::object().field(
            "teams",
            Schema::array(
                Schema::object()
                    .field("name", Schema::string().min_len(1))
                    .field("members", Schema::array(Schema::string().email())),
            ),
        ),
    );

    let issues = unwrap_failure(schema.forge(&json!({
        "company": {
            "teams": [
                {"name": "core", "members": ["a@example.com"]},
                {"name": "", "members": ["b@example.com", "nope"]}
            ]
        }
    })));

    assert_eq!(issues.len(), 1);
    let top = issues.first();
    assert_eq!(top.path, vec!["company".to_string(), "teams".to_string()]);
    assert_eq!(top.array_index, Some(1));

    let leaves: Vec<(String, String)> = issues
        .leaves()
        .into_iter()
        .map(|(p, i)| (p.to_string(), i.check.clone()))
        .collect();
    assert_eq!(
        leaves,
        vec![
            ("company.teams[1].name".to_string(), "min_len".to_string()),
            ("company.teams[1].members[1]".to_string(), "email".to_string()),
        ]
    );
}

#[test]
fn test_optional_and_nullable_fields() {
    let schema = Schema::object()
        .field("nick", Schema::string().optional())
        .field("bio", Schema::string().nullable());

    let forged = unwrap_success(schema.forge(&json!({"bio": null})));
    assert_eq!(forged, Some(json!({"bio": null})));

    let issues = unwrap_failure(schema.forge(&json!({"nick": null})));
    let paths: Vec<_> = issues.iter().map(|i| i.path[0].as_str()).collect();
    assert_eq!(paths, vec!["nick", "bio"]);
}

#[test]
fn test_forged_value_applies_field_transforms() {
    let schema = Schema::object()
        .field("name", Schema::string().transform(|v| json!(v.as_str().unwrap_or_default().trim())))
        .field("n", Schema::number());

    let forged = unwrap_success(schema.forge(&json!({"name": "  Ada ", "n": 1, "extra": [1]})));
    assert_eq!(forged, Some(json!({"name": "Ada", "n": 1, "extra": [1]})));
}

#[test]
fn test_strict_object() {
    let schema = Schema::object().field("id", Schema::number()).strict();
    assert!(schema.forge(&json!({"id": 1})).is_success());

    let issues = unwrap_failure(schema.forge(&json!({"id": 1, "rogue": true})));
    assert_eq!(issues.len(), 1);
    assert_eq!(issues.first().check, "strict");
    assert_eq!(issues.first().path, vec!["rogue".to_string()]);
    assert_eq!(issues.first().code, IssueCode::ValidationError);
}

#[test]
fn test_optional_object() {
    let schema = Schema::object().field("a", Schema::number()).optional();
    assert_eq!(schema.forge(Input::Absent).into_result(), Ok(None));
    assert!(schema.forge(&json!(null)).is_failure());
}

#[test]
fn test_object_map_lookup_as_input() {
    let schema = Schema::string().optional();
    let payload = json!({"present": "yes"});
    let map = payload.as_object().unwrap();

    assert!(schema.forge(map.get("present")).is_success());
    assert!(schema.forge(map.get("missing")).is_success());
}
