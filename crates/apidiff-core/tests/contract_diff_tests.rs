//! End-to-end contract diff scenarios.
//!
//! All tests operate on in-memory documents (no I/O) except the explicit
//! loading tests at the bottom.

use apidiff_core::diff::engine::compute_contract_diff;
use apidiff_core::diff::human_summary::render_human_summary;
use apidiff_core::errors::ApiDiffError;
use apidiff_core::model::{HttpMethod, OperationKey, SpecDocument};
use serde_json::{json, Value};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn doc(v: Value) -> SpecDocument {
    SpecDocument::from_value(v)
}

fn key(method: HttpMethod, path: &str) -> OperationKey {
    OperationKey::new(method, path)
}

fn user_api(schema_name: &str) -> Value {
    let reference = format!("#/components/schemas/{schema_name}");
    let mut api = json!({
        "openapi": "3.1.0",
        "paths": {
            "/users/{id}": {
                "get": {
                    "operationId": "getUser",
                    "responses": {
                        "200": {"content": {"application/json": {"schema": {"$ref": reference}}}}
                    }
                }
            },
            "/health": {
                "get": {"operationId": "health", "responses": {"204": {"description": "ok"}}}
            }
        },
        "components": {"schemas": {}}
    });
    api["components"]["schemas"][schema_name] =
        json!({"type": "object", "properties": {"id": {"type": "string"}}});
    api
}

// ---------------------------------------------------------------------------
// Scenarios
// ---------------------------------------------------------------------------

// S1: a removed path shows up only as removed
#[test]
fn test_removed_operation() {
    let before = doc(json!({"paths": {
        "/foo": {"get": {"operationId": "getFoo", "responses": {"200": {"content": {}}}}}
    }}));
    let after = doc(json!({"paths": {}}));
    let diff = compute_contract_diff(&before, &after).unwrap();
    assert_eq!(diff.operations.removed, vec![key(HttpMethod::Get, "/foo")]);
    assert!(diff.operations.added.is_empty());
    assert!(diff.operations.changed.is_empty());
}

// S2: a new path shows up only as added
#[test]
fn test_added_operation() {
    let before = doc(json!({"paths": {}}));
    let after = doc(json!({"paths": {"/bar": {"post": {"operationId": "createBar"}}}}));
    let diff = compute_contract_diff(&before, &after).unwrap();
    assert_eq!(diff.operations.added, vec![key(HttpMethod::Post, "/bar")]);
    assert!(diff.operations.removed.is_empty());
    assert!(diff.operations.changed.is_empty());
}

// S3: a response schema type change is a signature change
#[test]
fn test_response_type_change_is_changed_operation() {
    let with_type = |t: &str| {
        doc(json!({"paths": {"/foo": {"get": {"responses": {
            "200": {"content": {"application/json": {"schema": {"type": t}}}}
        }}}}}))
    };
    let diff = compute_contract_diff(&with_type("string"), &with_type("integer")).unwrap();
    assert_eq!(diff.operations.changed, vec![key(HttpMethod::Get, "/foo")]);
    assert!(diff.operations.added.is_empty());
    assert!(diff.operations.removed.is_empty());
}

// S4: key order inside the response is not a change
#[test]
fn test_key_order_is_not_a_change() {
    let before = doc(json!({"paths": {"/foo": {"get": {"responses": {
        "200": {"description": "ok", "content": {"application/json": {"schema": {"type": "object", "format": "x"}}}}
    }}}}}));
    let after = doc(json!({"paths": {"/foo": {"get": {"responses": {
        "200": {"content": {"application/json": {"schema": {"format": "x", "type": "object"}}}, "description": "ok"}
    }}}}}));
    let diff = compute_contract_diff(&before, &after).unwrap();
    assert!(diff.is_empty());
}

#[test]
fn test_key_order_in_raw_text_is_not_a_change() {
    let before = br#"{"paths": {"/foo": {"get": {"responses": {"200": {"description": "ok",
        "content": {"application/json": {"schema": {"type": "object", "required": ["id"],
        "properties": {"name": {"type": "string"}, "id": {"format": "uuid", "type": "string"}}}}}}}}}}}"#;
    let after = br#"{"paths": {"/foo": {"get": {"responses": {"200": {"content": {"application/json":
        {"schema": {"properties": {"id": {"type": "string", "format": "uuid"}, "name": {"type": "string"}},
        "required": ["id"], "type": "object"}}}, "description": "ok"}}}}}}"#;
    let before = SpecDocument::from_slice(before, "before.json").unwrap();
    let after = SpecDocument::from_slice(after, "after.json").unwrap();
    let diff = compute_contract_diff(&before, &after).unwrap();
    assert!(diff.is_empty());
    assert_eq!(diff.fingerprints.before, diff.fingerprints.after);
}

#[test]
fn test_integral_float_spelling_is_not_a_change() {
    let before = doc(json!({"components": {"schemas": {
        "Level": {"type": "integer", "enum": [1, 2, 3]}
    }}}));
    let after = doc(json!({"components": {"schemas": {
        "Level": {"type": "integer", "enum": [1.0, 2, 3.0]}
    }}}));
    let diff = compute_contract_diff(&before, &after).unwrap();
    assert!(diff.schemas.changed.is_empty());

    let widened = doc(json!({"components": {"schemas": {
        "Level": {"type": "integer", "enum": [1.5, 2, 3]}
    }}}));
    let diff = compute_contract_diff(&before, &widened).unwrap();
    assert_eq!(diff.schemas.changed, vec!["Level"]);
}

// S5: renaming a schema is remove + add, and every referrer changes
#[test]
fn test_schema_rename_changes_referrers() {
    let diff = compute_contract_diff(&doc(user_api("User")), &doc(user_api("Account"))).unwrap();
    assert_eq!(diff.schemas.removed, vec!["User"]);
    assert_eq!(diff.schemas.added, vec!["Account"]);
    assert!(diff.schemas.changed.is_empty());
    assert_eq!(
        diff.operations.changed,
        vec![key(HttpMethod::Get, "/users/{id}")]
    );
    assert!(!diff
        .operations
        .changed
        .contains(&key(HttpMethod::Get, "/health")));
}

// S6: the text report truncates at the limit
#[test]
fn test_limit_truncates_added_operations() {
    let before = doc(json!({"paths": {}}));
    let after = doc(json!({"paths": {
        "/a": {"get": {}},
        "/b": {"get": {}},
        "/c": {"get": {}}
    }}));
    let diff = compute_contract_diff(&before, &after).unwrap();
    let report = render_human_summary(&diff, 1);
    assert!(report.contains("Operations: +3 -0 ~0"));
    assert!(report.contains("Added operations:\n  - GET /a\n  ... and 2 more\n"));
    assert!(!report.contains("GET /b"));
}

// ---------------------------------------------------------------------------
// Further properties
// ---------------------------------------------------------------------------

#[test]
fn test_swapping_inputs_swaps_added_and_removed() {
    let a = doc(user_api("User"));
    let b = doc(user_api("Account"));
    let forward = compute_contract_diff(&a, &b).unwrap();
    let backward = compute_contract_diff(&b, &a).unwrap();
    assert_eq!(forward.operations.added, backward.operations.removed);
    assert_eq!(forward.operations.removed, backward.operations.added);
    assert_eq!(forward.operations.changed, backward.operations.changed);
    assert_eq!(forward.schemas.added, backward.schemas.removed);
    assert_eq!(forward.schemas.removed, backward.schemas.added);
    assert_eq!(forward.fingerprints.before, backward.fingerprints.after);
}

#[test]
fn test_self_diff_is_empty() {
    let a = doc(user_api("User"));
    let diff = compute_contract_diff(&a, &a).unwrap();
    assert!(diff.is_empty());
    assert!(render_human_summary(&diff, 200).contains("No differences found."));
}

#[test]
fn test_documentation_only_edits_are_invisible() {
    let before = doc(json!({
        "paths": {"/foo": {"get": {
            "operationId": "getFoo",
            "summary": "Get foo",
            "parameters": [{"name": "q", "in": "query", "description": "query", "schema": {"type": "string"}}],
            "responses": {"200": {"description": "ok"}}
        }}},
        "components": {"schemas": {"Foo": {"type": "string", "title": "Foo", "example": "x"}}}
    }));
    let after = doc(json!({
        "paths": {"/foo": {"get": {
            "operationId": "getFoo",
            "summary": "Fetch a foo",
            "description": "Longer prose",
            "parameters": [{"name": "q", "in": "query", "schema": {"type": "string", "x-note": 1}}],
            "responses": {"200": {"description": "Success"}}
        }}},
        "components": {"schemas": {"Foo": {"type": "string", "description": "A foo"}}}
    }));
    assert!(compute_contract_diff(&before, &after).unwrap().is_empty());
}

#[test]
fn test_tag_order_is_not_a_change_but_required_order_is() {
    let tagged = |tags: Value| doc(json!({"paths": {"/foo": {"get": {"tags": tags}}}}));
    let diff = compute_contract_diff(&tagged(json!(["a", "b"])), &tagged(json!(["b", "a"]))).unwrap();
    assert!(diff.is_empty());

    let required = |req: Value| {
        doc(json!({"components": {"schemas": {"S": {"type": "object", "required": req}}}}))
    };
    let diff =
        compute_contract_diff(&required(json!(["a", "b"])), &required(json!(["b", "a"]))).unwrap();
    assert_eq!(diff.schemas.changed, vec!["S"]);
}

#[test]
fn test_path_level_parameter_change_affects_every_method() {
    let with_param = |required: bool| {
        doc(json!({"paths": {"/items/{id}": {
            "parameters": [{"name": "id", "in": "path", "required": required, "schema": {"type": "string"}}],
            "get": {},
            "delete": {}
        }}}))
    };
    let diff = compute_contract_diff(&with_param(true), &with_param(false)).unwrap();
    assert_eq!(
        diff.operations.changed,
        vec![
            key(HttpMethod::Delete, "/items/{id}"),
            key(HttpMethod::Get, "/items/{id}")
        ]
    );
}

#[test]
fn test_missing_required_defaults_to_false() {
    let body = |body: Value| doc(json!({"paths": {"/foo": {"post": {"requestBody": body}}}}));
    let diff = compute_contract_diff(
        &body(json!({"content": {}})),
        &body(json!({"required": false, "content": {}})),
    )
    .unwrap();
    assert!(diff.is_empty());
}

#[test]
fn test_absent_containers_are_not_errors() {
    let empty = doc(json!({"openapi": "3.1.0"}));
    let diff = compute_contract_diff(&empty, &empty).unwrap();
    assert!(diff.is_empty());
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

#[test]
fn test_load_from_path_round_trip() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("openapi.json");
    std::fs::write(&path, serde_json::to_vec(&user_api("User")).unwrap()).unwrap();
    let loaded = SpecDocument::from_path(&path).unwrap();
    assert_eq!(loaded, doc(user_api("User")));
}

#[test]
fn test_load_invalid_json_is_parse_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, b"{\"paths\": ").unwrap();
    let err = SpecDocument::from_path(&path).unwrap_err();
    assert!(matches!(err, ApiDiffError::InvalidJson { .. }));
}

#[test]
fn test_load_missing_file_is_input_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let err = SpecDocument::from_path(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, ApiDiffError::FileRead { .. }));
}
