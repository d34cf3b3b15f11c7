//! Schema simplifier.
//!
//! Drops everything a schema carries that does not change how the contract
//! behaves (titles, descriptions, examples, vendor extensions) and keeps
//! `type, format, enum, nullable, items, oneOf, anyOf, allOf, properties,
//! required`. Nested schemas are simplified with the same rule at every depth.

use crate::model::schema::{Reference, SchemaShape, SimplifiedSchema};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Read a `$ref` string off an object, if present.
///
/// Any string counts, including the empty string. Siblings of `$ref` are
/// never inspected.
pub(crate) fn reference_of(obj: &Map<String, Value>) -> Option<Reference> {
    obj.get("$ref")
        .and_then(Value::as_str)
        .map(Reference::new)
}

/// Simplify a schema value.
///
/// - `null` yields `None`
/// - an object with a string `$ref` yields [`SimplifiedSchema::Ref`]
/// - any other object yields [`SimplifiedSchema::Shape`] with the allow-listed keys
/// - a non-object value (boolean schema, malformed input) is kept verbatim as
///   [`SimplifiedSchema::Opaque`]
///
/// ## Example
///
/// ```
/// use apidiff_core::signature::simplify_schema;
/// use serde_json::json;
///
/// let with_noise = json!({"type": "string", "title": "Name", "example": "Ada"});
/// let bare = json!({"type": "string"});
/// assert_eq!(simplify_schema(&with_noise), simplify_schema(&bare));
/// ```
pub fn simplify_schema(schema: &Value) -> Option<SimplifiedSchema> {
    match schema {
        Value::Null => None,
        Value::Object(obj) => Some(match reference_of(obj) {
            Some(reference) => SimplifiedSchema::Ref(reference),
            None => SimplifiedSchema::Shape(Box::new(simplify_shape(obj))),
        }),
        other => Some(SimplifiedSchema::Opaque(other.clone())),
    }
}

/// Simplify an optional schema slot (absent and `null` both yield `None`).
pub(crate) fn simplify_optional(schema: Option<&Value>) -> Option<SimplifiedSchema> {
    schema.and_then(simplify_schema)
}

fn simplify_shape(obj: &Map<String, Value>) -> SchemaShape {
    SchemaShape {
        schema_type: obj.get("type").cloned(),
        format: obj.get("format").cloned(),
        enum_values: obj.get("enum").cloned(),
        nullable: obj.get("nullable").cloned(),
        items: simplify_optional(obj.get("items")).map(Box::new),
        one_of: simplify_list(obj, "oneOf"),
        any_of: simplify_list(obj, "anyOf"),
        all_of: simplify_list(obj, "allOf"),
        properties: simplify_properties(obj),
        required: obj.get("required").cloned(),
    }
}

fn simplify_list(obj: &Map<String, Value>, key: &str) -> Option<Vec<Option<SimplifiedSchema>>> {
    match obj.get(key)? {
        Value::Array(entries) => Some(entries.iter().map(simplify_schema).collect()),
        other => {
            tracing::debug!(key, found = %other, "dropping non-array schema combinator");
            None
        }
    }
}

fn simplify_properties(
    obj: &Map<String, Value>,
) -> Option<BTreeMap<String, Option<SimplifiedSchema>>> {
    match obj.get("properties")? {
        Value::Object(props) => Some(
            props
                .iter()
                .map(|(name, schema)| (name.clone(), simplify_schema(schema)))
                .collect(),
        ),
        other => {
            tracing::debug!(found = %other, "dropping non-object schema properties");
            None
        }
    }
}
