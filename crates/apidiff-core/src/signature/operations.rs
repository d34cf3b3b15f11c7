//! Operation extractor.
//!
//! Walks `paths.*.<method>` and builds one [`OperationSignature`] per
//! (method, path) that exists in the document. Missing methods never produce
//! entries.

use crate::model::document::SpecDocument;
use crate::model::operation::{
    Content, HttpMethod, MediaTypeSignature, OperationKey, OperationSignature, ParameterSignature,
    RequestBodySignature, ResponseSignature,
};
use crate::signature::simplify::{reference_of, simplify_optional};
use crate::{log_op_end, log_op_start};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Operation key → signature for one document.
pub type OperationMap = BTreeMap<OperationKey, OperationSignature>;

/// Extract every operation signature from `doc`.
pub fn extract_operations(doc: &SpecDocument) -> OperationMap {
    log_op_start!("extract_operations");
    let start = std::time::Instant::now();

    let mut operations = OperationMap::new();
    for (path, item) in doc.paths() {
        let Some(item) = item.as_object() else {
            tracing::debug!(path, "skipping non-object path item");
            continue;
        };
        let shared = parameter_list(item);
        for method in HttpMethod::ALL {
            let Some(operation) = item.get(method.field_name()).and_then(Value::as_object) else {
                continue;
            };
            operations.insert(
                OperationKey::new(method, path),
                operation_signature(shared, operation),
            );
        }
    }

    log_op_end!(
        "extract_operations",
        duration_ms = start.elapsed().as_millis() as u64,
        operation_count = operations.len() as u64
    );
    operations
}

fn parameter_list(obj: &Map<String, Value>) -> &[Value] {
    obj.get("parameters")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

fn operation_signature(shared: &[Value], operation: &Map<String, Value>) -> OperationSignature {
    let mut tags: Vec<String> = operation
        .get("tags")
        .and_then(Value::as_array)
        .map(|tags| {
            tags.iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();
    tags.sort();

    let parameters = shared
        .iter()
        .chain(parameter_list(operation))
        .map(parameter_signature)
        .collect();

    let responses = operation
        .get("responses")
        .and_then(Value::as_object)
        .map(|responses| {
            responses
                .iter()
                .map(|(status, response)| (status.clone(), response_signature(response)))
                .collect()
        })
        .unwrap_or_default();

    OperationSignature {
        operation_id: operation
            .get("operationId")
            .and_then(Value::as_str)
            .map(str::to_string),
        tags,
        parameters,
        request_body: operation
            .get("requestBody")
            .filter(|body| !body.is_null())
            .map(request_body_signature),
        responses,
    }
}

fn string_field(obj: &Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key).and_then(Value::as_str).map(str::to_string)
}

/// Only a JSON `true` counts; `"yes"`, `1` and other truthy values read as `false`.
fn required_flag(obj: &Map<String, Value>) -> bool {
    obj.get("required").and_then(Value::as_bool).unwrap_or(false)
}

fn parameter_signature(parameter: &Value) -> ParameterSignature {
    let empty = Map::new();
    let obj = parameter.as_object().unwrap_or(&empty);
    if let Some(reference) = reference_of(obj) {
        return ParameterSignature::Ref(reference);
    }
    ParameterSignature::Inline {
        name: string_field(obj, "name"),
        location: string_field(obj, "in"),
        required: required_flag(obj),
        schema: simplify_optional(obj.get("schema")),
    }
}

fn request_body_signature(body: &Value) -> RequestBodySignature {
    let empty = Map::new();
    let obj = body.as_object().unwrap_or(&empty);
    if let Some(reference) = reference_of(obj) {
        return RequestBodySignature::Ref(reference);
    }
    RequestBodySignature::Inline {
        required: required_flag(obj),
        content: content_signature(obj),
    }
}

fn response_signature(response: &Value) -> ResponseSignature {
    let empty = Map::new();
    let obj = response.as_object().unwrap_or(&empty);
    if let Some(reference) = reference_of(obj) {
        return ResponseSignature::Ref(reference);
    }
    ResponseSignature::Inline {
        content: content_signature(obj),
    }
}

/// A missing or non-object `content` reads as an empty map.
fn content_signature(obj: &Map<String, Value>) -> Content {
    obj.get("content")
        .and_then(Value::as_object)
        .map(|content| {
            content
                .iter()
                .map(|(media_type, entry)| {
                    (
                        media_type.clone(),
                        MediaTypeSignature {
                            schema: simplify_optional(entry.get("schema")),
                        },
                    )
                })
                .collect()
        })
        .unwrap_or_default()
}
