//! Simplified schema model.

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// A `$ref` pointer, compared only by its reference string.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reference {
    #[serde(rename = "$ref")]
    pub reference: String,
}

impl Reference {
    pub fn new(reference: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
        }
    }
}

/// A schema projected onto its contract-bearing subset.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SimplifiedSchema {
    /// `{ "$ref": ... }`; the target is never expanded
    Ref(Reference),
    /// An inline schema object reduced to the allow-listed keys
    Shape(Box<SchemaShape>),
    /// A non-object schema value (e.g. the boolean schema `true`), kept verbatim
    Opaque(Value),
}

/// Allow-listed keys of an inline schema object.
///
/// Absent keys are omitted from the serialized form, so a missing key and an
/// explicit key always canonicalize differently.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SchemaShape {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<Value>,
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nullable: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<SimplifiedSchema>>,
    #[serde(rename = "oneOf", skip_serializing_if = "Option::is_none")]
    pub one_of: Option<Vec<Option<SimplifiedSchema>>>,
    #[serde(rename = "anyOf", skip_serializing_if = "Option::is_none")]
    pub any_of: Option<Vec<Option<SimplifiedSchema>>>,
    #[serde(rename = "allOf", skip_serializing_if = "Option::is_none")]
    pub all_of: Option<Vec<Option<SimplifiedSchema>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<BTreeMap<String, Option<SimplifiedSchema>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ref_serializes_as_dollar_ref() {
        let schema = SimplifiedSchema::Ref(Reference::new("#/components/schemas/User"));
        assert_eq!(
            serde_json::to_value(&schema).unwrap(),
            json!({"$ref": "#/components/schemas/User"})
        );
    }

    #[test]
    fn test_empty_shape_serializes_as_empty_object() {
        let schema = SimplifiedSchema::Shape(Box::default());
        assert_eq!(serde_json::to_value(&schema).unwrap(), json!({}));
    }

    #[test]
    fn test_shape_uses_openapi_key_names() {
        let shape = SchemaShape {
            schema_type: Some(json!("string")),
            enum_values: Some(json!(["a", "b"])),
            one_of: Some(vec![None]),
            ..SchemaShape::default()
        };
        assert_eq!(
            serde_json::to_value(SimplifiedSchema::Shape(Box::new(shape))).unwrap(),
            json!({"type": "string", "enum": ["a", "b"], "oneOf": [null]})
        );
    }

    #[test]
    fn test_opaque_is_verbatim() {
        let schema = SimplifiedSchema::Opaque(json!(true));
        assert_eq!(serde_json::to_value(&schema).unwrap(), json!(true));
    }
}
