//! Schema extractor.

use crate::model::document::SpecDocument;
use crate::model::schema::SimplifiedSchema;
use crate::signature::simplify::simplify_schema;
use crate::{log_op_end, log_op_start};
use std::collections::BTreeMap;

/// Schema name → simplified schema (`None` for a `null` entry).
pub type SchemaMap = BTreeMap<String, Option<SimplifiedSchema>>;

/// Simplify every entry under `components.schemas`.
///
/// An absent `components.schemas` yields an empty map.
pub fn extract_schemas(doc: &SpecDocument) -> SchemaMap {
    log_op_start!("extract_schemas");
    let start = std::time::Instant::now();

    let schemas: SchemaMap = doc
        .component_schemas()
        .into_iter()
        .map(|(name, schema)| (name.to_string(), simplify_schema(schema)))
        .collect();

    log_op_end!(
        "extract_schemas",
        duration_ms = start.elapsed().as_millis() as u64,
        schema_count = schemas.len() as u64
    );
    schemas
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::schema::Reference;
    use serde_json::json;

    #[test]
    fn test_one_entry_per_component_schema() {
        let doc = SpecDocument::from_value(json!({
            "components": {"schemas": {
                "User": {"type": "object", "description": "a user"},
                "Alias": {"$ref": "#/components/schemas/User"}
            }}
        }));
        let schemas = extract_schemas(&doc);
        assert_eq!(schemas.len(), 2);
        assert_eq!(
            schemas["Alias"],
            Some(SimplifiedSchema::Ref(Reference::new("#/components/schemas/User")))
        );
        assert_eq!(
            serde_json::to_value(&schemas["User"]).unwrap(),
            json!({"type": "object"})
        );
    }

    #[test]
    fn test_absent_components_yields_empty_map() {
        let doc = SpecDocument::from_value(json!({"components": {}}));
        assert!(extract_schemas(&doc).is_empty());
        let doc = SpecDocument::from_value(json!({}));
        assert!(extract_schemas(&doc).is_empty());
    }
}
