//! Parsed OpenAPI document.

use crate::errors::{ApiDiffError, Result};
use crate::{log_op_end, log_op_error, log_op_start};
use serde_json::{Map, Value};
use std::path::Path;

/// The root of a parsed OpenAPI 3.1 JSON document.
///
/// Read-only. Only `paths` and `components.schemas` are ever consulted; a
/// missing or non-object container reads as empty.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecDocument {
    root: Value,
}

impl SpecDocument {
    /// Wrap an already-parsed JSON value.
    pub fn from_value(root: Value) -> Self {
        Self { root }
    }

    /// Parse a document from raw bytes. `origin` names the source in errors.
    ///
    /// # Errors
    ///
    /// Returns `ApiDiffError::InvalidJson` if `bytes` is not valid JSON.
    pub fn from_slice(bytes: &[u8], origin: &str) -> Result<Self> {
        let root: Value =
            serde_json::from_slice(bytes).map_err(|e| ApiDiffError::InvalidJson {
                path: origin.to_string(),
                reason: e.to_string(),
            })?;
        Ok(Self { root })
    }

    /// Read and parse a document from disk.
    ///
    /// # Errors
    ///
    /// - `FileRead` if the file does not exist or cannot be read
    /// - `InvalidJson` if the contents are not valid JSON
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let shown = path.display().to_string();
        log_op_start!("load_document", path = shown.as_str());
        let start = std::time::Instant::now();

        let result = std::fs::read(path)
            .map_err(|e| ApiDiffError::FileRead {
                path: shown.clone(),
                reason: e.to_string(),
            })
            .and_then(|bytes| Self::from_slice(&bytes, &shown))
            .map_err(|e| {
                log_op_error!(
                    "load_document",
                    e.clone(),
                    duration_ms = start.elapsed().as_millis() as u64,
                    path = shown.as_str()
                );
                e
            })?;

        log_op_end!(
            "load_document",
            duration_ms = start.elapsed().as_millis() as u64,
            path = shown.as_str()
        );

        Ok(result)
    }

    /// The raw document root.
    pub fn root(&self) -> &Value {
        &self.root
    }

    /// Path items keyed by path string, sorted by path.
    pub fn paths(&self) -> Vec<(&str, &Value)> {
        sorted_entries(self.root.get("paths").and_then(Value::as_object))
    }

    /// Component schemas keyed by schema name, sorted by name.
    pub fn component_schemas(&self) -> Vec<(&str, &Value)> {
        sorted_entries(
            self.root
                .get("components")
                .and_then(|c| c.get("schemas"))
                .and_then(Value::as_object),
        )
    }
}

fn sorted_entries(map: Option<&Map<String, Value>>) -> Vec<(&str, &Value)> {
    let mut entries: Vec<(&str, &Value)> = map
        .map(|m| m.iter().map(|(k, v)| (k.as_str(), v)).collect())
        .unwrap_or_default();
    entries.sort_by(|a, b| a.0.cmp(b.0));
    entries
}
