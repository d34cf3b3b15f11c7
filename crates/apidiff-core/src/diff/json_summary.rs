//! Machine-readable JSON report for contract diffs.

use crate::diff::model::ContractDiff;
use crate::errors::Result;

/// Render a [`ContractDiff`] as pretty-printed JSON.
///
/// Lists are complete (no truncation) and sorted. The document shape is
/// `{"operations": {added, removed, changed}, "schemas": {..}, "fingerprints": {before, after}}`.
///
/// # Errors
///
/// Returns `ApiDiffError::Serialization` if the diff cannot be serialized.
pub fn render_json_summary(diff: &ContractDiff) -> Result<String> {
    let mut out = serde_json::to_string_pretty(diff)?;
    out.push('\n');
    Ok(out)
}
