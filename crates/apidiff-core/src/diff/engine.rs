//! Contract diff computation engine.
//!
//! [`diff_signature_maps`] is the generic added/removed/changed algorithm;
//! [`compute_contract_diff`] runs it once over operations and once over
//! component schemas.

use crate::canonical::{canonical_digest, canonicalize_serializable};
use crate::diff::model::{ContractDiff, ContractFingerprints, DiffResult};
use crate::errors::Result;
use crate::model::document::SpecDocument;
use crate::signature::{extract_operations, extract_schemas, OperationMap, SchemaMap};
use crate::{log_op_end, log_op_error, log_op_start};
use serde::Serialize;
use std::collections::BTreeMap;

/// Everything one document contributes to the diff.
#[derive(Serialize)]
struct ContractSurface<'a> {
    operations: &'a OperationMap,
    schemas: &'a SchemaMap,
}

/// Compute the key-level diff between two signature maps.
///
/// - `added`: keys in `after` but not `before`
/// - `removed`: keys in `before` but not `after`
/// - `changed`: keys in both whose canonical signatures differ
///
/// All three lists come back sorted.
///
/// # Errors
///
/// Returns `ApiDiffError::Serialization` if a signature cannot be canonicalized.
pub fn diff_signature_maps<K, V>(
    before: &BTreeMap<K, V>,
    after: &BTreeMap<K, V>,
) -> Result<DiffResult<K>>
where
    K: Ord + Clone,
    V: Serialize,
{
    log_op_start!("diff_signature_maps");
    let start = std::time::Instant::now();

    let result = diff_signature_maps_impl(before, after).map_err(|e| {
        log_op_error!(
            "diff_signature_maps",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "diff_signature_maps",
        duration_ms = start.elapsed().as_millis() as u64,
        added = result.added.len() as u64,
        removed = result.removed.len() as u64,
        changed = result.changed.len() as u64
    );

    Ok(result)
}

fn diff_signature_maps_impl<K, V>(
    before: &BTreeMap<K, V>,
    after: &BTreeMap<K, V>,
) -> Result<DiffResult<K>>
where
    K: Ord + Clone,
    V: Serialize,
{
    // BTreeMap iteration is sorted, so every list below is already in order.
    let added: Vec<K> = after
        .keys()
        .filter(|k| !before.contains_key(*k))
        .cloned()
        .collect();
    let removed: Vec<K> = before
        .keys()
        .filter(|k| !after.contains_key(*k))
        .cloned()
        .collect();

    let mut changed: Vec<K> = Vec::new();
    for (key, before_sig) in before {
        if let Some(after_sig) = after.get(key) {
            if canonicalize_serializable(before_sig)? != canonicalize_serializable(after_sig)? {
                changed.push(key.clone());
            }
        }
    }

    Ok(DiffResult {
        added,
        removed,
        changed,
    })
}

/// Compute the full contract diff between two documents.
///
/// # Errors
///
/// Returns `ApiDiffError::Serialization` if a signature cannot be canonicalized.
pub fn compute_contract_diff(before: &SpecDocument, after: &SpecDocument) -> Result<ContractDiff> {
    log_op_start!("compute_contract_diff");
    let start = std::time::Instant::now();

    let result = compute_contract_diff_impl(before, after).map_err(|e| {
        log_op_error!(
            "compute_contract_diff",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "compute_contract_diff",
        duration_ms = start.elapsed().as_millis() as u64,
        operation_count = (result.operations.added.len()
            + result.operations.removed.len()
            + result.operations.changed.len()) as u64,
        schema_count = (result.schemas.added.len()
            + result.schemas.removed.len()
            + result.schemas.changed.len()) as u64
    );

    Ok(result)
}

fn compute_contract_diff_impl(
    before: &SpecDocument,
    after: &SpecDocument,
) -> Result<ContractDiff> {
    let before_ops = extract_operations(before);
    let after_ops = extract_operations(after);
    let before_schemas = extract_schemas(before);
    let after_schemas = extract_schemas(after);

    let operations = diff_signature_maps(&before_ops, &after_ops)?;
    let schemas = diff_signature_maps(&before_schemas, &after_schemas)?;

    let fingerprints = ContractFingerprints {
        before: canonical_digest(&ContractSurface {
            operations: &before_ops,
            schemas: &before_schemas,
        })?,
        after: canonical_digest(&ContractSurface {
            operations: &after_ops,
            schemas: &after_schemas,
        })?,
    };

    Ok(ContractDiff {
        operations,
        schemas,
        fingerprints,
    })
}
