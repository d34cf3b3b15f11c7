//! Canonical JSON serialization.
//!
//! Two values that differ only in object-key order serialize to the same
//! text; any difference in array order or in a primitive value yields a
//! different text. Equality of signatures is decided on this form.
//!
//! ## Determinism Guarantees
//!
//! - Object keys are emitted in lexicographic order at every depth
//! - Array element order is preserved (order-sensitive)
//! - Numbers compare by value: an integral float (`1.0`) is written as the
//!   integer (`1`) when it is exactly representable
//! - Other primitives pass through unchanged
//!
//! The key ordering is built explicitly rather than relying on the
//! `serde_json::Map` backing store, so enabling `preserve_order` anywhere in
//! the dependency graph does not change the canonical form.

use crate::errors::Result;
use serde::Serialize;
use serde_json::{Map, Number, Value};
use sha2::{Digest, Sha256};

/// Rewrite `value` so that every object has its keys in sorted order.
fn sort_keys(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            let mut sorted = Map::with_capacity(entries.len());
            for (key, child) in entries {
                sorted.insert(key.clone(), sort_keys(child));
            }
            Value::Object(sorted)
        }
        Value::Array(items) => Value::Array(items.iter().map(sort_keys).collect()),
        Value::Number(n) => Value::Number(normalize_number(n)),
        primitive => primitive.clone(),
    }
}

/// Largest magnitude at which every integer is exactly representable as `f64`.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

fn normalize_number(n: &Number) -> Number {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() <= MAX_SAFE_INTEGER => {
            Number::from(f as i64)
        }
        _ => n.clone(),
    }
}

/// Serialize a JSON value to its canonical text form.
///
/// ## Example
///
/// ```
/// use apidiff_core::canonical::canonicalize;
/// use serde_json::json;
///
/// let a = canonicalize(&json!({"b": 1, "a": {"d": 2, "c": 3}}));
/// let b = canonicalize(&json!({"a": {"c": 3, "d": 2}, "b": 1}));
/// assert_eq!(a, b);
/// ```
pub fn canonicalize(value: &Value) -> String {
    // A `Value` always has string keys, so writing it cannot fail.
    sort_keys(value).to_string()
}

/// Serialize any signature type to its canonical text form.
///
/// # Errors
///
/// Returns `ApiDiffError::Serialization` if `value` cannot be represented as JSON.
pub fn canonicalize_serializable<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let value = serde_json::to_value(value)?;
    Ok(canonicalize(&value))
}

/// Hex-encoded SHA256 digest of the canonical form of `value`.
///
/// # Errors
///
/// Returns `ApiDiffError::Serialization` if `value` cannot be represented as JSON.
pub fn canonical_digest<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let canonical = canonicalize_serializable(value)?;
    Ok(hash_string(&canonical))
}

/// Hash a string using SHA256.
fn hash_string(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    hex::encode(hasher.finalize())
}
