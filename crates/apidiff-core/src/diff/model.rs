//! Contract diff output types.
//!
//! All lists are sorted for deterministic serialization.

use crate::model::operation::OperationKey;
use serde::Serialize;

/// Keys added, removed, or changed between two signature maps.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiffResult<K> {
    /// Keys in the after map but not the before map
    pub added: Vec<K>,
    /// Keys in the before map but not the after map
    pub removed: Vec<K>,
    /// Keys in both maps whose canonical signatures differ
    pub changed: Vec<K>,
}

impl<K> DiffResult<K> {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.changed.is_empty()
    }

    pub fn counts(&self) -> DiffCounts {
        DiffCounts {
            added: self.added.len(),
            removed: self.removed.len(),
            changed: self.changed.len(),
        }
    }
}

impl<K> Default for DiffResult<K> {
    fn default() -> Self {
        Self {
            added: Vec::new(),
            removed: Vec::new(),
            changed: Vec::new(),
        }
    }
}

/// Sizes of the three lists of a [`DiffResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DiffCounts {
    pub added: usize,
    pub removed: usize,
    pub changed: usize,
}

/// SHA256 of each side's canonical signature set (operations and schemas).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContractFingerprints {
    pub before: String,
    pub after: String,
}

/// The full diff between two OpenAPI documents.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContractDiff {
    pub operations: DiffResult<OperationKey>,
    pub schemas: DiffResult<String>,
    pub fingerprints: ContractFingerprints,
}

impl ContractDiff {
    /// True when no operation or schema was added, removed, or changed.
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty() && self.schemas.is_empty()
    }
}
