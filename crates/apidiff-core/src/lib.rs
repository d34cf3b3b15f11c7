//! apidiff core - OpenAPI contract-diff engine
//!
//! This crate compares two OpenAPI 3.1 JSON documents and reports which
//! operations and component schemas were added, removed, or structurally
//! changed. It provides:
//! - Order-insensitive canonical JSON serialization for equality checks
//! - Schema simplification onto a fixed, contract-bearing subset of keys
//! - Operation and component-schema signature extraction
//! - A generic added/removed/changed diff over signature maps
//! - Text and JSON report rendering
//!
//! ```no_run
//! use apidiff_core::{compute_contract_diff, render_human_summary, SpecDocument};
//!
//! let before = SpecDocument::from_path("openapi/openapi.before.json")?;
//! let after = SpecDocument::from_path("openapi/openapi.after.json")?;
//! let diff = compute_contract_diff(&before, &after)?;
//! print!("{}", render_human_summary(&diff, 200));
//! # Ok::<(), apidiff_core::ApiDiffError>(())
//! ```

pub mod canonical;
pub mod diff;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod signature;

// Re-export commonly used types
pub use canonical::canonicalize;
pub use diff::{
    compute_contract_diff, diff_signature_maps, render_human_summary, render_json_summary,
    ContractDiff, DiffResult,
};
pub use errors::{ApiDiffError, ExError, ExErrorKind, Result};
pub use model::{HttpMethod, OperationKey, SpecDocument};
pub use signature::{extract_operations, extract_schemas, simplify_schema};
