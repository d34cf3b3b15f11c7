//! Contract diff engine.
//!
//! Compares the signature maps of two OpenAPI documents and produces a
//! structured, deterministic diff suitable for human review or CI tooling.
//!
//! ## Entry point
//!
//! ```ignore
//! use apidiff_core::diff::engine::compute_contract_diff;
//!
//! let diff = compute_contract_diff(&before, &after)?;
//! let summary = apidiff_core::diff::human_summary::render_human_summary(&diff, 200);
//! ```
//!
//! ## Guarantees
//!
//! - **Determinism**: every list is sorted, so identical inputs produce
//!   byte-identical reports regardless of source key order.
//! - **Symmetry**: swapping the inputs swaps `added` and `removed` and keeps
//!   the `changed` key set.
//! - **Reference opacity**: `$ref` targets are never expanded; a renamed
//!   schema shows up as a changed reference string on every referrer.

pub mod engine;
pub mod human_summary;
pub mod json_summary;
pub mod model;

pub use engine::{compute_contract_diff, diff_signature_maps};
pub use human_summary::{render_human_summary, DEFAULT_LIMIT};
pub use json_summary::render_json_summary;
pub use model::{ContractDiff, ContractFingerprints, DiffCounts, DiffResult};
