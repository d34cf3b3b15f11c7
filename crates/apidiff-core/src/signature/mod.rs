//! Signature extraction.
//!
//! Projects verbose OpenAPI objects onto comparable signatures:
//!
//! - [`simplify_schema`] keeps only the contract-bearing schema keys
//! - [`extract_operations`] builds one [`OperationSignature`] per (method, path)
//! - [`extract_schemas`] simplifies every entry of `components.schemas`
//!
//! [`OperationSignature`]: crate::model::OperationSignature

pub mod operations;
pub mod schemas;
pub mod simplify;

pub use operations::{extract_operations, OperationMap};
pub use schemas::{extract_schemas, SchemaMap};
pub use simplify::simplify_schema;
