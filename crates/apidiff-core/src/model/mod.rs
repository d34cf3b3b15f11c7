//! Domain model for contract diffing.
//!
//! - [`SpecDocument`]: the parsed, read-only OpenAPI document
//! - [`HttpMethod`] / [`OperationKey`]: identity of one operation
//! - [`OperationSignature`] / [`SimplifiedSchema`]: the comparable projections

pub mod document;
pub mod operation;
pub mod schema;

pub use document::SpecDocument;
pub use operation::{
    Content, HttpMethod, MediaTypeSignature, OperationKey, OperationSignature, ParameterSignature,
    RequestBodySignature, ResponseSignature,
};
pub use schema::{Reference, SchemaShape, SimplifiedSchema};
