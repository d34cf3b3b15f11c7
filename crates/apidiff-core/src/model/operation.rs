//! Operation identity and signature model.

use crate::model::schema::{Reference, SimplifiedSchema};
use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

/// The HTTP methods recognized on an OpenAPI path item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Options,
    Head,
    Trace,
}

impl HttpMethod {
    /// Every recognized method, in path-item scan order.
    pub const ALL: [HttpMethod; 8] = [
        HttpMethod::Get,
        HttpMethod::Post,
        HttpMethod::Put,
        HttpMethod::Patch,
        HttpMethod::Delete,
        HttpMethod::Options,
        HttpMethod::Head,
        HttpMethod::Trace,
    ];

    /// The path-item field name (lower case).
    pub fn field_name(&self) -> &'static str {
        match self {
            HttpMethod::Get => "get",
            HttpMethod::Post => "post",
            HttpMethod::Put => "put",
            HttpMethod::Patch => "patch",
            HttpMethod::Delete => "delete",
            HttpMethod::Options => "options",
            HttpMethod::Head => "head",
            HttpMethod::Trace => "trace",
        }
    }

    /// The upper-case form used in operation keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Options => "OPTIONS",
            HttpMethod::Head => "HEAD",
            HttpMethod::Trace => "TRACE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One (method, path) pair, rendered as `"METHOD path"`.
///
/// Ordering is lexicographic on the rendered form. No method name is a
/// prefix of another, so comparing `(method, path)` component-wise agrees
/// with comparing the rendered strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OperationKey {
    pub method: HttpMethod,
    pub path: String,
}

impl OperationKey {
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
        }
    }
}

impl Ord for OperationKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.method
            .as_str()
            .cmp(other.method.as_str())
            .then_with(|| self.path.cmp(&other.path))
    }
}

impl PartialOrd for OperationKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for OperationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path)
    }
}

impl Serialize for OperationKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Media type → simplified schema, iterated in sorted media-type order.
pub type Content = BTreeMap<String, MediaTypeSignature>;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MediaTypeSignature {
    pub schema: Option<SimplifiedSchema>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParameterSignature {
    Ref(Reference),
    Inline {
        name: Option<String>,
        #[serde(rename = "in")]
        location: Option<String>,
        required: bool,
        schema: Option<SimplifiedSchema>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RequestBodySignature {
    Ref(Reference),
    Inline { required: bool, content: Content },
}

/// The response `description` is deliberately not part of the signature.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResponseSignature {
    Ref(Reference),
    Inline { content: Content },
}

/// The comparable projection of one operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationSignature {
    pub operation_id: Option<String>,
    /// Sorted
    pub tags: Vec<String>,
    /// Path-level parameters first, then operation-level
    pub parameters: Vec<ParameterSignature>,
    pub request_body: Option<RequestBodySignature>,
    pub responses: BTreeMap<String, ResponseSignature>,
}
