//! Resolved run configuration.

use apidiff_core::diff::DEFAULT_LIMIT;
use clap::ValueEnum;
use std::path::PathBuf;

pub const DEFAULT_BEFORE: &str = "openapi/openapi.before.json";
pub const DEFAULT_AFTER: &str = "openapi/openapi.after.json";

/// Report renderer selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text report, truncated per section at `--limit`
    Text,
    /// Complete JSON report
    Json,
}

/// Everything one diff run needs, with defaults applied.
#[derive(Debug, Clone, PartialEq)]
pub struct DiffConfig {
    pub before: PathBuf,
    pub after: PathBuf,
    pub limit: usize,
    pub format: OutputFormat,
}

/// Parse a `--limit` value; anything that is not a non-negative integer
/// falls back to [`DEFAULT_LIMIT`].
pub fn parse_limit(raw: Option<&str>) -> usize {
    raw.and_then(|s| s.trim().parse::<usize>().ok())
        .unwrap_or(DEFAULT_LIMIT)
}
