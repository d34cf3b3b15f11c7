//! Diff command
//!
//! Usage: apidiff [--before <FILE>] [--after <FILE>] [--limit <N>] [--format <text|json>]

use crate::config::{parse_limit, DiffConfig, OutputFormat, DEFAULT_AFTER, DEFAULT_BEFORE};
use apidiff_core::diff::{compute_contract_diff, render_human_summary, render_json_summary};
use apidiff_core::model::SpecDocument;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct DiffArgs {
    /// Path to the old OpenAPI 3.1 JSON document
    #[arg(long, default_value = DEFAULT_BEFORE)]
    pub before: PathBuf,

    /// Path to the new OpenAPI 3.1 JSON document
    #[arg(long, default_value = DEFAULT_AFTER)]
    pub after: PathBuf,

    /// Maximum entries per report section (non-numbers fall back to 200)
    #[arg(long, allow_hyphen_values = true)]
    pub limit: Option<String>,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl From<DiffArgs> for DiffConfig {
    fn from(args: DiffArgs) -> Self {
        DiffConfig {
            limit: parse_limit(args.limit.as_deref()),
            before: args.before,
            after: args.after,
            format: args.format,
        }
    }
}

/// Execute diff command
pub fn execute(args: DiffArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = DiffConfig::from(args);
    tracing::debug!(?config, "resolved diff configuration");

    let before = SpecDocument::from_path(&config.before)?;
    let after = SpecDocument::from_path(&config.after)?;

    let diff = compute_contract_diff(&before, &after)?;

    let report = match config.format {
        OutputFormat::Text => render_human_summary(&diff, config.limit),
        OutputFormat::Json => render_json_summary(&diff)?,
    };
    print!("{}", report);

    Ok(())
}
