//! Human-readable text report for contract diffs.

use crate::diff::model::{ContractDiff, DiffResult};
use std::fmt::Display;

/// Default number of entries listed per section before truncating.
pub const DEFAULT_LIMIT: usize = 200;

const HEADER: &str = "OpenAPI contract diff";

/// Render a text summary of a [`ContractDiff`].
///
/// Layout: a header line, one counts line each for operations and schemas,
/// a blank line, then one titled block per non-empty list. Each block lists
/// at most `limit` entries followed by `... and N more` when truncated. When
/// every list is empty a single "no differences" line replaces the blocks.
pub fn render_human_summary(diff: &ContractDiff, limit: usize) -> String {
    let mut out = String::new();

    out.push_str(HEADER);
    out.push('\n');
    push_counts(&mut out, "Operations", &diff.operations);
    push_counts(&mut out, "Schemas", &diff.schemas);
    out.push('\n');

    if diff.is_empty() {
        out.push_str("No differences found.\n");
        return out;
    }

    push_section(&mut out, "Added operations:", &diff.operations.added, limit);
    push_section(&mut out, "Removed operations:", &diff.operations.removed, limit);
    push_section(
        &mut out,
        "Changed operations (signature changed):",
        &diff.operations.changed,
        limit,
    );
    push_section(&mut out, "Added schemas:", &diff.schemas.added, limit);
    push_section(&mut out, "Removed schemas:", &diff.schemas.removed, limit);
    push_section(&mut out, "Changed schemas:", &diff.schemas.changed, limit);

    out
}

fn push_counts<K>(out: &mut String, label: &str, result: &DiffResult<K>) {
    let counts = result.counts();
    out.push_str(&format!(
        "{label}: +{} -{} ~{}\n",
        counts.added, counts.removed, counts.changed
    ));
}

fn push_section<K: Display>(out: &mut String, title: &str, items: &[K], limit: usize) {
    if items.is_empty() {
        return;
    }
    out.push_str(title);
    out.push('\n');
    for item in items.iter().take(limit) {
        out.push_str(&format!("  - {item}\n"));
    }
    if items.len() > limit {
        out.push_str(&format!("  ... and {} more\n", items.len() - limit));
    }
    out.push('\n');
}
