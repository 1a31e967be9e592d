//! Human-readable summary renderer for reconciliation results.

use crate::model::{Classification, FileRecord};
use crate::result::model::{ClassifiedRecord, ReconciliationResult};

/// Render a Markdown summary of a [`ReconciliationResult`].
///
/// Intended for review in a terminal or a ticket. It is informational only;
/// the structured result is the source of truth.
pub fn render_human_summary(result: &ReconciliationResult) -> String {
    let mut out = String::new();

    out.push_str("## Snapshot Differential\n\n");

    // Provenance
    for (label, source) in ["Before", "After"].iter().zip(result.sources()) {
        out.push_str(&format!("- **{}**: `{}`\n", label, source));
    }
    out.push('\n');

    // Counts
    let summary = result.summary();
    out.push_str("| Category | Count |\n|---|---|\n");
    for classification in Classification::ALL {
        out.push_str(&format!(
            "| {} | {} |\n",
            classification,
            summary.count(classification)
        ));
    }
    out.push_str(&format!("| unchanged | {} |\n\n", summary.unchanged));

    if summary.duplicate_keys > 0 {
        out.push_str(&format!(
            "_{} duplicate identity key(s) were overwritten while indexing._\n\n",
            summary.duplicate_keys
        ));
    }

    if summary.total() == 0 {
        out.push_str("_No differences detected._\n");
        return out;
    }

    for classification in Classification::ALL {
        let entries: Vec<&ClassifiedRecord> = result.with_classification(classification).collect();
        if entries.is_empty() {
            continue;
        }
        out.push_str(&format!("### {} ({})\n\n", title(classification), entries.len()));
        for entry in entries {
            out.push_str(&format!("- {}\n", describe(entry)));
        }
        out.push('\n');
    }

    out
}

fn title(classification: Classification) -> &'static str {
    match classification {
        Classification::New => "New",
        Classification::Deleted => "Deleted",
        Classification::Renamed => "Renamed",
        Classification::Relocated => "Relocated",
        Classification::Modified => "Modified",
        Classification::Changed => "Changed",
    }
}

fn location(record: &FileRecord) -> String {
    let name = record.filename.as_deref().unwrap_or("?");
    let inode = record
        .inode
        .map(|i| i.to_string())
        .unwrap_or_else(|| "?".to_string());
    match record.partition {
        Some(p) => format!("`{}` (partition {}, inode {})", name, p, inode),
        None => format!("`{}` (inode {})", name, inode),
    }
}

fn describe(entry: &ClassifiedRecord) -> String {
    let mut line = match (entry.prior(), entry.record()) {
        (Some(prior), Some(record))
            if prior.inode != record.inode || prior.filename != record.filename =>
        {
            format!("{} → {}", location(prior), location(record))
        }
        (_, Some(record)) => location(record),
        (Some(prior), None) => location(prior),
        (None, None) => "?".to_string(),
    };
    if let Some(diffs) = entry.diffs().filter(|d| !d.is_empty()) {
        let names: Vec<&str> = diffs.iter().collect();
        line.push_str(&format!(": {}", names.join(", ")));
    }
    line
}
