//! Activity feed JSON export parser: an array of row objects with the same
//! keys as the CSV export.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::types::{ActivityRow, IngestReport, amount_regex};

/// Parse a JSON feed export from disk.
pub fn parse_activity_json(path: impl AsRef<Path>) -> Result<IngestReport> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    parse_activity_json_str(&text).with_context(|| format!("parsing {}", path.display()))
}

/// Parse JSON feed text.
pub fn parse_activity_json_str(text: &str) -> Result<IngestReport> {
    let rows: Vec<ActivityRow> = serde_json::from_str(text).context("decoding activity rows")?;
    let amount_re = amount_regex()?;

    let mut report = IngestReport::default();
    for (i, row) in rows.into_iter().enumerate() {
        report.push(i + 1, row, &amount_re);
    }
    Ok(report)
}
