//! Feed export parsers

pub mod activity_csv;
pub mod activity_json;

use anyhow::Result;
use std::path::Path;

use crate::types::IngestReport;

/// Parse a feed export, picking the format from the file extension
/// (`.json` is JSON, anything else is CSV).
pub fn parse_activity_file(path: impl AsRef<Path>) -> Result<IngestReport> {
    let path = path.as_ref();
    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));

    if is_json {
        activity_json::parse_activity_json(path)
    } else {
        activity_csv::parse_activity_csv(path)
    }
}
