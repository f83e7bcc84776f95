//! Activity feed CSV export parser
//!
//! Expected header (order free, `subtitle`, `detail` and `date` optional):
//!   avatar,title,subtitle,amount,detail,date
//!   boots.com,Boots,Card payment,-£100.00,,2026-03-01

use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

use crate::types::{ActivityRow, IngestReport, amount_regex};

/// Parse a CSV feed export from disk.
pub fn parse_activity_csv(path: impl AsRef<Path>) -> Result<IngestReport> {
    let path = path.as_ref();
    let rdr = reader_builder()
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;
    let report = parse_reader(rdr).with_context(|| format!("parsing {}", path.display()))?;
    tracing::debug!(
        path = %path.display(),
        entries = report.entries.len(),
        rejected = report.rejected.len(),
        "parsed activity csv"
    );
    Ok(report)
}

/// Parse CSV feed text.
pub fn parse_activity_csv_str(text: &str) -> Result<IngestReport> {
    parse_reader(reader_builder().from_reader(text.as_bytes()))
}

fn reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder.trim(csv::Trim::All).flexible(true);
    builder
}

fn parse_reader<R: Read>(mut rdr: csv::Reader<R>) -> Result<IngestReport> {
    let amount_re = amount_regex()?;
    let mut report = IngestReport::default();

    for (i, result) in rdr.deserialize::<ActivityRow>().enumerate() {
        let row = result.with_context(|| format!("reading row {}", i + 1))?;
        report.push(i + 1, row, &amount_re);
    }

    Ok(report)
}
