use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use sling_core::TransactionRecord;

use crate::error::RowError;

/// One row as it appears in a feed export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityRow {
    pub avatar: String,
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    pub amount: String,
    #[serde(default)]
    pub detail: String,
    #[serde(default)]
    pub date: Option<String>,
}

/// A validated feed entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub date: Option<NaiveDate>,
    pub record: TransactionRecord,
}

/// Output of a feed parser: accepted entries plus skipped rows (1-based row
/// number, reason)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IngestReport {
    pub entries: Vec<ActivityEntry>,
    pub rejected: Vec<(usize, RowError)>,
}

impl IngestReport {
    pub fn records(&self) -> Vec<TransactionRecord> {
        self.entries.iter().map(|e| e.record.clone()).collect()
    }

    /// Keep only entries dated on or after `since`. Undated entries are kept.
    pub fn since(mut self, since: NaiveDate) -> Self {
        self.entries.retain(|e| e.date.is_none_or(|d| d >= since));
        self
    }

    pub(crate) fn push(&mut self, row_number: usize, row: ActivityRow, amount_re: &Regex) {
        match row.into_entry(amount_re) {
            Ok(entry) => self.entries.push(entry),
            Err(err) => {
                tracing::warn!(row = row_number, error = %err, "skipping feed row");
                self.rejected.push((row_number, err));
            }
        }
    }
}

/// Signed amount with at least one digit: `-£100.00`, `+5`
pub(crate) fn amount_regex() -> Result<Regex, regex::Error> {
    Regex::new(r"^[+-][^\d]*\d")
}

impl ActivityRow {
    /// Validate the row and turn it into an entry.
    pub fn into_entry(self, amount_re: &Regex) -> Result<ActivityEntry, RowError> {
        let amount = self.amount.trim();
        if amount.is_empty() {
            return Err(RowError::MissingAmount);
        }
        if !amount_re.is_match(amount) {
            return Err(RowError::UnsignedAmount(amount.to_string()));
        }

        let date = match self.date.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(s) => Some(
                NaiveDate::parse_from_str(s, "%Y-%m-%d")
                    .map_err(|_| RowError::InvalidDate(s.to_string()))?,
            ),
        };

        let record = TransactionRecord {
            avatar_identifier: self.avatar.trim().to_string(),
            title_left: self.title.trim().to_string(),
            subtitle_left: self.subtitle.trim().to_string(),
            title_right: amount.to_string(),
            subtitle_right: self.detail.trim().to_string(),
        };

        Ok(ActivityEntry { date, record })
    }
}
