//! sling-ingest: activity-feed exports (CSV / JSON) into typed records.

pub mod error;
pub mod parsers;
pub mod types;

pub use error::RowError;
pub use parsers::activity_csv::{parse_activity_csv, parse_activity_csv_str};
pub use parsers::activity_json::{parse_activity_json, parse_activity_json_str};
pub use parsers::parse_activity_file;
pub use types::{ActivityEntry, ActivityRow, IngestReport};
