//! sling-core: activity-feed record types shared by the classifier, ingest and CLI crates

pub mod category;
pub mod classification;
pub mod record;

pub use category::{Category, CategoryInfo};
pub use classification::{Classification, Narrative, SavingsFlow, TransactionKind};
pub use record::TransactionRecord;
