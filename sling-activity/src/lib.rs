//! sling-activity: transaction classifier, narrative builder, category rules,
//! ticker extraction and the category digest for the activity feed

pub mod category_rules;
pub mod classifier;
pub mod describe;
pub mod digest;
pub mod narrative;
pub mod ticker;

pub use category_rules::{categorize, resolve_category, resolve_category_for};
pub use classifier::{classify, classify_detailed};
pub use describe::{ActivityDescription, describe};
pub use digest::{ActivityDigest, CategorySummary};
pub use narrative::build_narrative;
pub use ticker::{extract_ticker, resolve_ticker, ticker_for_name};
