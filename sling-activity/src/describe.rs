//! Record -> classification -> headline + category, in one call

use serde::{Deserialize, Serialize};
use sling_core::{CategoryInfo, Classification, Narrative, TransactionRecord};

use crate::category_rules::resolve_category;
use crate::classifier::classify_detailed;
use crate::narrative::build_narrative;

/// Everything presentation code needs for one activity row
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActivityDescription {
    pub classification: Classification,
    pub narrative: Narrative,
    pub category: CategoryInfo,
}

impl ActivityDescription {
    pub fn headline(&self) -> String {
        self.narrative.headline()
    }
}

/// Describe a single record.
pub fn describe(record: &TransactionRecord) -> ActivityDescription {
    let classification = classify_detailed(record);
    ActivityDescription {
        narrative: build_narrative(record, &classification),
        category: resolve_category(record, &classification),
        classification,
    }
}
