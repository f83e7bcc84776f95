//! Category digest: groups described activity rows into per-category totals,
//! the "spending by category" view of the feed.

use std::collections::HashMap;

use serde::Serialize;
use sling_core::{Category, TransactionRecord};

use crate::describe::describe;

/// Number of sample headlines kept per category
const SAMPLE_LIMIT: usize = 3;

/// Totals for one category
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CategorySummary {
    pub category: Category,
    pub name: &'static str,
    pub icon: &'static str,
    pub count: usize,
    /// Sum of incoming amounts
    pub money_in: f64,
    /// Sum of outgoing amounts, as a positive number
    pub money_out: f64,
    pub sample_headlines: Vec<String>,
}

impl CategorySummary {
    fn empty(category: Category) -> Self {
        Self {
            category,
            name: category.name(),
            icon: category.icon(),
            count: 0,
            money_in: 0.0,
            money_out: 0.0,
            sample_headlines: Vec::new(),
        }
    }

    /// Incoming minus outgoing
    pub fn net(&self) -> f64 {
        self.money_in - self.money_out
    }
}

/// Builds category summaries from feed records
pub struct ActivityDigest;

impl ActivityDigest {
    /// Group records by category, largest outgoing total first.
    pub fn build(records: &[TransactionRecord]) -> Vec<CategorySummary> {
        let mut groups: HashMap<Category, CategorySummary> = HashMap::new();

        for record in records {
            let description = describe(record);
            let category = description.category.id;
            let summary = groups
                .entry(category)
                .or_insert_with(|| CategorySummary::empty(category));

            summary.count += 1;
            match record.amount_value() {
                Some(value) if value < 0.0 => summary.money_out += value.abs(),
                Some(value) => summary.money_in += value,
                None => {
                    tracing::debug!(amount = %record.title_right, "no numeric amount; counted only");
                }
            }
            if summary.sample_headlines.len() < SAMPLE_LIMIT {
                summary.sample_headlines.push(description.headline());
            }
        }

        let mut summaries: Vec<CategorySummary> = groups.into_values().collect();
        summaries.sort_by(|a, b| {
            b.money_out
                .total_cmp(&a.money_out)
                .then_with(|| a.name.cmp(b.name))
        });
        summaries
    }
}
