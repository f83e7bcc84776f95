//! Display categories for activity rows

use serde::{Deserialize, Serialize};

/// Activity categories, each with a fixed display name and icon
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Savings,
    Transfers,
    Withdrawals,
    TopUps,
    Subscriptions,
    Shopping,
    Transport,
    Food,
    Entertainment,
    General,
}

impl Category {
    /// Display name shown in the feed
    pub fn name(&self) -> &'static str {
        match self {
            Category::Savings => "Savings",
            Category::Transfers => "Transfers",
            Category::Withdrawals => "Withdrawals",
            Category::TopUps => "Top-ups",
            Category::Subscriptions => "Subscriptions",
            Category::Shopping => "Shopping",
            Category::Transport => "Transport",
            Category::Food => "Food & Drink",
            Category::Entertainment => "Entertainment",
            Category::General => "General",
        }
    }

    /// Symbol identifier for the category icon
    pub fn icon(&self) -> &'static str {
        match self {
            Category::Savings => "banknote.fill",
            Category::Transfers => "arrow.up.right",
            Category::Withdrawals => "arrow.down.to.line",
            Category::TopUps => "plus.circle.fill",
            Category::Subscriptions => "repeat",
            Category::Shopping => "bag.fill",
            Category::Transport => "car.fill",
            Category::Food => "fork.knife",
            Category::Entertainment => "ticket.fill",
            Category::General => "square.grid.2x2.fill",
        }
    }

    pub fn info(&self) -> CategoryInfo {
        CategoryInfo {
            id: *self,
            name: self.name().to_string(),
            icon: self.icon().to_string(),
        }
    }
}

/// Name and icon handed to presentation code
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CategoryInfo {
    pub id: Category,
    pub name: String,
    pub icon: String,
}
