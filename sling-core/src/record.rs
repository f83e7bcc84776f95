//! The raw activity-feed row as the app displays it

use serde::{Deserialize, Serialize};

/// One row of the activity feed.
///
/// Every field is display text. `title_right` is the signed amount and always
/// starts with `+` or `-`; the sign is the only direction signal.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct TransactionRecord {
    /// Image key: a domain (`boots.com`), an asset tag (`Avatar3`,
    /// `AccountMonzo`, `StockApple`), initials, or an emoji
    pub avatar_identifier: String,
    /// Counterparty or merchant name
    pub title_left: String,
    /// Free-text annotation ("Card payment", "Received", "from X to Y")
    pub subtitle_left: String,
    /// Signed amount, e.g. `-£100.00`
    pub title_right: String,
    /// Secondary annotation, sometimes ticker-bearing (`+0.50 AMZN`)
    #[serde(default)]
    pub subtitle_right: String,
}

impl TransactionRecord {
    /// Create a record with an empty `subtitle_right`
    pub fn new(
        avatar_identifier: impl Into<String>,
        title_left: impl Into<String>,
        subtitle_left: impl Into<String>,
        title_right: impl Into<String>,
    ) -> Self {
        Self {
            avatar_identifier: avatar_identifier.into(),
            title_left: title_left.into(),
            subtitle_left: subtitle_left.into(),
            title_right: title_right.into(),
            subtitle_right: String::new(),
        }
    }

    pub fn with_subtitle_right(mut self, subtitle_right: impl Into<String>) -> Self {
        self.subtitle_right = subtitle_right.into();
        self
    }

    /// Returns true if money left the account (`-` sign)
    pub fn is_outgoing(&self) -> bool {
        self.title_right.starts_with('-')
    }

    /// Returns true if money came in. Unsigned amounts count as incoming.
    pub fn is_incoming(&self) -> bool {
        !self.is_outgoing()
    }

    /// The amount with its sign removed (`-£100.00` -> `£100.00`)
    pub fn display_amount(&self) -> &str {
        self.title_right.trim_start_matches(['+', '-'])
    }

    /// Best-effort signed numeric value of `title_right`.
    ///
    /// Currency symbols and thousands separators are ignored; `None` when the
    /// string holds no digits.
    pub fn amount_value(&self) -> Option<f64> {
        let digits: String = self
            .display_amount()
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '.')
            .collect();
        if !digits.chars().any(|c| c.is_ascii_digit()) {
            return None;
        }
        let value: f64 = digits.parse().ok()?;
        Some(if self.is_outgoing() { -value } else { value })
    }

    /// Whether the avatar looks like a person: an `Avatar*` asset, or one or
    /// two Latin-1 characters (initials).
    ///
    /// Any scalar above U+00FF is read as emoji, so Cyrillic or CJK initials
    /// fail this check. An empty identifier passes.
    pub fn is_person_avatar(&self) -> bool {
        let avatar = &self.avatar_identifier;
        if avatar.starts_with("Avatar") {
            return true;
        }
        avatar.chars().count() <= 2 && avatar.chars().all(|c| (c as u32) <= 0xFF)
    }
}
