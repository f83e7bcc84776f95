//! Classification output types: the transaction kind tag, the savings flag
//! carried next to it, and the narrative headline

use serde::{Deserialize, Serialize};

/// Transaction kinds inferred from feed text
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum TransactionKind {
    CardPayment,
    P2pSent,
    P2pReceived,
    AddMoney,
    Withdrawal,
    TransferBetweenAccounts,
    StockBuy,
    StockSell,
    Other,
}

impl TransactionKind {
    pub const ALL: [TransactionKind; 9] = [
        TransactionKind::CardPayment,
        TransactionKind::P2pSent,
        TransactionKind::P2pReceived,
        TransactionKind::AddMoney,
        TransactionKind::Withdrawal,
        TransactionKind::TransferBetweenAccounts,
        TransactionKind::StockBuy,
        TransactionKind::StockSell,
        TransactionKind::Other,
    ];

    /// Stable tag name, same as the serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::CardPayment => "cardPayment",
            TransactionKind::P2pSent => "p2pSent",
            TransactionKind::P2pReceived => "p2pReceived",
            TransactionKind::AddMoney => "addMoney",
            TransactionKind::Withdrawal => "withdrawal",
            TransactionKind::TransferBetweenAccounts => "transferBetweenAccounts",
            TransactionKind::StockBuy => "stockBuy",
            TransactionKind::StockSell => "stockSell",
            TransactionKind::Other => "other",
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction of money relative to a savings account
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum SavingsFlow {
    /// Money moved into savings
    Deposit,
    /// Money taken out of savings
    Withdrawal,
}

/// Result of a single classification pass.
///
/// `savings` is derived once here so the narrative and category layers never
/// re-inspect the raw text for it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Classification {
    pub kind: TransactionKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub savings: Option<SavingsFlow>,
}

impl Classification {
    pub fn new(kind: TransactionKind) -> Self {
        Self { kind, savings: None }
    }

    pub fn with_savings(mut self, flow: SavingsFlow) -> Self {
        self.savings = Some(flow);
        self
    }

    pub fn is_savings(&self) -> bool {
        self.savings.is_some()
    }
}

/// Headline pieces: "You sent" / "£50.00" / "to Jane"
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Narrative {
    pub prefix: String,
    /// Amount without its sign
    pub amount: String,
    pub suffix: String,
}

impl Narrative {
    pub fn new(
        prefix: impl Into<String>,
        amount: impl Into<String>,
        suffix: impl Into<String>,
    ) -> Self {
        Self {
            prefix: prefix.into(),
            amount: amount.into(),
            suffix: suffix.into(),
        }
    }

    /// The full sentence, e.g. "You spent £100.00 at Boots"
    pub fn headline(&self) -> String {
        [self.prefix.as_str(), self.amount.as_str(), self.suffix.as_str()]
            .iter()
            .filter(|s| !s.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ")
    }
}
