//! Deterministic transaction-kind rules over the feed's display text.
//!
//! Checks run in a fixed order and the first match wins. Every record gets
//! exactly one kind.

use sling_core::{Classification, SavingsFlow, TransactionKind, TransactionRecord};

const ADD_MONEY_KEYWORDS: &[&str] = &["top up", "added", "added money"];
const FUNDING_AVATAR_KEYWORDS: &[&str] = &["monzo", "wise", "bank"];
const WITHDRAWAL_KEYWORDS: &[&str] = &["withdrawal", "withdrew"];
const TRANSFER_KEYWORDS: &[&str] = &["transfer", "moved"];
const SAVINGS_KEYWORDS: &[&str] = &["saving", "interest"];
const STOCK_KEYWORDS: &[&str] = &["stock", "invest", "dividend"];

/// Classify a record into one transaction kind.
pub fn classify(record: &TransactionRecord) -> TransactionKind {
    classify_detailed(record).kind
}

/// Classify a record and attach its savings flow, if it touches savings.
pub fn classify_detailed(record: &TransactionRecord) -> Classification {
    let kind = classify_kind(record);
    let classification = match savings_flow(record) {
        Some(flow) => Classification::new(kind).with_savings(flow),
        None => Classification::new(kind),
    };
    tracing::trace!(
        title = %record.title_left,
        kind = %classification.kind,
        savings = ?classification.savings,
        "classified activity row"
    );
    classification
}

fn classify_kind(record: &TransactionRecord) -> TransactionKind {
    let subtitle = record.subtitle_left.to_lowercase();
    let title = record.title_left.to_lowercase();
    let avatar = &record.avatar_identifier;
    let avatar_lower = avatar.to_lowercase();
    let outgoing = record.is_outgoing();

    // Card payment
    if subtitle.contains("card payment") {
        return TransactionKind::CardPayment;
    }

    // Top-ups, including unlabeled incoming money from a funding account
    let from_funding_account = subtitle.is_empty()
        && record.is_incoming()
        && (avatar.starts_with("Account") || contains_any(&avatar_lower, FUNDING_AVATAR_KEYWORDS));
    if either_contains(&subtitle, &title, ADD_MONEY_KEYWORDS) || from_funding_account {
        return TransactionKind::AddMoney;
    }

    // Withdrawals / cash machines
    if either_contains(&subtitle, &title, WITHDRAWAL_KEYWORDS) || title.contains("atm") {
        return TransactionKind::Withdrawal;
    }

    // Account-to-account moves
    if either_contains(&subtitle, &title, TRANSFER_KEYWORDS) {
        return TransactionKind::TransferBetweenAccounts;
    }

    // Savings and interest fold into transfers; the flow is kept separately
    if either_contains(&subtitle, &title, SAVINGS_KEYWORDS) {
        return TransactionKind::TransferBetweenAccounts;
    }

    // Stocks
    if avatar.starts_with("Stock") || either_contains(&subtitle, &title, STOCK_KEYWORDS) {
        return if outgoing {
            TransactionKind::StockBuy
        } else {
            TransactionKind::StockSell
        };
    }

    // People
    if record.is_person_avatar() {
        return if subtitle.contains("received") || record.is_incoming() {
            TransactionKind::P2pReceived
        } else {
            TransactionKind::P2pSent
        };
    }

    // Unlabeled outgoing money is assumed to be card spend
    if outgoing {
        return TransactionKind::CardPayment;
    }

    TransactionKind::Other
}

/// Savings detection, shared by every layer through [`Classification`].
fn savings_flow(record: &TransactionRecord) -> Option<SavingsFlow> {
    let title = record.title_left.to_lowercase();
    let avatar = record.avatar_identifier.to_lowercase();
    if !title.contains("saving") && !avatar.contains("saving") {
        return None;
    }
    if record.subtitle_left.to_lowercase().contains("deposit") {
        Some(SavingsFlow::Deposit)
    } else {
        Some(SavingsFlow::Withdrawal)
    }
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

/// Keyword hit in the subtitle or the title, each checked on its own
fn either_contains(subtitle: &str, title: &str, needles: &[&str]) -> bool {
    contains_any(subtitle, needles) || contains_any(title, needles)
}
