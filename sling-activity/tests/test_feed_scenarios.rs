use sling_activity::{ActivityDigest, classify, describe, extract_ticker};
use sling_core::{Category, Narrative, TransactionKind, TransactionRecord};
use sling_ingest::parse_activity_csv;
use std::path::PathBuf;

fn activity_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .join("activity.csv")
}

fn feed() -> Vec<TransactionRecord> {
    parse_activity_csv(activity_path()).unwrap().records()
}

fn find<'a>(records: &'a [TransactionRecord], title: &str, subtitle: &str) -> &'a TransactionRecord {
    records
        .iter()
        .find(|r| r.title_left == title && r.subtitle_left == subtitle)
        .unwrap_or_else(|| panic!("no row {title} / {subtitle}"))
}

#[test]
fn test_boots_card_payment_scenario() {
    let records = feed();
    let boots = find(&records, "Boots", "Card payment");
    let d = describe(boots);
    assert_eq!(d.classification.kind, TransactionKind::CardPayment);
    assert_eq!(d.narrative, Narrative::new("You spent", "£100.00", "at Boots"));
    assert_eq!(d.category.name, "Shopping");
    assert_eq!(d.category.icon, "bag.fill");
}

#[test]
fn test_p2p_received_scenario() {
    let records = feed();
    let d = describe(find(&records, "Agustin Alvarez", "Received"));
    assert_eq!(d.classification.kind, TransactionKind::P2pReceived);
    assert_eq!(
        d.narrative,
        Narrative::new("You received", "£100.00", "from Agustin Alvarez")
    );
    assert_eq!(d.category.name, "Transfers");
    assert_eq!(d.category.icon, "arrow.up.right");
}

#[test]
fn test_stock_sell_scenario() {
    let records = feed();
    let d = describe(find(&records, "Apple", ""));
    assert_eq!(d.classification.kind, TransactionKind::StockSell);
    assert!(d.narrative.suffix.contains("AAPL"));
}

#[test]
fn test_card_payment_subtitle_always_wins() {
    for r in feed() {
        if r.subtitle_left.to_lowercase().contains("card payment") {
            assert_eq!(classify(&r), TransactionKind::CardPayment, "{:?}", r);
        }
    }
}

#[test]
fn test_amount_never_signed_and_pure() {
    for r in feed() {
        let first = describe(&r);
        assert!(!first.narrative.amount.starts_with(['+', '-']));
        assert_eq!(first, describe(&r), "describe must be deterministic");
    }
}

#[test]
fn test_fixture_covers_every_kind() {
    let kinds: std::collections::HashSet<_> = feed().iter().map(classify).collect();
    for kind in TransactionKind::ALL {
        assert!(kinds.contains(&kind), "fixture has no {kind} row");
    }
}

#[test]
fn test_unsigned_row_rejected_by_ingest() {
    let report = parse_activity_csv(activity_path()).unwrap();
    assert_eq!(report.rejected.len(), 1);
}

#[test]
fn test_digest_over_fixture() {
    let digest = ActivityDigest::build(&feed());
    let total: usize = digest.iter().map(|s| s.count).sum();
    assert_eq!(total, feed().len());
    assert!(digest.iter().any(|s| s.category == Category::Savings));
    assert!(digest.iter().any(|s| s.category == Category::Subscriptions));
    for w in digest.windows(2) {
        assert!(w[0].money_out >= w[1].money_out);
    }
}

#[test]
fn test_ticker_examples() {
    assert_eq!(extract_ticker("+0.50 AMZN").as_deref(), Some("AMZN"));
    assert_eq!(extract_ticker("Sold 0.50 AMZNx").as_deref(), Some("AMZN"));
    assert_eq!(extract_ticker(""), None);
    assert_eq!(extract_ticker("hello world"), None);
}
