//! Headline text for an activity row: "You sent £50.00 to Jane"

use sling_core::{Classification, Narrative, SavingsFlow, TransactionKind, TransactionRecord};

use crate::ticker::resolve_ticker;

/// Build the (prefix, amount, suffix) headline for a classified record.
pub fn build_narrative(record: &TransactionRecord, classification: &Classification) -> Narrative {
    let name = record.title_left.as_str();
    let amount = record.display_amount();

    let (prefix, suffix) = match classification.kind {
        TransactionKind::P2pSent => ("You sent", format!("to {name}")),
        TransactionKind::P2pReceived => ("You received", format!("from {name}")),
        TransactionKind::CardPayment => ("You spent", format!("at {name}")),
        TransactionKind::AddMoney => ("You added", format!("from {name}")),
        TransactionKind::Withdrawal => {
            if classification.is_savings() {
                ("You withdrew", format!("from {name}"))
            } else {
                ("You withdrew", format!("to {name}"))
            }
        }
        TransactionKind::TransferBetweenAccounts => match classification.savings {
            Some(SavingsFlow::Deposit) => ("You added", format!("to {name}")),
            Some(SavingsFlow::Withdrawal) => ("You withdrew", format!("from {name}")),
            None => {
                let suffix = destination(&record.subtitle_left)
                    .map(|dest| format!("to {dest}"))
                    .unwrap_or_else(|| format!("from {name}"));
                ("You moved", suffix)
            }
        },
        TransactionKind::StockBuy => ("You bought", format!("of {}", resolve_ticker(record))),
        TransactionKind::StockSell => ("You sold", format!("of {}", resolve_ticker(record))),
        TransactionKind::Other => {
            if record.is_outgoing() {
                ("You paid", format!("to {name}"))
            } else {
                ("You received", format!("from {name}"))
            }
        }
    };

    Narrative::new(prefix, amount, suffix)
}

/// Destination named after the word "to" in an annotation like
/// "from Main to Savings". Case of the destination is kept.
fn destination(subtitle: &str) -> Option<String> {
    let words: Vec<&str> = subtitle.split_whitespace().collect();
    let at = words.iter().position(|w| w.eq_ignore_ascii_case("to"))?;
    let rest = words[at + 1..].join(" ");
    if rest.is_empty() { None } else { Some(rest) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::classify_detailed;

    fn narrate(record: &TransactionRecord) -> Narrative {
        build_narrative(record, &classify_detailed(record))
    }

    #[test]
    fn test_card_payment_narrative() {
        let r = TransactionRecord::new("boots.com", "Boots", "Card payment", "-£100.00");
        assert_eq!(narrate(&r), Narrative::new("You spent", "£100.00", "at Boots"));
    }

    #[test]
    fn test_p2p_narratives() {
        let r = TransactionRecord::new("Avatar2", "Agustin Alvarez", "Received", "+£100.00");
        assert_eq!(
            narrate(&r),
            Narrative::new("You received", "£100.00", "from Agustin Alvarez")
        );

        let r = TransactionRecord::new("JD", "Jane Doe", "", "-£50.00");
        assert_eq!(narrate(&r).headline(), "You sent £50.00 to Jane Doe");
    }

    #[test]
    fn test_add_money_and_withdrawal() {
        let r = TransactionRecord::new("AccountMonzo", "Monzo", "", "+£200.00");
        assert_eq!(narrate(&r).headline(), "You added £200.00 from Monzo");

        let r = TransactionRecord::new("🏧", "ATM Oxford St", "", "-£40.00");
        assert_eq!(narrate(&r).headline(), "You withdrew £40.00 to ATM Oxford St");

        let c = Classification::new(TransactionKind::Withdrawal).with_savings(SavingsFlow::Withdrawal);
        let r = TransactionRecord::new("AccountSavings", "Savings", "Withdrawal", "+£40.00");
        assert_eq!(build_narrative(&r, &c).suffix, "from Savings");
    }

    #[test]
    fn test_transfer_destination_from_subtitle() {
        let r = TransactionRecord::new("AccountMain", "Main", "Moved from Main to Holiday Pot", "-£10.00");
        assert_eq!(narrate(&r), Narrative::new("You moved", "£10.00", "to Holiday Pot"));

        let r = TransactionRecord::new("AccountMain", "Main", "Transfer", "+£10.00");
        assert_eq!(narrate(&r).suffix, "from Main");

        // "to" with nothing after it
        let r = TransactionRecord::new("AccountMain", "Main", "Transfer to", "+£10.00");
        assert_eq!(narrate(&r).suffix, "from Main");
    }

    #[test]
    fn test_savings_transfer_variants() {
        let r = TransactionRecord::new("AccountSavings", "Savings", "Deposit", "-£25.00");
        assert_eq!(narrate(&r), Narrative::new("You added", "£25.00", "to Savings"));

        let r = TransactionRecord::new("AccountSavings", "Savings", "Moved to Main", "+£25.00");
        assert_eq!(narrate(&r), Narrative::new("You withdrew", "£25.00", "from Savings"));
    }

    #[test]
    fn test_stock_narratives_use_ticker() {
        let r = TransactionRecord::new("StockApple", "Apple", "", "+£50.00")
            .with_subtitle_right("+0.50 AAPL");
        let n = narrate(&r);
        assert_eq!(n.prefix, "You sold");
        assert!(n.suffix.contains("AAPL"));

        let r = TransactionRecord::new("StockTesla", "Tesla", "", "-£30.00");
        assert_eq!(narrate(&r).headline(), "You bought £30.00 of TSLA");
    }

    #[test]
    fn test_other_by_sign() {
        let r = TransactionRecord::new("🎁", "Cashback", "Reward", "+£3.00");
        assert_eq!(narrate(&r).headline(), "You received £3.00 from Cashback");

        let c = Classification::new(TransactionKind::Other);
        let r = TransactionRecord::new("🎁", "Charity", "", "-£3.00");
        assert_eq!(build_narrative(&r, &c).headline(), "You paid £3.00 to Charity");
    }

    #[test]
    fn test_amount_never_signed() {
        for amount in ["-£1.00", "+£1.00", "£1.00", "--£1.00"] {
            let r = TransactionRecord::new("JD", "Jane", "", amount);
            let n = narrate(&r);
            assert!(!n.amount.starts_with(['+', '-']), "{amount} -> {}", n.amount);
        }
    }
}
