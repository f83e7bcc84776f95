//! Best-effort ticker symbols for stock rows

use sling_core::TransactionRecord;

/// Known company names and their tickers
const KNOWN_TICKERS: &[(&str, &str)] = &[
    ("Apple", "AAPL"),
    ("Amazon", "AMZN"),
    ("Tesla", "TSLA"),
    ("Microsoft", "MSFT"),
    ("Google", "GOOGL"),
    ("Alphabet", "GOOGL"),
    ("Meta", "META"),
    ("Netflix", "NFLX"),
    ("Nvidia", "NVDA"),
    ("Spotify", "SPOT"),
    ("Coca-Cola", "KO"),
    ("Disney", "DIS"),
    ("Nike", "NKE"),
    ("McDonald's", "MCD"),
    ("Uber", "UBER"),
    ("Airbnb", "ABNB"),
];

/// Pull a ticker out of text like `+0.50 AMZN` or `Sold 0.50 AMZNx`.
///
/// Only the last space-separated token is considered. A trailing lowercase
/// `x` is dropped from tokens longer than two characters. The result must be
/// 2 to 5 uppercase ASCII letters.
pub fn extract_ticker(text: &str) -> Option<String> {
    let last = text.split(' ').filter(|t| !t.is_empty()).last()?;

    let token = match last.strip_suffix('x') {
        Some(stripped) if last.chars().count() > 2 => stripped,
        _ => last,
    };

    let len = token.chars().count();
    if !(2..=5).contains(&len) {
        return None;
    }
    if !token.chars().all(|c| c.is_ascii_uppercase()) {
        return None;
    }
    Some(token.to_string())
}

/// Look a company name up in the static table: exact first, then ignoring case.
pub fn ticker_for_name(name: &str) -> Option<&'static str> {
    KNOWN_TICKERS
        .iter()
        .find(|(known, _)| *known == name)
        .or_else(|| {
            KNOWN_TICKERS
                .iter()
                .find(|(known, _)| known.eq_ignore_ascii_case(name))
        })
        .map(|(_, ticker)| *ticker)
}

/// Ticker for a stock row, falling back to the raw counterparty name.
pub fn resolve_ticker(record: &TransactionRecord) -> String {
    extract_ticker(&record.subtitle_right)
        .or_else(|| extract_ticker(&record.subtitle_left))
        .or_else(|| ticker_for_name(&record.title_left).map(str::to_string))
        .unwrap_or_else(|| record.title_left.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("+0.50 AMZN", Some("AMZN"))]
    #[case("Sold 0.50 AMZNx", Some("AMZN"))]
    #[case("Bought 2 KO", Some("KO"))]
    #[case("+1 GOOGL  ", Some("GOOGL"))]
    #[case("", None)]
    #[case("   ", None)]
    #[case("hello world", None)]
    #[case("+0.50 A", None)]
    #[case("+0.50 TOOLONG", None)]
    #[case("+0.50 AM3", None)]
    #[case("Xx", None)]
    fn test_extract_ticker(#[case] input: &str, #[case] expected: Option<&str>) {
        assert_eq!(extract_ticker(input).as_deref(), expected);
    }

    #[test]
    fn test_short_token_keeps_trailing_x() {
        // Two characters: no stripping, and lowercase fails the check
        assert_eq!(extract_ticker("Ax"), None);
    }

    #[test]
    fn test_ticker_for_name() {
        assert_eq!(ticker_for_name("Apple"), Some("AAPL"));
        assert_eq!(ticker_for_name("tesla"), Some("TSLA"));
        assert_eq!(ticker_for_name("COCA-COLA"), Some("KO"));
        assert_eq!(ticker_for_name("Unknown Corp"), None);
    }

    #[test]
    fn test_resolve_ticker_fallback_chain() {
        let r = TransactionRecord::new("StockApple", "Apple", "", "+£50.00")
            .with_subtitle_right("+0.50 AAPL");
        assert_eq!(resolve_ticker(&r), "AAPL");

        let r = TransactionRecord::new("StockAmazon", "Amazon", "Bought 1 AMZNx", "-£90.00");
        assert_eq!(resolve_ticker(&r), "AMZN");

        let r = TransactionRecord::new("StockNvidia", "nvidia", "", "-£90.00");
        assert_eq!(resolve_ticker(&r), "NVDA");

        let r = TransactionRecord::new("StockAcme", "Acme Rockets", "", "-£90.00");
        assert_eq!(resolve_ticker(&r), "Acme Rockets");
    }
}
