//! Deterministic category rules for activity rows.
//!
//! Priority: savings flag > transaction kind > subscription keywords >
//! merchant buckets > General.

use sling_core::{Category, CategoryInfo, Classification, TransactionKind, TransactionRecord};

use crate::classifier::classify_detailed;

/// Known subscription services
const SUBSCRIPTION_KEYWORDS: &[&str] = &[
    "netflix",
    "spotify",
    "disney+",
    "disney plus",
    "hulu",
    "prime video",
    "apple music",
    "apple tv",
    "youtube premium",
    "hbo",
    "icloud",
    "dropbox",
    "google one",
    "notion",
    "microsoft 365",
    "adobe",
    "canva",
    "chatgpt",
    "audible",
    "duolingo",
    "headspace",
    "peloton",
    "strava",
    "puregym",
];

const SHOPPING_KEYWORDS: &[&str] = &[
    "boot", "amazon", "asos", "zara", "h&m", "primark", "ikea", "argos", "john lewis", "ebay",
    "uniqlo", "superdrug",
];

const TRANSPORT_KEYWORDS: &[&str] = &[
    "uber", "tfl", "trainline", "bolt", "lyft", "national rail", "ryanair", "easyjet",
    "shell", "parking",
];

const FOOD_KEYWORDS: &[&str] = &[
    "tesco", "sainsbury", "waitrose", "lidl", "aldi", "pret", "starbucks", "costa", "greggs",
    "mcdonald", "nando", "deliveroo", "just eat", "restaurant", "cafe",
];

const ENTERTAINMENT_KEYWORDS: &[&str] = &[
    "cinema", "odeon", "ticketmaster", "steam", "playstation", "xbox", "nintendo", "concert",
    "theatre",
];

/// Merchant buckets, scanned in order
const MERCHANT_BUCKETS: &[(Category, &[&str])] = &[
    (Category::Shopping, SHOPPING_KEYWORDS),
    (Category::Transport, TRANSPORT_KEYWORDS),
    (Category::Food, FOOD_KEYWORDS),
    (Category::Entertainment, ENTERTAINMENT_KEYWORDS),
];

/// Category for a classified record.
pub fn categorize(record: &TransactionRecord, classification: &Classification) -> Category {
    // --- Savings (single source: the classifier) ---
    if classification.is_savings() {
        return Category::Savings;
    }

    // --- Kind-based rules ---
    match classification.kind {
        TransactionKind::P2pSent
        | TransactionKind::P2pReceived
        | TransactionKind::TransferBetweenAccounts => return Category::Transfers,
        TransactionKind::Withdrawal => return Category::Withdrawals,
        TransactionKind::AddMoney => return Category::TopUps,
        TransactionKind::CardPayment
        | TransactionKind::Other
        | TransactionKind::StockBuy
        | TransactionKind::StockSell => {}
    }

    // --- Keyword rules ---
    let text = format!("{} {}", record.title_left, record.subtitle_left).to_lowercase();

    if contains_any(&text, SUBSCRIPTION_KEYWORDS) {
        return Category::Subscriptions;
    }

    MERCHANT_BUCKETS
        .iter()
        .find(|(_, keywords)| contains_any(&text, keywords))
        .map(|(category, _)| *category)
        .unwrap_or(Category::General)
}

/// Display name and icon for a classified record.
pub fn resolve_category(record: &TransactionRecord, classification: &Classification) -> CategoryInfo {
    categorize(record, classification).info()
}

/// Classify, then resolve the category.
pub fn resolve_category_for(record: &TransactionRecord) -> CategoryInfo {
    resolve_category(record, &classify_detailed(record))
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}
