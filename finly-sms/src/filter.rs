//! Financial-relevance pre-filter.
//!
//! A cheap substring gate that runs before any regex work. Deliberately
//! permissive: a chatty text containing "card" passes and gets rejected by
//! the type/amount stage instead; a genuine bank message must never be
//! dropped here.

/// Vocabulary that marks a message as potentially financial.
const FINANCIAL_KEYWORDS: &[&str] = &[
    "rs",
    "₹",
    "$",
    "debit",
    "credit",
    "paid",
    "received",
    "bank",
    "account",
    "transaction",
    "payment",
    "upi",
    "atm",
    "card",
    "wallet",
    "transfer",
];

/// True if the content or the sender mentions any financial keyword,
/// case-insensitively. Never fails.
pub fn is_financially_relevant(content: &str, sender: &str) -> bool {
    let content = content.to_lowercase();
    let sender = sender.to_lowercase();
    FINANCIAL_KEYWORDS
        .iter()
        .any(|kw| content.contains(kw) || sender.contains(kw))
}
