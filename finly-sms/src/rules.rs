//! Ordered transaction-type/amount rule table.
//!
//! Rules are evaluated top to bottom against the original-case content
//! (patterns carry `(?i)` themselves); the first rule whose pattern matches
//! claims the message. Reordering changes classification of ambiguous
//! messages, so the table order is part of the contract.

use once_cell::sync::Lazy;
use regex::Regex;

use finly_core::TxKind;

/// One (pattern, kind, capture group) extraction rule.
pub struct ExtractionRule {
    pub pattern: Regex,
    pub kind: TxKind,
    pub amount_group: usize,
}

// Amounts: digit groups with optional comma separators and an optional
// decimal part. Inline currency markers (rs / rs. / ₹ / $) are accepted but
// never required.
const AMOUNT: &str = r"([\d,]+\.?\d*)";
const CURRENCY: &str = r"(?:rs\.?\s*|₹\s*|\$\s*)?";

static EXTRACTION_RULES: Lazy<Vec<ExtractionRule>> = Lazy::new(|| {
    let rule = |pattern: String, kind: TxKind| ExtractionRule {
        pattern: Regex::new(&pattern).expect("fixed extraction pattern"),
        kind,
        amount_group: 1,
    };

    vec![
        // Debit / purchase
        rule(
            format!(r"(?i)(?:debited|spent|purchase|paid|debit)\s+(?:of\s+|by\s+|for\s+)?{CURRENCY}{AMOUNT}"),
            TxKind::Expense,
        ),
        // Credit / deposit, verb first
        rule(
            format!(r"(?i)(?:credited|received|deposit|salary|credit)\s+(?:of\s+|by\s+|with\s+)?{CURRENCY}{AMOUNT}"),
            TxKind::Income,
        ),
        // Credit, amount first ("Rs.75,000.00 credited to your account")
        rule(
            format!(r"(?i){CURRENCY}{AMOUNT}\s+(?:credited|deposited|received)"),
            TxKind::Income,
        ),
        // ATM withdrawal
        rule(
            format!(r"(?i)(?:atm|cash)\s+(?:withdrawal|wd|withdraw)\s+(?:of\s+)?{CURRENCY}{AMOUNT}"),
            TxKind::Expense,
        ),
        // Transfer out
        rule(
            format!(r"(?i)(?:transferred|transfer|sent)\s+{CURRENCY}{AMOUNT}"),
            TxKind::Expense,
        ),
        // UPI
        rule(
            format!(r"(?i)upi(?:\s+payment)?(?:\s+of)?\s+{CURRENCY}{AMOUNT}"),
            TxKind::Expense,
        ),
        // Card / POS
        rule(
            format!(r"(?i)(?:card|pos)\s+(?:payment|transaction)\s+(?:of\s+)?{CURRENCY}{AMOUNT}"),
            TxKind::Expense,
        ),
    ]
});

/// Strip thousands separators and parse; only finite, strictly-positive
/// values count.
fn parse_amount(raw: &str) -> Option<f64> {
    let value: f64 = raw.replace(',', "").parse().ok()?;
    if value.is_finite() && value > 0.0 { Some(value) } else { None }
}

/// Apply the rule table; the first textually-matching rule claims the
/// message. A claimed message whose amount is unparseable or non-positive
/// yields `None` outright; later rules are not consulted.
pub fn extract_kind_and_amount(content: &str) -> Option<(TxKind, f64)> {
    for rule in EXTRACTION_RULES.iter() {
        if let Some(caps) = rule.pattern.captures(content) {
            let raw = caps.get(rule.amount_group)?.as_str();
            return parse_amount(raw).map(|amount| (rule.kind, amount));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debit_rule() {
        let (kind, amount) =
            extract_kind_and_amount("Your account has been debited by Rs.2,500.00 at AMAZON").unwrap();
        assert_eq!(kind, TxKind::Expense);
        assert_eq!(amount, 2500.0);
    }

    #[test]
    fn test_credit_verb_first() {
        let (kind, amount) = extract_kind_and_amount("credited with Rs.1,200.50 via NEFT").unwrap();
        assert_eq!(kind, TxKind::Income);
        assert_eq!(amount, 1200.50);
    }

    #[test]
    fn test_credit_amount_first() {
        let (kind, amount) =
            extract_kind_and_amount("Rs.75,000.00 credited to your account").unwrap();
        assert_eq!(kind, TxKind::Income);
        assert_eq!(amount, 75000.0);
    }

    #[test]
    fn test_atm_withdrawal() {
        let (kind, amount) = extract_kind_and_amount("ATM withdrawal of Rs.5000 at SBI ATM").unwrap();
        assert_eq!(kind, TxKind::Expense);
        assert_eq!(amount, 5000.0);
    }

    #[test]
    fn test_transfer_and_upi_and_card() {
        assert_eq!(
            extract_kind_and_amount("transferred Rs.900 to friend"),
            Some((TxKind::Expense, 900.0))
        );
        assert_eq!(
            extract_kind_and_amount("UPI payment of Rs.450 to SWIGGY successful"),
            Some((TxKind::Expense, 450.0))
        );
        assert_eq!(
            extract_kind_and_amount("Card payment of $12.99 at STORE"),
            Some((TxKind::Expense, 12.99))
        );
    }

    #[test]
    fn test_priority_debit_beats_atm_phrasing() {
        // Mentions both a debit verb and an ATM phrase; rule order decides.
        let (kind, amount) =
            extract_kind_and_amount("debited Rs.2000 for ATM withdrawal Rs.2000").unwrap();
        assert_eq!(kind, TxKind::Expense);
        assert_eq!(amount, 2000.0);
    }

    #[test]
    fn test_separator_formatting_is_idempotent() {
        let a = extract_kind_and_amount("debited Rs.2,500.00").unwrap();
        let b = extract_kind_and_amount("debited Rs.2500.00").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.1, 2500.00);
    }

    #[test]
    fn test_zero_amount_is_no_match() {
        assert_eq!(extract_kind_and_amount("debited Rs.0 from account"), None);
        assert_eq!(extract_kind_and_amount("debited Rs.0.00 from account"), None);
    }

    #[test]
    fn test_no_rule_matches() {
        assert_eq!(extract_kind_and_amount("Your OTP is 482910"), None);
        assert_eq!(extract_kind_and_amount(""), None);
    }

    #[test]
    fn test_unparseable_capture_kills_candidate() {
        // The debit rule claims the text, the captured ",," fails to parse,
        // and no later rule gets a turn.
        assert_eq!(extract_kind_and_amount("debited ,, and sent 500"), None);
    }
}
