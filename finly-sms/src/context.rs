//! Best-effort merchant and account extraction.
//!
//! Independent of the type/amount stage: both run over the raw text and
//! absence is a normal outcome, never an error.

use once_cell::sync::Lazy;
use regex::Regex;

/// Merchant patterns, tried in order; first match wins. Each captures an
/// uppercase-led run of letters/digits/space/&/./- between 3 and 31 chars.
static MERCHANT_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)(?:at|from|to)\s+([A-Z][A-Z0-9\s&.-]{2,30})",
        r"(?i)(?:merchant|store):\s*([A-Z][A-Z0-9\s&.-]{2,30})",
        r"(?i)(?:pos|card)\s+([A-Z][A-Z0-9\s&.-]{2,30})",
        r"(?i)upi\s+([A-Z][A-Z0-9\s&.-]{2,30})",
        r"(?i)(?:paid to|sent to)\s+([A-Z][A-Z0-9\s&.-]{2,30})",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("fixed merchant pattern"))
    .collect()
});

/// Account patterns: a 4-digit suffix, optionally masked with asterisks,
/// after an a/c or card marker.
static ACCOUNT_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)(?:a/c|account|acc)\s*(?:no\.?\s*)?(\*+\d{4}|\d{4})",
        r"(?i)(?:card|ending)\s*(\*+\d{4}|\d{4})",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("fixed account pattern"))
    .collect()
});

fn clean_merchant(raw: &str) -> String {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace() || matches!(c, '&' | '.' | '-'))
        .collect();
    let cleaned = cleaned.trim();
    if cleaned.chars().count() > 30 {
        cleaned.chars().take(30).collect::<String>().trim().to_string()
    } else {
        cleaned.to_string()
    }
}

/// Pull a counterparty name out of the message, if any pattern hits.
pub fn extract_merchant(content: &str) -> Option<String> {
    for pattern in MERCHANT_PATTERNS.iter() {
        if let Some(caps) = pattern.captures(content) {
            let merchant = clean_merchant(caps.get(1)?.as_str());
            if !merchant.is_empty() {
                return Some(merchant);
            }
        }
    }
    None
}

/// Pull an account/card suffix ("1234" or "****1234"), if present.
pub fn extract_account(content: &str) -> Option<String> {
    for pattern in ACCOUNT_PATTERNS.iter() {
        if let Some(caps) = pattern.captures(content) {
            return Some(caps.get(1)?.as_str().to_string());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merchant_after_at() {
        let m = extract_merchant("debited Rs.500 at DOMINOS PIZZA today").unwrap();
        assert!(m.starts_with("DOMINOS PIZZA"));
    }

    #[test]
    fn test_merchant_marker_colon() {
        assert_eq!(
            extract_merchant("Merchant: BIG BAZAAR ref 8892").as_deref(),
            Some("BIG BAZAAR ref 8892")
        );
    }

    #[test]
    fn test_merchant_truncated_to_30_chars() {
        let m = extract_merchant("paid Rs.100 at SOME EXTREMELY LONG MERCHANT NAME LTD").unwrap();
        assert!(m.len() <= 30, "got {} chars: {m:?}", m.len());
    }

    #[test]
    fn test_no_merchant_is_none() {
        assert_eq!(extract_merchant("debited Rs.500"), None);
    }

    #[test]
    fn test_account_masked_and_plain() {
        assert_eq!(
            extract_account("debited from a/c ****1234 on 01-Jan").as_deref(),
            Some("****1234")
        );
        assert_eq!(
            extract_account("your card ending 5678 was charged").as_deref(),
            Some("5678")
        );
        assert_eq!(
            extract_account("account no. 4321 debited").as_deref(),
            Some("4321")
        );
    }

    #[test]
    fn test_no_account_is_none() {
        assert_eq!(extract_account("debited Rs.500 at STORE"), None);
    }
}
