//! Description synthesis and keyword auto-categorization.
//!
//! The category chains are ordered (keyword set, category) tables walked
//! top to bottom, first satisfied branch wins. Several chains can match the
//! same message, so the order is load-bearing: transportation is checked
//! before food, food before shopping, and so on.

use finly_core::{Category, TxKind};

/// Income chain: content keywords only.
const INCOME_CHAIN: &[(&[&str], Category)] = &[
    (&["salary", "payroll"], Category::Salary),
    (&["freelance", "contract"], Category::Freelance),
    (&["investment", "dividend"], Category::Investments),
];

/// One branch of the expense chain. Merchant keywords match only against
/// the extracted merchant name, content keywords only against the body.
struct ExpenseRule {
    category: Category,
    merchant_keywords: &'static [&'static str],
    content_keywords: &'static [&'static str],
}

const EXPENSE_CHAIN: &[ExpenseRule] = &[
    ExpenseRule {
        category: Category::Transportation,
        merchant_keywords: &["uber", "ola", "taxi", "cab", "metro"],
        content_keywords: &["fuel", "petrol", "diesel"],
    },
    ExpenseRule {
        category: Category::Food,
        merchant_keywords: &[
            "restaurant", "cafe", "food", "zomato", "swiggy", "dominos", "mcdonald", "kfc",
            "pizza",
        ],
        content_keywords: &["dining"],
    },
    ExpenseRule {
        category: Category::Shopping,
        merchant_keywords: &["amazon", "flipkart", "myntra", "ajio", "mall", "store"],
        content_keywords: &["shopping"],
    },
    ExpenseRule {
        category: Category::Entertainment,
        merchant_keywords: &["netflix", "spotify", "prime", "hotstar", "cinema", "theatre"],
        content_keywords: &["subscription", "movie"],
    },
    ExpenseRule {
        category: Category::Healthcare,
        merchant_keywords: &["apollo", "medplus"],
        content_keywords: &["medical", "pharmacy", "hospital", "doctor"],
    },
    ExpenseRule {
        category: Category::Utilities,
        merchant_keywords: &[],
        content_keywords: &["electricity", "water", "gas", "internet", "mobile", "recharge"],
    },
];

/// Build the human-readable description from the transaction kind, the
/// message body, and the extracted merchant.
pub fn synthesize_description(kind: TxKind, content: &str, merchant: Option<&str>) -> String {
    let content = content.to_lowercase();

    match kind {
        TxKind::Expense => {
            if content.contains("atm") || content.contains("cash") {
                "ATM Withdrawal".to_string()
            } else if content.contains("upi") {
                match merchant {
                    Some(m) => format!("UPI Payment to {m}"),
                    None => "UPI Payment".to_string(),
                }
            } else if content.contains("card") {
                match merchant {
                    Some(m) => format!("Card Payment at {m}"),
                    None => "Card Payment".to_string(),
                }
            } else {
                match merchant {
                    Some(m) => format!("Payment to {m}"),
                    None => "Payment".to_string(),
                }
            }
        }
        TxKind::Income => {
            if content.contains("salary") {
                "Salary Credit".to_string()
            } else if content.contains("transfer") {
                match merchant {
                    Some(m) => format!("Transfer from {m}"),
                    None => "Transfer Received".to_string(),
                }
            } else {
                match merchant {
                    Some(m) => format!("Payment from {m}"),
                    None => "Credit".to_string(),
                }
            }
        }
    }
}

/// Walk the category chain for the transaction kind.
pub fn auto_category(content: &str, merchant: Option<&str>, kind: TxKind) -> Category {
    let content = content.to_lowercase();
    let merchant = merchant.map(str::to_lowercase).unwrap_or_default();

    if kind == TxKind::Income {
        for (keywords, category) in INCOME_CHAIN {
            if keywords.iter().any(|kw| content.contains(kw)) {
                return *category;
            }
        }
        return Category::OtherIncome;
    }

    // Cash machine withdrawals carry no merchant signal worth categorizing.
    if content.contains("atm") || content.contains("cash") {
        return Category::OtherExpense;
    }

    for rule in EXPENSE_CHAIN {
        let merchant_hit = rule.merchant_keywords.iter().any(|kw| merchant.contains(kw));
        let content_hit = rule.content_keywords.iter().any(|kw| content.contains(kw));
        if merchant_hit || content_hit {
            return rule.category;
        }
    }

    Category::OtherExpense
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expense_descriptions() {
        assert_eq!(
            synthesize_description(TxKind::Expense, "ATM cash withdrawal Rs.500", Some("SBI")),
            "ATM Withdrawal"
        );
        assert_eq!(
            synthesize_description(TxKind::Expense, "UPI payment done", Some("SWIGGY")),
            "UPI Payment to SWIGGY"
        );
        assert_eq!(
            synthesize_description(TxKind::Expense, "card payment done", None),
            "Card Payment"
        );
        assert_eq!(
            synthesize_description(TxKind::Expense, "debited Rs.100", Some("AMAZON")),
            "Payment to AMAZON"
        );
        assert_eq!(
            synthesize_description(TxKind::Expense, "debited Rs.100", None),
            "Payment"
        );
    }

    #[test]
    fn test_income_descriptions() {
        assert_eq!(
            synthesize_description(TxKind::Income, "Salary credited", Some("TECH CORP")),
            "Salary Credit"
        );
        assert_eq!(
            synthesize_description(TxKind::Income, "transfer received", Some("RAVI")),
            "Transfer from RAVI"
        );
        assert_eq!(
            synthesize_description(TxKind::Income, "credited Rs.100", None),
            "Credit"
        );
    }

    #[test]
    fn test_income_categories() {
        assert_eq!(
            auto_category("salary credited", None, TxKind::Income),
            Category::Salary
        );
        assert_eq!(
            auto_category("freelance invoice received", None, TxKind::Income),
            Category::Freelance
        );
        assert_eq!(
            auto_category("dividend payout credited", None, TxKind::Income),
            Category::Investments
        );
        assert_eq!(
            auto_category("credited Rs.100", None, TxKind::Income),
            Category::OtherIncome
        );
    }

    #[test]
    fn test_atm_precedes_everything() {
        // "fuel" would hit transportation, but the atm/cash guard runs first
        assert_eq!(
            auto_category("atm withdrawal near fuel station", None, TxKind::Expense),
            Category::OtherExpense
        );
    }

    #[test]
    fn test_merchant_vs_content_keyword_scope() {
        // "uber" only counts when it appears in the merchant name
        assert_eq!(
            auto_category("payment for uber ride", None, TxKind::Expense),
            Category::OtherExpense
        );
        assert_eq!(
            auto_category("payment done", Some("UBER INDIA"), TxKind::Expense),
            Category::Transportation
        );
        // "fuel" only counts in the body
        assert_eq!(
            auto_category("fuel surcharge applied", None, TxKind::Expense),
            Category::Transportation
        );
    }

    #[test]
    fn test_chain_order_food_before_shopping() {
        // Merchant carries both a food keyword and a shopping keyword; the
        // food branch is evaluated first and wins.
        assert_eq!(
            auto_category("debited Rs.450", Some("ZOMATO AMAZON PAY"), TxKind::Expense),
            Category::Food
        );
    }

    #[test]
    fn test_remaining_expense_chains() {
        assert_eq!(
            auto_category("debited", Some("NETFLIX"), TxKind::Expense),
            Category::Entertainment
        );
        assert_eq!(
            auto_category("pharmacy bill paid", None, TxKind::Expense),
            Category::Healthcare
        );
        assert_eq!(
            auto_category("electricity bill paid", None, TxKind::Expense),
            Category::Utilities
        );
        assert_eq!(
            auto_category("debited Rs.100", None, TxKind::Expense),
            Category::OtherExpense
        );
    }
}
