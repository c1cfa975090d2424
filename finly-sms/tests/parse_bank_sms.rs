//! End-to-end extraction scenarios over realistic bank notification texts.

use finly_core::{Category, TxKind};
use finly_sms::parse_sms_transaction;

#[test]
fn debit_at_merchant_becomes_shopping_expense() {
    let content = "Your account has been debited by Rs.2,500.00 on 15-Jan-25 at AMAZON INDIA. Available balance: Rs.45,230.50";
    let c = parse_sms_transaction(content, "HDFC-BANK").expect("should extract a candidate");

    assert_eq!(c.kind, TxKind::Expense);
    assert_eq!(c.amount, 2500.00);
    assert_eq!(c.category, Category::Shopping);

    let merchant = c.merchant.as_deref().expect("merchant extracted");
    assert!(merchant.starts_with("AMAZON INDIA"), "got {merchant:?}");
    assert!(merchant.len() <= 30);
    assert!(
        c.description.contains("Payment to AMAZON INDIA"),
        "got {:?}",
        c.description
    );
}

#[test]
fn salary_credit_becomes_income() {
    let content = "Rs.75,000.00 credited to your account on 01-Jan-25. Salary from TECH CORP. Available balance: Rs.1,20,450.75";
    let c = parse_sms_transaction(content, "ICICI-BANK").expect("should extract a candidate");

    assert_eq!(c.kind, TxKind::Income);
    assert_eq!(c.amount, 75000.00);
    assert_eq!(c.category, Category::Salary);
    assert_eq!(c.description, "Salary Credit");
}

#[test]
fn chat_message_yields_nothing() {
    assert_eq!(
        parse_sms_transaction("Hey, are we still on for lunch tomorrow?", "+15551234567"),
        None
    );
}

#[test]
fn upi_payment_to_food_merchant() {
    let c = parse_sms_transaction("UPI payment of Rs.450 to SWIGGY successful", "AX-PAYTM")
        .expect("should extract a candidate");

    assert_eq!(c.kind, TxKind::Expense);
    assert_eq!(c.amount, 450.0);
    // The food chain sees "swiggy" in the merchant before the generic
    // upi path can route it anywhere else.
    assert_eq!(c.category, Category::Food);
    assert!(c.merchant.as_deref().unwrap().contains("SWIGGY"));
    assert!(c.description.starts_with("UPI Payment"), "got {:?}", c.description);
}

#[test]
fn atm_withdrawal_with_account_suffix() {
    let c = parse_sms_transaction(
        "ATM withdrawal of Rs.5,000 from a/c ****9921 at SBI BRANCH",
        "SBI",
    )
    .expect("should extract a candidate");

    assert_eq!(c.kind, TxKind::Expense);
    assert_eq!(c.amount, 5000.0);
    assert_eq!(c.account.as_deref(), Some("****9921"));
    assert_eq!(c.description, "ATM Withdrawal");
    assert_eq!(c.category, Category::OtherExpense);
}

#[test]
fn amount_separators_do_not_change_the_result() {
    let with = parse_sms_transaction("debited Rs.2,500.00 at STORE NAME", "HDFC").unwrap();
    let without = parse_sms_transaction("debited Rs.2500.00 at STORE NAME", "HDFC").unwrap();
    assert_eq!(with.amount, 2500.00);
    assert_eq!(with.amount, without.amount);
    assert_eq!(with.category, without.category);
}

#[test]
fn zero_amount_never_produces_a_candidate() {
    assert_eq!(
        parse_sms_transaction("debited Rs.0.00 at STORE", "HDFC-BANK"),
        None
    );
}

#[test]
fn missing_merchant_does_not_gate_the_candidate() {
    let c = parse_sms_transaction("debited Rs.320", "HDFC-BANK").unwrap();
    assert_eq!(c.merchant, None);
    assert_eq!(c.account, None);
    assert_eq!(c.amount, 320.0);
}

#[test]
fn category_chain_prefers_food_over_shopping() {
    // Merchant text satisfies both the food chain ("zomato") and the
    // shopping chain ("store"); the food branch runs first.
    let c = parse_sms_transaction("debited Rs.210 at ZOMATO STORE", "HDFC-BANK").unwrap();
    assert_eq!(c.category, Category::Food);
}

#[test]
fn card_payment_path() {
    let c = parse_sms_transaction(
        "Card payment of Rs.1,299.00 at CROMA ELECTRONICS with card ending 4411",
        "VM-AXISBK",
    )
    .unwrap();

    assert_eq!(c.kind, TxKind::Expense);
    assert_eq!(c.amount, 1299.0);
    assert_eq!(c.account.as_deref(), Some("4411"));
    assert!(c.description.starts_with("Card Payment at"), "got {:?}", c.description);
}

#[test]
fn batch_parse_filters_candidates() {
    let messages = [
        ("Rs.75,000.00 credited to your account. Salary from TECH CORP.", "ICICI-BANK"),
        ("Your OTP for login is 423911. Do not share it.", "VK-OTPSMS"),
        ("UPI payment of Rs.450 to SWIGGY successful", "AX-PAYTM"),
        ("Movie night on Friday?", "+15550100"),
    ];

    let candidates: Vec<_> = messages
        .iter()
        .filter_map(|(content, sender)| parse_sms_transaction(content, sender))
        .collect();

    assert_eq!(candidates.len(), 2);
    assert_eq!(candidates[0].kind, TxKind::Income);
    assert_eq!(candidates[1].kind, TxKind::Expense);
}
