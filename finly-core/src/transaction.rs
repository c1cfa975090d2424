//! Transaction records and the raw/candidate distinction.
//!
//! A `Transaction` is a confirmed, stored record: id and `created_at` are
//! assigned by the storage layer, never by the extractor.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::category::Category;

/// Transaction direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TxKind {
    #[serde(rename = "income")]
    Income,
    #[serde(rename = "expense")]
    Expense,
}

/// How a transaction entered the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TxSource {
    #[serde(rename = "manual")]
    Manual,
    #[serde(rename = "sms")]
    Sms,
}

/// A confirmed financial transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: TxKind,
    /// Always positive; direction lives in `kind`.
    pub amount: f64,
    pub category: Category,
    pub description: String,
    /// Date of the transaction (YYYY-MM-DD)
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub source: TxSource,
    /// Counterparty name, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merchant: Option<String>,
    /// Account/card suffix, masked or last 4 digits
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,
}

impl Transaction {
    pub fn new(
        id: impl Into<String>,
        kind: TxKind,
        amount: f64,
        category: Category,
        description: impl Into<String>,
        date: NaiveDate,
        created_at: DateTime<Utc>,
        source: TxSource,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            amount,
            category,
            description: description.into(),
            date,
            created_at,
            source,
            merchant: None,
            account: None,
        }
    }

    pub fn with_merchant(mut self, merchant: impl Into<String>) -> Self {
        self.merchant = Some(merchant.into());
        self
    }

    pub fn with_account(mut self, account: impl Into<String>) -> Self {
        self.account = Some(account.into());
        self
    }

    pub fn is_income(&self) -> bool {
        self.kind == TxKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TxKind::Expense
    }
}
