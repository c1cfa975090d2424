//! The extractor's output record.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use finly_core::{Category, Transaction, TxKind, TxSource};

/// An unsaved transaction extracted from a message, pending user review.
///
/// A candidate always carries a kind and a strictly-positive amount; it has
/// no id, date, or creation timestamp. Those belong to the confirmation
/// step, and the date must be supplied by the caller (the extractor never
/// reads dates out of message bodies).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateTransaction {
    #[serde(rename = "type")]
    pub kind: TxKind,
    pub amount: f64,
    pub description: String,
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merchant: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,
    /// Always [`TxSource::Sms`]; candidates only ever come from messages.
    #[serde(default = "sms_source")]
    pub source: TxSource,
}

fn sms_source() -> TxSource {
    TxSource::Sms
}

impl CandidateTransaction {
    /// Promote to a full transaction once the user confirms it.
    pub fn into_transaction(
        self,
        id: impl Into<String>,
        date: NaiveDate,
        created_at: DateTime<Utc>,
    ) -> Transaction {
        let mut tx = Transaction::new(
            id,
            self.kind,
            self.amount,
            self.category,
            self.description,
            date,
            created_at,
            self.source,
        );
        tx.merchant = self.merchant;
        tx.account = self.account;
        tx
    }
}
