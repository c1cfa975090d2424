//! The end-to-end extraction pipeline.

use crate::candidate::CandidateTransaction;
use crate::context::{extract_account, extract_merchant};
use crate::describe::{auto_category, synthesize_description};
use crate::filter::is_financially_relevant;
use crate::rules::extract_kind_and_amount;

/// Extract a candidate transaction from one message, or decide none exists.
///
/// The relevance filter gates everything; a candidate is only produced when
/// both a kind and a strictly-positive amount extract. Merchant and account
/// are best-effort extras and never gate the result. Pure and stateless,
/// so it is safe to map over a batch of messages concurrently.
pub fn parse_sms_transaction(content: &str, sender: &str) -> Option<CandidateTransaction> {
    if !is_financially_relevant(content, sender) {
        return None;
    }

    let (kind, amount) = extract_kind_and_amount(content)?;

    let merchant = extract_merchant(content);
    let account = extract_account(content);
    let description = synthesize_description(kind, content, merchant.as_deref());
    let category = auto_category(content, merchant.as_deref(), kind);

    Some(CandidateTransaction {
        kind,
        amount,
        description,
        category,
        merchant,
        account,
        source: finly_core::TxSource::Sms,
    })
}
