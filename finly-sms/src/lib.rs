//! finly-sms: rule-based extraction of transactions from bank SMS text.
//!
//! The pipeline is four stages: a financial-relevance filter, an ordered
//! type/amount rule table, best-effort merchant/account extraction, and
//! description + category synthesis. Every stage is a pure function of the
//! message text; the only shared state is the fixed rule tables, compiled
//! once per process.

pub mod candidate;
pub mod context;
pub mod describe;
pub mod filter;
pub mod parser;
pub mod rules;

pub use candidate::CandidateTransaction;
pub use context::{extract_account, extract_merchant};
pub use describe::{auto_category, synthesize_description};
pub use filter::is_financially_relevant;
pub use parser::parse_sms_transaction;
pub use rules::extract_kind_and_amount;
