//! finly-core: domain types and analytics for the Finly finance tracker

pub mod bill;
pub mod category;
pub mod currency;
pub mod message;
pub mod stats;
pub mod time;
pub mod transaction;

pub use bill::{Bill, Frequency, due_within, overdue};
pub use category::{Category, CategoryKind};
pub use currency::{CurrencyInfo, currency_for_locale, currency_for_region, format_amount};
pub use message::SmsMessage;
pub use stats::{FinancialStats, MonthPoint, MonthTotals, compute_stats};
pub use transaction::{Transaction, TxKind, TxSource};
